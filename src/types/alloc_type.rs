//! Allocation-backed types shared by the `std` and `no_std` builds.
//!
//! Everything is routed through `alloc` so the same paths resolve whether or
//! not the `std` feature is enabled.
pub use alloc::borrow::Cow;
pub use alloc::format;
pub use alloc::string::{String, ToString};
pub use alloc::vec::Vec;
