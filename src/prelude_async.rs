//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! carrier extension traits.
//!
//! # Usage
//!
//! ```
//! use outcome_rail::prelude_async::*;
//!
//! async fn load_row(id: u32) -> Fallible<&'static str> {
//!     match id {
//!         1 => success("42"),
//!         _ => fail(Failure::not_found().with_metadata("id", id)),
//!     }
//! }
//!
//! async fn fetch_age(id: u32) -> Fallible<u8> {
//!     load_row(id)
//!         .bind(|row| {
//!             row.parse::<u8>()
//!                 .into_outcome()
//!                 .map_error(|e| Failure::validation().with_message(e.to_string()))
//!         })
//!         .await
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     assert_eq!(fetch_age(1).await, Outcome::ok(42));
//!     assert!(fetch_age(2).await.is_error());
//! }
//! ```
//!
//! # What's Included
//!
//! - Everything from [`prelude`](crate::prelude)
//! - **Traits**: [`FutureOutcomeExt`](crate::async_ext::FutureOutcomeExt),
//!   [`FutureOutcomeFlattenExt`](crate::async_ext::FutureOutcomeFlattenExt)

pub use crate::prelude::*;

pub use crate::async_ext::{FutureOutcomeExt, FutureOutcomeFlattenExt};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::{FutureTraceExt, TraceOutcomeExt};
