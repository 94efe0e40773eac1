//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn find_user(id: u32) -> Fallible<&'static str> {
//!     match id {
//!         1 => success("ada"),
//!         _ => fail(Failure::not_found().with_metadata("id", id)),
//!     }
//! }
//!
//! assert_eq!(find_user(1).map(str::len), Outcome::ok(3));
//! assert!(find_user(2).is_error());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`query!`], [`metadata!`]
//! - **Types**: [`Outcome`], [`Failure`], [`Failures`], [`Category`], [`Metadata`]
//! - **Aliases**: [`Fallible`], [`FallibleMany`]
//! - **Functions**: [`success`], [`fail`], [`fail_many`], [`combine2`], [`combine3`], [`accumulate`]
//! - **Traits**: [`IntoOutcome`], [`OptionExt`]

// Macros
pub use crate::{metadata, query};

// Core types
pub use crate::failure::{Category, Failure, Failures, Metadata, MetadataValue};
pub use crate::outcome::{Fallible, FallibleMany, Outcome};

// Constructors and combine helpers
pub use crate::outcome::{accumulate, combine2, combine3, fail, fail_many, success};

// Traits
pub use crate::traits::{IntoOutcome, OptionExt};
