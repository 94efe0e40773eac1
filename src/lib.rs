//! Two-variant outcomes with structured failures and a composable algebra.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining Steps
//!
//! ```
//! use outcome_rail::{Failure, Fallible, Outcome};
//!
//! fn divide(a: i32, b: i32) -> Fallible<i32> {
//!     if b == 0 {
//!         Outcome::err(Failure::fatal().with_message("Cannot divide by zero"))
//!     } else {
//!         Outcome::ok(a / b)
//!     }
//! }
//!
//! let result = divide(100, 5).bind(|v| divide(v, 2)).map(|v| v + 1);
//! assert_eq!(result, Outcome::ok(11));
//!
//! let message = divide(1, 0).match_with(|f| f.message().to_string(), |v| v.to_string());
//! assert_eq!(message, "Cannot divide by zero");
//! ```
//!
//! ## Reporting Several Failures
//!
//! ```
//! use outcome_rail::{accumulate, fail, success, Failure, Fallible};
//!
//! fn non_empty(field: &str, value: &str) -> Fallible<String> {
//!     if value.is_empty() {
//!         fail(Failure::validation().with_code(format!("{field}.Empty")))
//!     } else {
//!         success(value.to_string())
//!     }
//! }
//!
//! let checked = accumulate([non_empty("Name", ""), non_empty("Email", "")]);
//! let failures = checked.unwrap_error();
//! assert_eq!(failures.len(), 2);
//! assert_eq!(failures.first().code(), "Name.Empty");
//! ```
//!
//! ## Comprehension Syntax
//!
//! ```
//! use outcome_rail::{query, Outcome};
//!
//! let area = query! {
//!     from width in Outcome::<u32, &str>::ok(3);
//!     from height in Outcome::ok(4);
//!     select width * height
//! };
//! assert_eq!(area, Outcome::ok(12));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Structured failure values and the non-empty failure aggregate
pub mod failure;
/// Comprehension and construction macros
pub mod macros;
/// The Outcome type and its combinator algebra
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion traits for adopting Outcome at API boundaries
pub mod traits;
/// Shared storage aliases
pub mod types;

/// Async combinators (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use failure::{
    Category, EmptyFailures, Failure, FailureFormatConfig, Failures, Metadata, MetadataValue,
};
pub use outcome::{
    accumulate, combine2, combine3, fail, fail_many, success, Fallible, FallibleMany, Outcome,
};
pub use traits::{IntoOutcome, OptionExt};
