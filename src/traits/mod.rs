//! Conversion traits for adopting [`Outcome`](crate::Outcome) at API boundaries.
//!
//! - [`IntoOutcome`]: turns std `Result`s (and outcomes themselves) into an `Outcome`
//! - [`OptionExt`]: turns an `Option` into a [`Fallible`](crate::Fallible) with a chosen failure
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, OptionExt};
//! use outcome_rail::{Failure, Outcome};
//!
//! let parsed = "42".parse::<i32>().into_outcome();
//! assert_eq!(parsed.map_error(|e| e.to_string()), Outcome::ok(42));
//!
//! let missing = None::<i32>.ok_or_not_found();
//! assert_eq!(missing, Outcome::err(Failure::not_found()));
//! ```

pub mod into_outcome;
pub mod option_ext;

pub use into_outcome::IntoOutcome;
pub use option_ext::OptionExt;
