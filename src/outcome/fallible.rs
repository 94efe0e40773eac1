//! [`Outcome`] specialised to the crate's failure types.
//!
//! A single failure and an aggregate are kept as separate error types; moving
//! from one to the other is always an explicit call.

use super::Outcome;
use crate::failure::{Failure, Failures};

/// Outcome whose error channel carries exactly one [`Failure`].
pub type Fallible<T> = Outcome<T, Failure>;

/// Outcome whose error channel carries one or more failures.
pub type FallibleMany<T> = Outcome<T, Failures>;

/// Builds a successful outcome.
#[inline]
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Builds a failed [`Fallible`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Failure, Fallible};
///
/// let missing: Fallible<u32> = fail(Failure::not_found());
/// assert!(missing.is_error());
/// ```
#[inline]
pub fn fail<T>(failure: Failure) -> Fallible<T> {
    Outcome::Err(failure)
}

/// Builds a failed [`FallibleMany`].
#[inline]
pub fn fail_many<T>(failures: Failures) -> FallibleMany<T> {
    Outcome::Err(failures)
}

impl<T> Outcome<T, Failure> {
    /// Lifts the single failure into a one-element aggregate.
    #[inline]
    pub fn into_many(self) -> FallibleMany<T> {
        self.map_error(Failures::single)
    }
}

impl Failure {
    /// Wraps the failure into a failed [`Fallible`] of any success type.
    #[inline]
    pub fn into_outcome<T>(self) -> Fallible<T> {
        Outcome::Err(self)
    }

    /// Wraps the failure into a one-element [`Failures`] aggregate.
    #[inline]
    pub fn into_failures(self) -> Failures {
        Failures::single(self)
    }
}
