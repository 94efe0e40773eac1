//! Conversions between [`Outcome`], `Result` and `Option`.
//!
//! `Outcome` does not implement the `?` operator; convert with
//! [`Outcome::into_result`] at the point where early return is wanted.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Converts into a std `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn double(input: Outcome<i32, &'static str>) -> Result<i32, &'static str> {
    ///     let value = input.into_result()?;
    ///     Ok(value * 2)
    /// }
    ///
    /// assert_eq!(double(Outcome::ok(4)), Ok(8));
    /// assert_eq!(double(Outcome::err("nope")), Err("nope"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Returns the success value, discarding any error.
    #[inline]
    pub fn into_ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns the error value, discarding any success.
    #[inline]
    pub fn into_err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Borrows both payloads.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Mutably borrows both payloads.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
