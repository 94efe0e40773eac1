use crate::{Failure, Fallible, Outcome};

/// Extension trait turning an `Option` into a [`Fallible`].
///
/// The lazy variant only builds the failure when the option is `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::OptionExt;
/// use outcome_rail::Failure;
///
/// let user_id = 7;
/// let lookup: Option<&str> = None;
/// let found = lookup.ok_or_else_failure(|| {
///     Failure::not_found().with_message("no such user").with_metadata("user_id", user_id)
/// });
/// assert_eq!(found.unwrap_error().message(), "no such user");
/// ```
pub trait OptionExt<T> {
    /// Uses `failure` as the error when the option is `None`.
    fn ok_or_failure(self, failure: Failure) -> Fallible<T>;

    /// Builds the error with `f` only when the option is `None`.
    fn ok_or_else_failure<F>(self, f: F) -> Fallible<T>
    where
        F: FnOnce() -> Failure;

    /// Uses [`Failure::not_found`] as the error when the option is `None`.
    fn ok_or_not_found(self) -> Fallible<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn ok_or_failure(self, failure: Failure) -> Fallible<T> {
        match self {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Err(failure),
        }
    }

    #[inline]
    fn ok_or_else_failure<F>(self, f: F) -> Fallible<T>
    where
        F: FnOnce() -> Failure,
    {
        match self {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Err(f()),
        }
    }

    #[inline]
    fn ok_or_not_found(self) -> Fallible<T> {
        self.ok_or_else_failure(Failure::not_found)
    }
}
