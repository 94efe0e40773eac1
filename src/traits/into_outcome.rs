use crate::Outcome;

/// Conversion into an [`Outcome`].
///
/// Implemented for std `Result` and for `Outcome` itself, so generic code can
/// accept either.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::IntoOutcome;
/// use outcome_rail::Outcome;
///
/// fn normalise<R: IntoOutcome<u8, &'static str>>(input: R) -> Outcome<u8, &'static str> {
///     input.into_outcome()
/// }
///
/// assert_eq!(normalise(Ok::<u8, &str>(1)), Outcome::ok(1));
/// assert_eq!(normalise(Outcome::<u8, &str>::err("bad")), Outcome::err("bad"));
/// ```
pub trait IntoOutcome<T, E> {
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}
