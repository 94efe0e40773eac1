//! Sequence-expression sugar over [`Outcome::map`] and [`Outcome::bind`].
//!
//! `select` is `map`; `select_many` is a bind followed by a projection that
//! sees both the outer and the inner success values. The [`query!`](crate::query)
//! macro writes multi-step chains in this shape.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Same as [`Outcome::map`].
    #[inline]
    pub fn select<R, F>(self, selector: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
    {
        self.map(selector)
    }

    /// Binds through `selector` and projects both values with `projector`.
    ///
    /// Defined as `bind(|x| selector(&x).map(|y| projector(x, y)))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let user: Outcome<&str, &str> = Outcome::ok("ada");
    /// let greeting = user.select_many(
    ///     |name| Outcome::ok(name.len()),
    ///     |name, len| format!("{name} has {len} letters"),
    /// );
    /// assert_eq!(greeting, Outcome::ok("ada has 3 letters".to_string()));
    /// ```
    #[inline]
    pub fn select_many<I, R, S, P>(self, selector: S, projector: P) -> Outcome<R, E>
    where
        S: FnOnce(&T) -> Outcome<I, E>,
        P: FnOnce(T, I) -> R,
    {
        self.bind(|x| selector(&x).map(|y| projector(x, y)))
    }
}
