//! The two-variant [`Outcome`] type and its synchronous combinator algebra.
//!
//! Every combinator consumes the outcome and returns a new value; handlers
//! belonging to the variant the outcome is not in are never invoked.
//!
//! # Examples
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
//! let halved = Outcome::ok(10).bind(|v| divide(v, 2)).map(|v| v + 1);
//! assert_eq!(halved, Outcome::ok(6));
//!
//! let failed = Outcome::ok(10).bind(|v| divide(v, 0));
//! assert_eq!(failed, divide(10, 0));
//! assert_eq!(failed.unwrap_or(-1), -1);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod combine;
mod convert;
mod fallible;
mod query;

pub use combine::{accumulate, combine2, combine3};
pub use fallible::{fail, fail_many, success, Fallible, FallibleMany};

/// Outcome of an operation: a success value or an error value, never both.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error value type
///
/// # Variants
///
/// * `Ok(T)` - Holds the success value
/// * `Err(E)` - Holds the error value
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Same as [`Outcome::ok`].
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self::Ok(value)
    }

    /// Same as [`Outcome::err`].
    #[inline]
    pub fn from_error(error: E) -> Self {
        Self::Err(error)
    }

    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.is_ok()
    }

    /// Eliminates the outcome by running exactly one of the two handlers.
    ///
    /// Every other combinator is expressed through this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let describe = |o: Outcome<i32, &str>| o.match_with(|e| format!("error: {e}"), |v| format!("value: {v}"));
    /// assert_eq!(describe(Outcome::ok(3)), "value: 3");
    /// assert_eq!(describe(Outcome::err("boom")), "error: boom");
    /// ```
    #[inline]
    pub fn match_with<R, FE, FO>(self, on_error: FE, on_ok: FO) -> R
    where
        FE: FnOnce(E) -> R,
        FO: FnOnce(T) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_error(error),
        }
    }

    /// Transforms the success value; errors pass through untouched.
    #[inline]
    pub fn map<R, F>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
    {
        self.match_with(Outcome::Err, |value| Outcome::Ok(f(value)))
    }

    /// Transforms the error value; successes pass through untouched.
    #[inline]
    pub fn map_error<R, F>(self, f: F) -> Outcome<T, R>
    where
        F: FnOnce(E) -> R,
    {
        self.match_with(|error| Outcome::Err(f(error)), Outcome::Ok)
    }

    /// Sequences an outcome-producing step, short-circuiting on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let parse = |s: &str| match s.parse::<i32>() {
    ///     Ok(v) => Outcome::ok(v),
    ///     Err(_) => Outcome::err("not a number"),
    /// };
    ///
    /// assert_eq!(Outcome::ok("21").bind(parse).map(|v| v * 2), Outcome::ok(42));
    /// assert_eq!(Outcome::ok("x").bind(parse), Outcome::err("not a number"));
    /// ```
    #[inline]
    pub fn bind<R, F>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Outcome<R, E>,
    {
        self.match_with(Outcome::Err, f)
    }

    /// Sequences a recovery step on the error path.
    #[inline]
    pub fn bind_error<R, F>(self, f: F) -> Outcome<T, R>
    where
        F: FnOnce(E) -> Outcome<T, R>,
    {
        self.match_with(f, Outcome::Ok)
    }

    /// Returns `folder(initial, value)` on success and `initial` on error.
    #[inline]
    pub fn fold<S, F>(self, initial: S, folder: F) -> S
    where
        F: FnOnce(S, T) -> S,
    {
        match self {
            Self::Ok(value) => folder(initial, value),
            Self::Err(_) => initial,
        }
    }

    /// Returns `folder(value, initial)` on success and `initial` on error.
    #[inline]
    pub fn fold_back<S, F>(self, folder: F, initial: S) -> S
    where
        F: FnOnce(T, S) -> S,
    {
        match self {
            Self::Ok(value) => folder(value, initial),
            Self::Err(_) => initial,
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.match_with(|_| default, |value| value)
    }

    /// Returns the success value, or calls `factory` once on error.
    #[inline]
    pub fn unwrap_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.match_with(|_| factory(), |value| value)
    }

    #[inline]
    pub fn unwrap_error_or(self, default: E) -> E {
        self.match_with(|error| error, |_| default)
    }

    /// Returns the error value, or calls `factory` once on success.
    #[inline]
    pub fn unwrap_error_or_else<F>(self, factory: F) -> E
    where
        F: FnOnce() -> E,
    {
        self.match_with(|error| error, |_| factory())
    }

    /// Returns `true` if this is `Ok` and the value equals `value`.
    #[must_use]
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains_by(value, |held, wanted| held == wanted)
    }

    /// Like [`contains`](Outcome::contains), with a caller-supplied equality.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let name: Outcome<String, ()> = Outcome::ok("Ada".to_string());
    /// assert!(name.contains_by(&"ADA".to_string(), |a, b| a.eq_ignore_ascii_case(b)));
    /// ```
    #[must_use]
    #[inline]
    pub fn contains_by<F>(&self, value: &T, comparer: F) -> bool
    where
        F: FnOnce(&T, &T) -> bool,
    {
        match self {
            Self::Ok(held) => comparer(held, value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Ok` and `predicate` holds for the value.
    #[must_use]
    #[inline]
    pub fn exists<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Err`.
    #[track_caller]
    #[inline]
    pub fn unwrap(self) -> T
    where
        E: core::fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => wrong_variant("called `Outcome::unwrap()` on an `Err` value", &error),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Ok`.
    #[track_caller]
    #[inline]
    pub fn unwrap_error(self) -> E
    where
        T: core::fmt::Debug,
    {
        match self {
            Self::Ok(value) => {
                wrong_variant("called `Outcome::unwrap_error()` on an `Ok` value", &value)
            },
            Self::Err(error) => error,
        }
    }

    /// Returns the success value, panicking with `msg` on `Err`.
    #[track_caller]
    #[inline]
    pub fn expect(self, msg: &str) -> T
    where
        E: core::fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => wrong_variant(msg, &error),
        }
    }

    /// Returns the error value, panicking with `msg` on `Ok`.
    #[track_caller]
    #[inline]
    pub fn expect_error(self, msg: &str) -> E
    where
        T: core::fmt::Debug,
    {
        match self {
            Self::Ok(value) => wrong_variant(msg, &value),
            Self::Err(error) => error,
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting; equal to `bind(identity)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::ok(Outcome::ok(5));
    /// assert_eq!(nested.flatten(), Outcome::ok(5));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.bind(|inner| inner)
    }
}

#[cold]
#[track_caller]
fn wrong_variant(msg: &str, payload: &dyn core::fmt::Debug) -> ! {
    panic!("{msg}: {payload:?}")
}
