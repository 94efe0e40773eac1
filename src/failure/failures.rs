use core::fmt::{self, Display};

use super::{Category, Failure, FailureFormatConfig};
use crate::types::alloc_type::{String, Vec};
use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered, non-empty collection of [`Failure`] values.
///
/// Equality is order-sensitive. There is no way to build or drain an empty
/// aggregate; fallible constructors report [`EmptyFailures`] instead.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Failure, Failures};
///
/// let failures = Failures::new(
///     Failure::validation().with_code("Name.Empty"),
///     [Failure::validation().with_code("Age.Negative")],
/// );
///
/// assert_eq!(failures.len(), 2);
/// assert_eq!(failures.first().code(), "Name.Empty");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Failure>", into = "Vec<Failure>"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Failures {
    items: ErrorVec<Failure>,
}

impl Failures {
    /// Wraps a single failure.
    #[inline]
    pub fn single(failure: Failure) -> Self {
        let mut items = ErrorVec::new();
        items.push(failure);
        Self { items }
    }

    /// Builds an aggregate from a head failure followed by `rest`.
    pub fn new<I>(head: Failure, rest: I) -> Self
    where
        I: IntoIterator<Item = Failure>,
    {
        let mut failures = Self::single(head);
        failures.items.extend(rest);
        failures
    }

    /// Collects `failures`, failing when the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{EmptyFailures, Failure, Failures};
    ///
    /// assert_eq!(Failures::try_from_iter(Vec::<Failure>::new()), Err(EmptyFailures));
    /// assert!(Failures::try_from_iter([Failure::fatal()]).is_ok());
    /// ```
    pub fn try_from_iter<I>(failures: I) -> Result<Self, EmptyFailures>
    where
        I: IntoIterator<Item = Failure>,
    {
        let items: ErrorVec<Failure> = failures.into_iter().collect();
        if items.is_empty() {
            Err(EmptyFailures)
        } else {
            Ok(Self { items })
        }
    }

    /// The first failure in the aggregate.
    #[inline]
    pub fn first(&self) -> &Failure {
        &self.items[0]
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Failure> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Failure] {
        &self.items
    }

    /// Appends a failure at the end.
    #[inline]
    pub fn push(&mut self, failure: Failure) {
        self.items.push(failure);
    }

    /// Appends every failure from `other`, keeping order.
    #[inline]
    pub fn merge(mut self, other: Failures) -> Self {
        self.items.extend(other.items);
        self
    }

    /// Returns `true` if any member belongs to `category`.
    pub fn has_category(&self, category: &Category) -> bool {
        self.items.iter().any(|failure| failure.category() == category)
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Failure> {
        self.items.into_vec()
    }

    /// Renders every member with `config`, joined by its separator.
    pub fn format_with(&self, config: &FailureFormatConfig) -> String {
        config.render_all(self.iter())
    }
}

impl Extend<Failure> for Failures {
    fn extend<I: IntoIterator<Item = Failure>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl Display for Failures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (i, failure) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(failure, f)?;
        }
        f.write_str(" }")
    }
}

impl core::error::Error for Failures {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(self.first())
    }
}

impl TryFrom<Vec<Failure>> for Failures {
    type Error = EmptyFailures;

    fn try_from(failures: Vec<Failure>) -> Result<Self, Self::Error> {
        Self::try_from_iter(failures)
    }
}

impl From<Failures> for Vec<Failure> {
    #[inline]
    fn from(failures: Failures) -> Self {
        failures.into_vec()
    }
}

impl IntoIterator for Failures {
    type Item = Failure;
    type IntoIter = smallvec::IntoIter<[Failure; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Failures {
    type Item = &'a Failure;
    type IntoIter = core::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Returned when a [`Failures`] aggregate would be built from no failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyFailures;

impl Display for EmptyFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a failure aggregate needs at least one failure")
    }
}

impl core::error::Error for EmptyFailures {}
