//! Structured failure values.
//!
//! A [`Failure`] describes one domain error through a [`Category`], a short
//! machine-readable code, a human-readable message and free-form
//! [`Metadata`]. [`Failures`] is the ordered, non-empty aggregate used when an
//! operation reports several failures at once.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Failure, Category};
//!
//! let failure = Failure::not_found()
//!     .with_message("user 42 does not exist")
//!     .with_metadata("user_id", 42);
//!
//! assert_eq!(failure.category(), &Category::NotFound);
//! assert_eq!(failure.code(), "General.NotFound");
//! assert_eq!(
//!     failure.to_string(),
//!     "Failure { Code = General.NotFound, Message = user 42 does not exist, Type = NotFound, Metadata = { user_id = 42 } }"
//! );
//! ```

use core::fmt::{self, Display};

use crate::types::alloc_type::String;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod category;
mod failures;
mod formatter;
mod metadata;

pub use category::Category;
pub use failures::{EmptyFailures, Failures};
pub use formatter::FailureFormatConfig;
pub use metadata::{Metadata, MetadataValue};

/// Immutable, structurally compared error descriptor.
///
/// Two failures are equal when code, message, category and metadata match;
/// metadata is compared as an unordered set of entries.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Failure {
    code: String,
    message: String,
    category: Category,
    #[cfg_attr(feature = "serde", serde(default))]
    metadata: Metadata,
}

impl Failure {
    /// Creates a failure of the given category with that category's default code and message.
    pub fn of(category: Category) -> Self {
        Self {
            code: category.default_code(),
            message: category.default_message(),
            category,
            metadata: Metadata::new(),
        }
    }

    /// A fatal failure: `General.Fatal` / `A fatal failure has occurred.`.
    #[inline]
    pub fn fatal() -> Self {
        Self::of(Category::Fatal)
    }

    /// A not-found failure: `General.NotFound` / `A 'Not Found' failure has occurred.`.
    #[inline]
    pub fn not_found() -> Self {
        Self::of(Category::NotFound)
    }

    /// A validation failure: `General.Validation` / `A validation failure has occurred.`.
    #[inline]
    pub fn validation() -> Self {
        Self::of(Category::Validation)
    }

    /// A failure of a caller-named category.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Category, Failure};
    ///
    /// let conflict = Failure::custom("Conflict", "User.Duplicate", "email already registered");
    /// assert_eq!(conflict.category(), &Category::Custom("Conflict".into()));
    /// ```
    pub fn custom<C, S, M>(category: C, code: S, message: M) -> Self
    where
        C: Into<Category>,
        S: Into<String>,
        M: Into<String>,
    {
        Self {
            code: code.into(),
            message: message.into(),
            category: category.into(),
            metadata: Metadata::new(),
        }
    }

    #[inline]
    pub fn with_code<S: Into<String>>(mut self, code: S) -> Self {
        self.code = code.into();
        self
    }

    #[inline]
    pub fn with_message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = message.into();
        self
    }

    /// Adds one metadata entry, replacing any previous value for `key`.
    #[inline]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.insert(key, value);
        self
    }

    /// Adds every entry from `entries`.
    pub fn with_metadata_entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.extend(entries);
        self
    }

    /// Replaces the metadata wholesale.
    #[inline]
    pub fn with_metadata_map(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Renders the failure using `config` instead of the canonical layout.
    pub fn format_with(&self, config: &FailureFormatConfig) -> String {
        config.render(self)
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failure {{ Code = {}, Message = {}, Type = {}, Metadata = {} }}",
            self.code, self.message, self.category, self.metadata
        )
    }
}

impl core::error::Error for Failure {}
