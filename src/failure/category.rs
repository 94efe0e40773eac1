use core::cmp::Ordering;
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};

use crate::types::alloc_type::{format, String, ToString};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a [`Failure`](crate::Failure).
///
/// Categories compare, order and hash by [`name`](Category::name), so
/// `Custom("Fatal")` equals `Fatal`. Building a custom category whose name
/// matches one of the built-in ones yields the built-in variant.
///
/// # Examples
///
/// ```
/// use outcome_rail::Category;
///
/// assert_eq!(Category::custom("NotFound"), Category::NotFound);
/// assert_eq!(Category::Custom("Fatal".into()), Category::Fatal);
/// assert_eq!(Category::custom("Conflict").name(), "Conflict");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
#[derive(Debug, Clone)]
pub enum Category {
    Fatal,
    NotFound,
    Validation,
    Custom(String),
}

impl Category {
    /// Builds a category from its name, folding built-in names onto their variants.
    pub fn custom<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        match name.as_str() {
            "Fatal" => Self::Fatal,
            "NotFound" => Self::NotFound,
            "Validation" => Self::Validation,
            _ => Self::Custom(name),
        }
    }

    /// Returns the textual name rendered as `Type = ...`.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::Fatal => "Fatal",
            Self::NotFound => "NotFound",
            Self::Validation => "Validation",
            Self::Custom(name) => name,
        }
    }

    /// Returns `true` for [`Category::Custom`].
    #[inline]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    pub(crate) fn default_code(&self) -> String {
        format!("General.{}", self.name())
    }

    pub(crate) fn default_message(&self) -> String {
        match self {
            Self::Fatal => "A fatal failure has occurred.".to_string(),
            Self::NotFound => "A 'Not Found' failure has occurred.".to_string(),
            Self::Validation => "A validation failure has occurred.".to_string(),
            Self::Custom(_) => "A failure has occurred.".to_string(),
        }
    }
}

impl PartialEq for Category {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Category {}

impl PartialOrd for Category {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Category {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Category {
    #[inline]
    fn from(name: String) -> Self {
        Self::custom(name)
    }
}

impl From<&str> for Category {
    #[inline]
    fn from(name: &str) -> Self {
        Self::custom(name)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(name) => name,
            builtin => builtin.name().to_string(),
        }
    }
}
