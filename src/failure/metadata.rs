//! Key/value metadata attached to a [`Failure`](crate::Failure).
//!
//! Entries keep their insertion order for rendering, while equality and
//! hashing ignore order entirely.

use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};

use crate::types::alloc_type::{String, Vec};
use crate::types::EntryVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single metadata value.
///
/// Integers compare and hash by numeric value, so `Int(9)` equals `UInt(9)`;
/// the `From` impls only produce `UInt` above `i64::MAX`. Floats compare and
/// hash by bit pattern, which keeps [`Metadata`] (and therefore
/// [`Failure`](crate::Failure)) `Eq + Hash`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone)]
pub enum MetadataValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl MetadataValue {
    fn as_integer(&self) -> Option<i128> {
        match self {
            Self::Int(v) => Some(i128::from(*v)),
            Self::UInt(v) => Some(i128::from(*v)),
            _ => None,
        }
    }
}

impl PartialEq for MetadataValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            _ => match (self.as_integer(), other.as_integer()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl Eq for MetadataValue {}

impl Hash for MetadataValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Bool(v) => {
                state.write_u8(0);
                v.hash(state);
            },
            Self::Int(_) | Self::UInt(_) => {
                state.write_u8(1);
                self.as_integer().hash(state);
            },
            Self::Float(v) => {
                state.write_u8(2);
                v.to_bits().hash(state);
            },
            Self::Str(v) => {
                state.write_u8(3);
                v.hash(state);
            },
        }
    }
}

impl Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => Display::fmt(v, f),
            Self::Int(v) => Display::fmt(v, f),
            Self::UInt(v) => Display::fmt(v, f),
            Self::Float(v) => Display::fmt(v, f),
            Self::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_from_value {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for MetadataValue {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from_value!(Int as i64: i8, i16, i32, i64, isize, u8, u16, u32);
impl_from_value!(Float as f64: f32, f64);

macro_rules! impl_from_wide_unsigned {
    ($($source:ty),+) => {
        $(
            impl From<$source> for MetadataValue {
                #[inline]
                fn from(value: $source) -> Self {
                    let value = value as u64;
                    i64::try_from(value).map_or(Self::UInt(value), Self::Int)
                }
            }
        )+
    };
}

impl_from_wide_unsigned!(u64, usize);

impl From<bool> for MetadataValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for MetadataValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for MetadataValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

/// Insertion-ordered metadata with unique keys.
///
/// # Examples
///
/// ```
/// use outcome_rail::Metadata;
///
/// let a = Metadata::new().with("user", 42).with("region", "eu");
/// let b = Metadata::new().with("region", "eu").with("user", 42);
///
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "{ user = 42, region = eu }");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    entries: EntryVec<(String, MetadataValue)>,
}

impl Metadata {
    /// Creates an empty metadata map.
    #[inline]
    pub fn new() -> Self {
        Self { entries: EntryVec::new() }
    }

    /// Inserts an entry and returns the updated map.
    #[must_use]
    #[inline]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.insert(key, value);
        self
    }

    /// Inserts an entry, returning the previous value for that key.
    ///
    /// Replacing an existing key keeps its original position.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<MetadataValue>
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            },
        }
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl PartialEq for Metadata {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.entries.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Eq for Metadata {}

impl Hash for Metadata {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sorted: Vec<&(String, MetadataValue)> = self.entries.iter().collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        state.write_usize(sorted.len());
        for (key, value) in sorted {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} = {}", key, value)?;
        }
        if !self.entries.is_empty() {
            f.write_str(" ")?;
        }
        f.write_str("}")
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        metadata.extend(iter);
        metadata
    }
}

impl<K, V> Extend<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Metadata {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MetadataVisitor;

        impl<'de> serde::de::Visitor<'de> for MetadataVisitor {
            type Value = Metadata;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of metadata entries")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Metadata, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut metadata = Metadata::new();
                while let Some((key, value)) = access.next_entry::<String, MetadataValue>()? {
                    metadata.insert(key, value);
                }
                Ok(metadata)
            }
        }

        deserializer.deserialize_map(MetadataVisitor)
    }
}
