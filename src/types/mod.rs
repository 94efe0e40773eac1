//! Storage helpers shared across the crate.
use smallvec::SmallVec;

pub mod alloc_type;

/// SmallVec-backed collection used for failure aggregates.
///
/// Uses inline storage for one element, since most aggregates report a
/// single failure.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// SmallVec-backed storage for metadata entries.
pub(crate) type EntryVec<E> = SmallVec<[E; 2]>;
