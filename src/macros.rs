//! Comprehension and construction macros.
//!
//! - [`macro@crate::query`] - writes a chain of dependent steps as flat
//!   `from .. in ..;` clauses ending in `select ..`, expanding to nested
//!   [`Outcome::bind`](crate::Outcome::bind) / [`Outcome::select`](crate::Outcome::select) calls.
//! - [`macro@crate::metadata`] - builds a [`Metadata`](crate::Metadata) map inline.

/// Sequence comprehension over [`Outcome`](crate::Outcome) values.
///
/// # Syntax
///
/// - `from pattern in expr;` - binds the success value of `expr`; stops at the first error
/// - `let pattern = expr;` - plain binding between steps
/// - `select expr` - the final projection
///
/// A trailing `from x in e; select body` expands to `e.select(|x| body)`,
/// every other `from` to a `bind`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{query, Outcome};
///
/// fn parse(s: &str) -> Outcome<i32, String> {
///     s.parse::<i32>().map_err(|e| e.to_string()).into()
/// }
///
/// let total = query! {
///     from a in parse("20");
///     let doubled = a * 2;
///     from b in parse("2");
///     select doubled + b
/// };
/// assert_eq!(total, Outcome::ok(42));
///
/// let failed = query! {
///     from a in parse("x");
///     from b in parse("2");
///     select a + b
/// };
/// assert!(failed.is_error());
/// ```
#[macro_export]
macro_rules! query {
    (from $p:pat in $src:expr ; select $out:expr $(;)?) => {
        ($src).select(|$p| $out)
    };
    (from $p:pat in $src:expr ; $($rest:tt)+) => {
        ($src).bind(|$p| $crate::query!($($rest)+))
    };
    (let $p:pat = $value:expr ; $($rest:tt)+) => {{
        let $p = $value;
        $crate::query!($($rest)+)
    }};
    (select $out:expr $(;)?) => {
        $crate::Outcome::ok($out)
    };
}

/// Builds a [`Metadata`](crate::Metadata) from `key => value` pairs.
///
/// Later duplicates replace earlier values, as with [`Metadata::insert`](crate::Metadata::insert).
///
/// # Examples
///
/// ```
/// use outcome_rail::{metadata, Failure};
///
/// let failure = Failure::validation().with_metadata_map(metadata! {
///     "field" => "email",
///     "max_length" => 254,
/// });
/// assert_eq!(failure.metadata().len(), 2);
/// ```
#[macro_export]
macro_rules! metadata {
    () => {
        $crate::Metadata::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut metadata = $crate::Metadata::new();
        $( metadata.insert($key, $value); )+
        metadata
    }};
}
