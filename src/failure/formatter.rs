//! Alternative failure renderings.
//!
//! `Display` always produces the canonical
//! `Failure { Code = .., Message = .., Type = .., Metadata = { .. } }` layout.
//! [`FailureFormatConfig`] covers the other places failures get printed, such
//! as CLI output or one-line log summaries.

use core::fmt::Write;

use super::Failure;
use crate::types::alloc_type::String;

/// Configuration-based failure formatter.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Failure, FailureFormatConfig};
///
/// let failure = Failure::fatal().with_message("disk full").with_metadata("volume", "/var");
///
/// assert_eq!(
///     failure.format_with(&FailureFormatConfig::default()),
///     "[Fatal] General.Fatal: disk full (volume = /var)"
/// );
/// assert_eq!(
///     failure.format_with(&FailureFormatConfig::compact()),
///     "General.Fatal: disk full"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureFormatConfig {
    /// Placed between failures when rendering an aggregate.
    pub separator: String,
    pub show_category: bool,
    pub show_code: bool,
    pub show_metadata: bool,
    /// Puts each metadata entry on its own indented line.
    pub multiline: bool,
    pub indent: String,
}

impl Default for FailureFormatConfig {
    fn default() -> Self {
        Self {
            separator: "; ".into(),
            show_category: true,
            show_code: true,
            show_metadata: true,
            multiline: false,
            indent: "  ".into(),
        }
    }
}

impl FailureFormatConfig {
    /// Code and message only.
    #[inline]
    pub fn compact() -> Self {
        Self { show_category: false, show_metadata: false, ..Default::default() }
    }

    /// One line per failure, metadata entries indented underneath.
    #[inline]
    pub fn multiline() -> Self {
        Self { separator: "\n".into(), multiline: true, ..Default::default() }
    }

    pub(crate) fn render(&self, failure: &Failure) -> String {
        let mut out = String::with_capacity(64);
        self.write_failure(&mut out, failure);
        out
    }

    pub(crate) fn render_all<'a, I>(&self, failures: I) -> String
    where
        I: Iterator<Item = &'a Failure>,
    {
        let mut out = String::new();
        for (i, failure) in failures.enumerate() {
            if i > 0 {
                out.push_str(&self.separator);
            }
            self.write_failure(&mut out, failure);
        }
        out
    }

    fn write_failure(&self, out: &mut String, failure: &Failure) {
        if self.show_category {
            let _ = write!(out, "[{}] ", failure.category());
        }
        if self.show_code {
            out.push_str(failure.code());
            out.push_str(": ");
        }
        out.push_str(failure.message());

        if !self.show_metadata || failure.metadata().is_empty() {
            return;
        }

        if self.multiline {
            for (key, value) in failure.metadata().iter() {
                let _ = write!(out, "\n{}{} = {}", self.indent, key, value);
            }
        } else {
            out.push_str(" (");
            for (i, (key, value)) in failure.metadata().iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{} = {}", key, value);
            }
            out.push(')');
        }
    }
}
