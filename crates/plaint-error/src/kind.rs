//! Error kinds for plaint operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors so callers can decide whether a failure is a
/// translation/authoring bug that must be surfaced or a local condition the
/// core already recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A localized template referenced a substitution name that was never
    /// bound on the clause. Indicates a translation or authoring bug;
    /// never silently dropped or blanked.
    MissingParameter,

    /// A template contained an unclosed or empty `{...}` placeholder.
    MalformedTemplate,

    /// A cause reference could not be interpreted as a detailed error.
    /// Recovered locally by omitting it from the chained description.
    UnresolvableCause,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check whether this kind is recovered from locally by default
    pub fn is_recovered(&self) -> bool {
        matches!(self, ErrorKind::UnresolvableCause)
    }
}
