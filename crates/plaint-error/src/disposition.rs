//! Error disposition: how the core reacts to a failure

use std::fmt;

/// The disposition of an error, indicating how the core handled it.
///
/// - `Surfaced`: returned to the caller as `Err`; fixing it requires a
///   change to a template or a call site.
/// - `Recovered`: the core degraded its output (a less-polished string) and
///   logged the event; no action is strictly required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Disposition {
    /// The error is returned to the caller and must be dealt with there.
    ///
    /// Examples: MissingParameter, MalformedTemplate
    #[default]
    Surfaced,

    /// The error was absorbed locally with degraded output.
    ///
    /// Examples: UnresolvableCause
    Recovered,
}

impl Disposition {
    /// Check whether the error was absorbed locally
    pub fn is_recovered(&self) -> bool {
        matches!(self, Disposition::Recovered)
    }

    /// Get the disposition as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Surfaced => "surfaced",
            Disposition::Recovered => "recovered",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposition_recovered() {
        assert!(!Disposition::Surfaced.is_recovered());
        assert!(Disposition::Recovered.is_recovered());
    }

    #[test]
    fn test_default() {
        assert_eq!(Disposition::default(), Disposition::Surfaced);
    }
}
