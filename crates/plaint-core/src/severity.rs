//! Severity classification for error records.

use plaint_clause::{catalog, Catalog};
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Ordered criticality classification: `Info < Warning < Error < Fatal`.
///
/// Pure enumerated value with no state or transitions. The platform layer is
/// responsible for mapping severities to alert styles; the core only derives
/// the localization key `severity.<name>`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, IntoStaticStr, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// Returns the severity as a static lowercase string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// The localization key for this severity, `severity.<name>`.
    pub fn key(&self) -> String {
        format!("severity.{}", self.as_str())
    }

    /// Localized description of this severity, falling back to the bare
    /// lowercase name when the catalog has no entry.
    pub fn localized_in(&self, catalog: &dyn Catalog, table: &str) -> String {
        catalog
            .lookup(&self.key(), table)
            .unwrap_or_else(|| self.as_str().to_string())
    }

    /// Localized description against the process-wide catalog.
    pub fn localized(&self, table: &str) -> String {
        self.localized_in(catalog::global(), table)
    }
}
