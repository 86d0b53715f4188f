//! Key→template lookup for localized text.
//!
//! The core consumes a read-only catalog of localized templates scoped by
//! table name. Loading catalogs from disk and resolving the active locale are
//! the platform layer's job; this module only defines the lookup contract, an
//! in-memory implementation, a fallback combinator, and the process-wide
//! default catalog.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Read-only, side-effect-free lookup of a localized template.
///
/// Returns `None` when no translation exists for the key; callers supply
/// their own fallback (a [`Clause`](crate::Clause) falls back to its default
/// rendering).
pub trait Catalog {
    /// Look up the template stored under `key` in `table`.
    fn lookup(&self, key: &str, table: &str) -> Option<String>;
}

/// A catalog that never has a translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl Catalog for EmptyCatalog {
    fn lookup(&self, _key: &str, _table: &str) -> Option<String> {
        None
    }
}

/// In-memory catalog: `table → key → template`.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    tables: HashMap<String, HashMap<String, String>>,
}

impl StaticCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `(key, template)` entries for one table.
    pub fn from_entries(table: &str, entries: &[(&str, &str)]) -> Self {
        let mut catalog = Self::new();
        for (key, template) in entries {
            catalog.insert(table, *key, *template);
        }
        catalog
    }

    /// Add an entry, fluent form.
    pub fn with(
        mut self,
        table: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.insert(table, key, template);
        self
    }

    /// Add an entry. A later insert under the same table and key replaces
    /// the earlier template.
    pub fn insert(
        &mut self,
        table: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.tables
            .entry(table.into())
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Number of entries across all tables.
    pub fn len(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }

    /// True if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }
}

impl Catalog for StaticCatalog {
    fn lookup(&self, key: &str, table: &str) -> Option<String> {
        self.tables.get(table)?.get(key).cloned()
    }
}

/// Chains two catalogs: the fallback answers only when the primary misses.
///
/// The usual arrangement is a locale-specific catalog in front of the
/// base-language one.
#[derive(Debug, Clone)]
pub struct FallbackCatalog<P, F> {
    primary: P,
    fallback: F,
}

impl<P: Catalog, F: Catalog> FallbackCatalog<P, F> {
    /// Chain `primary` in front of `fallback`.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: Catalog, F: Catalog> Catalog for FallbackCatalog<P, F> {
    fn lookup(&self, key: &str, table: &str) -> Option<String> {
        self.primary
            .lookup(key, table)
            .or_else(|| self.fallback.lookup(key, table))
    }
}

/// Process-wide catalog, consumed read-only after installation.
static GLOBAL: OnceLock<Box<dyn Catalog + Send + Sync>> = OnceLock::new();

/// Install the process-wide catalog. Only the first call wins; returns
/// whether this call installed its argument.
pub fn install(catalog: impl Catalog + Send + Sync + 'static) -> bool {
    GLOBAL.set(Box::new(catalog)).is_ok()
}

/// The process-wide catalog. Empty until [`install`] is called.
pub fn global() -> &'static (dyn Catalog + Send + Sync) {
    match GLOBAL.get() {
        Some(catalog) => catalog.as_ref(),
        None => &EmptyCatalog,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_catalog_lookup() {
        let catalog = StaticCatalog::new()
            .with("errors", "fs.missing", "{path} fehlt")
            .with("alerts", "fs.missing", "Datei fehlt");

        assert_eq!(
            catalog.lookup("fs.missing", "errors").as_deref(),
            Some("{path} fehlt")
        );
        assert_eq!(
            catalog.lookup("fs.missing", "alerts").as_deref(),
            Some("Datei fehlt")
        );
        assert_eq!(catalog.lookup("fs.missing", "other"), None);
        assert_eq!(catalog.lookup("fs.other", "errors"), None);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_from_entries() {
        let catalog = StaticCatalog::from_entries(
            "errors",
            &[
                ("severity.info", "Hinweis"),
                ("severity.fatal", "Schwerwiegend"),
            ],
        );
        assert_eq!(
            catalog.lookup("severity.fatal", "errors").as_deref(),
            Some("Schwerwiegend")
        );
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_insert_replaces() {
        let mut catalog = StaticCatalog::new();
        catalog.insert("errors", "k", "first");
        catalog.insert("errors", "k", "second");
        assert_eq!(catalog.lookup("k", "errors").as_deref(), Some("second"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_fallback_chain() {
        let de = StaticCatalog::new().with("errors", "only.de", "nur deutsch");
        let en = StaticCatalog::new()
            .with("errors", "only.de", "english shadowed")
            .with("errors", "only.en", "english only");
        let chain = FallbackCatalog::new(de, en);

        assert_eq!(chain.lookup("only.de", "errors").as_deref(), Some("nur deutsch"));
        assert_eq!(chain.lookup("only.en", "errors").as_deref(), Some("english only"));
        assert_eq!(chain.lookup("neither", "errors"), None);
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(EmptyCatalog.lookup("any", "errors"), None);
    }
}
