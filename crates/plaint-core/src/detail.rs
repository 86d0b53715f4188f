//! The Detailed protocol: localized text derived on demand from a store.

use crate::key;
use crate::severity::Severity;
use crate::store::{Cause, ErrorStore};
use plaint_clause::{catalog, Catalog, Clause};
use plaint_error::Error;

/// Default localization table for error text.
pub const DEFAULT_TABLE: &str = "errors";

/// Options for the full textual rendering of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DescribeOptions {
    /// Whether an opaque cause contributes its `Display` text to the chained
    /// description. When `false` (the default), causes that expose no details
    /// contribute nothing further and the omission is logged.
    pub include_opaque_cause: bool,
}

/// Separator between an error's own text and its cause's text.
const CAUSE_SEPARATOR: &str = " <- ";

/// Protocol adopted by concrete error types to gain localized descriptions.
///
/// A conforming type supplies access to its [`ErrorStore`] and an explicit
/// per-type `prefix` identifier (no runtime type reflection); everything else
/// is derived. All derived text is computed on demand, never cached, so a
/// catalog installed later is picked up by existing error values.
///
/// Use [`detailed_error!`](crate::detailed_error) to stamp a conforming
/// newtype, or implement the two required methods by hand.
pub trait Detailed: std::error::Error + Send + Sync {
    /// The record backing this error.
    fn store(&self) -> &ErrorStore;

    /// Localization-key namespace segment for this concrete type.
    fn prefix(&self) -> &'static str;

    /// Localization table name.
    fn table(&self) -> &'static str {
        DEFAULT_TABLE
    }

    /// Key segment for failure-reason lookups. An empty override omits the
    /// segment from the derived key.
    fn failure_prefix(&self) -> &'static str {
        "failure"
    }

    /// Key segment for recovery-suggestion lookups. An empty override omits
    /// the segment from the derived key.
    fn recovery_prefix(&self) -> &'static str {
        "recovery"
    }

    /// The unique identifying name of this error value.
    fn name(&self) -> &str {
        self.store().name()
    }

    /// The optional numeric code.
    fn code(&self) -> Option<i64> {
        self.store().code()
    }

    /// The optional severity level.
    fn severity(&self) -> Option<Severity> {
        self.store().severity()
    }

    /// The causing error, if any.
    fn cause(&self) -> Option<&Cause> {
        self.store().cause()
    }

    /// Localized description, resolved against the given catalog.
    ///
    /// The key is `<prefix>.<name>` when the description is the default
    /// (equal to the name), and `<prefix>.<name>.<description-skeleton>`
    /// when an explicit description differs from the name.
    fn error_description_in(&self, catalog: &dyn Catalog) -> Option<String> {
        let store = self.store();
        let clause = store.description_clause();
        let key = if clause.template() == store.name() {
            key::join(&[self.prefix(), store.name()])
        } else {
            key::join(&[self.prefix(), store.name(), &clause.template()])
        };
        Some(resolve(clause, catalog, self.table(), &key))
    }

    /// Localized failure reason; `None` when no failure clause was supplied.
    fn failure_reason_in(&self, catalog: &dyn Catalog) -> Option<String> {
        let store = self.store();
        store.failure_clause().map(|clause| {
            let key = key::join(&[self.prefix(), store.name(), self.failure_prefix()]);
            resolve(clause, catalog, self.table(), &key)
        })
    }

    /// Localized recovery suggestion; `None` when no recovery clause was
    /// supplied.
    fn recovery_suggestion_in(&self, catalog: &dyn Catalog) -> Option<String> {
        let store = self.store();
        store.recovery_clause().map(|clause| {
            let key = key::join(&[self.prefix(), store.name(), self.recovery_prefix()]);
            resolve(clause, catalog, self.table(), &key)
        })
    }

    /// Localized description against the process-wide catalog.
    fn error_description(&self) -> Option<String> {
        self.error_description_in(catalog::global())
    }

    /// Localized failure reason against the process-wide catalog.
    fn failure_reason(&self) -> Option<String> {
        self.failure_reason_in(catalog::global())
    }

    /// Localized recovery suggestion against the process-wide catalog.
    fn recovery_suggestion(&self) -> Option<String> {
        self.recovery_suggestion_in(catalog::global())
    }

    /// Description, failure reason, and recovery suggestion concatenated,
    /// each separated by a space only when present. Does not include causes.
    fn short_description(&self) -> String {
        let mut out = self
            .error_description()
            .unwrap_or_else(|| key::join(&[self.prefix(), self.name()]));
        if let Some(failure) = self.failure_reason() {
            out.push(' ');
            out.push_str(&failure);
        }
        if let Some(recovery) = self.recovery_suggestion() {
            out.push(' ');
            out.push_str(&recovery);
        }
        out
    }

    /// Full textual rendering with default options: the short description
    /// followed by the chain of detailed causes' own descriptions.
    fn description(&self) -> String {
        self.description_with(DescribeOptions::default())
    }

    /// Full textual rendering. Detailed causes chain recursively; opaque
    /// causes contribute their `Display` text only when
    /// [`DescribeOptions::include_opaque_cause`] is set, and are otherwise
    /// omitted with a diagnostic log.
    fn description_with(&self, options: DescribeOptions) -> String {
        let mut out = self.short_description();
        match Detailed::cause(self) {
            Some(Cause::Detailed(cause)) => {
                out.push_str(CAUSE_SEPARATOR);
                out.push_str(&cause.description_with(options));
            }
            Some(Cause::Opaque(cause)) => {
                if options.include_opaque_cause {
                    out.push_str(CAUSE_SEPARATOR);
                    out.push_str(&cause.to_string());
                } else {
                    let omitted = Error::unresolvable_cause(cause.to_string())
                        .with_operation("detail::description")
                        .with_context("name", self.name().to_string());
                    tracing::debug!("cause omitted from description: {}", omitted);
                }
            }
            None => {}
        }
        out
    }
}

/// Constructor half of the protocol: any type buildable from a record.
pub trait FromStore: Detailed + Sized {
    /// Wrap a finished record.
    fn from_store(store: ErrorStore) -> Self;
}

/// Resolve a clause, degrading to its default rendering when substitution
/// against a stored translation fails. The failure indicates a translation
/// bug, so it is logged at error level.
fn resolve(clause: &Clause, catalog: &dyn Catalog, table: &str, key: &str) -> String {
    match clause.localize_in(catalog, table, key) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!("localization degraded to default rendering: {}", err);
            clause.render()
        }
    }
}

/// Stamp a concrete error type conforming to [`Detailed`] and
/// [`FromStore`]: a newtype over [`ErrorStore`](crate::ErrorStore) with
/// `Display` (the short description), `std::error::Error` (source is the
/// cause), and name-only `PartialEq`.
///
/// ```rust
/// use plaint_core::{detailed_error, Detailed, ErrorStore};
///
/// detailed_error! {
///     /// Errors raised while loading configuration.
///     pub struct ConfigError, prefix = "config";
/// }
///
/// let err: ConfigError = ErrorStore::named("missingKey").build();
/// assert_eq!(err.name(), "missingKey");
/// ```
#[macro_export]
macro_rules! detailed_error {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident, prefix = $prefix:literal $(, table = $table:literal)? $(;)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name($crate::ErrorStore);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::Detailed::short_description(self))
            }
        }

        impl ::std::error::Error for $name {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                self.0.source()
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl $crate::Detailed for $name {
            fn store(&self) -> &$crate::ErrorStore {
                &self.0
            }

            fn prefix(&self) -> &'static str {
                $prefix
            }

            $(
                fn table(&self) -> &'static str {
                    $table
                }
            )?
        }

        impl $crate::FromStore for $name {
            fn from_store(store: $crate::ErrorStore) -> Self {
                Self(store)
            }
        }
    };
}
