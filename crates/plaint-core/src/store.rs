//! The immutable error-detail record and its factory.

use crate::detail::Detailed;
use crate::key;
use crate::severity::Severity;
use plaint_clause::Clause;
use plaint_error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// A causing error attached to a record.
///
/// Classification happens at construction time: the call site knows whether
/// the cause carries its own [`ErrorStore`] of details or is an arbitrary
/// error the chain treats as opaque. A `Cause` is a shared handle; the record
/// does not exclusively control the cause's lifetime.
#[derive(Debug, Clone)]
pub enum Cause {
    /// A cause that itself conforms to [`Detailed`] and contributes its own
    /// chained description.
    Detailed(Arc<dyn Detailed>),
    /// Any other error; contributes at most its `Display` text.
    Opaque(Arc<dyn std::error::Error + Send + Sync>),
}

impl Cause {
    /// Wrap a detailed cause.
    pub fn detailed(error: impl Detailed + 'static) -> Self {
        Cause::Detailed(Arc::new(error))
    }

    /// Wrap an opaque cause.
    pub fn opaque(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Cause::Opaque(Arc::new(error))
    }

    /// View the cause as a plain error.
    pub fn as_error(&self) -> &(dyn std::error::Error + 'static) {
        match self {
            Cause::Detailed(error) => error.as_ref(),
            Cause::Opaque(error) => error.as_ref(),
        }
    }

    /// The detailed view, if this cause carries one.
    pub fn as_detailed(&self) -> Option<&dyn Detailed> {
        match self {
            Cause::Detailed(error) => Some(error.as_ref()),
            Cause::Opaque(_) => None,
        }
    }
}

impl From<Arc<dyn Detailed>> for Cause {
    fn from(error: Arc<dyn Detailed>) -> Self {
        Cause::Detailed(error)
    }
}

impl From<Arc<dyn std::error::Error + Send + Sync>> for Cause {
    fn from(error: Arc<dyn std::error::Error + Send + Sync>) -> Self {
        Cause::Opaque(error)
    }
}

/// Immutable bundle of one error instance's details.
///
/// Created exactly once by the [`StoreBuilder`] factory at the error's
/// construction expression and never mutated afterwards, which also makes it
/// safe to read from multiple threads.
#[derive(Debug, Clone)]
pub struct ErrorStore {
    name: String,
    code: Option<i64>,
    severity: Option<Severity>,
    description: Clause,
    cause: Option<Cause>,
    recovery: Option<Clause>,
    failure: Option<Clause>,
}

impl ErrorStore {
    /// Start the factory for a record with the given identifying name.
    ///
    /// The name is truncated at the first `(`, so an auto-captured call-site
    /// function name works as the unique identifier.
    pub fn named<'a>(name: impl Into<String>) -> StoreBuilder<'a> {
        let name = name.into();
        StoreBuilder {
            name: key::base_name(&name).to_string(),
            code: None,
            severity: None,
            description: None,
            cause: None,
            recovery: None,
            failure: None,
        }
    }

    /// The unique identifying name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The optional numeric code.
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// The optional severity level.
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    /// The description clause; defaults to the literal name.
    pub fn description_clause(&self) -> &Clause {
        &self.description
    }

    /// The failure clause, if one was supplied.
    pub fn failure_clause(&self) -> Option<&Clause> {
        self.failure.as_ref()
    }

    /// The recovery clause, if one was supplied.
    pub fn recovery_clause(&self) -> Option<&Clause> {
        self.recovery.as_ref()
    }

    /// The causing error, if any.
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// The cause as a plain `std::error::Error` source.
    pub fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(Cause::as_error)
    }

    /// The cause's detailed view.
    ///
    /// `Ok(None)` when there is no cause; `UnresolvableCause` when the cause
    /// exists but exposes no details.
    pub fn detailed_cause(&self) -> Result<Option<&dyn Detailed>> {
        match &self.cause {
            None => Ok(None),
            Some(Cause::Detailed(error)) => Ok(Some(error.as_ref())),
            Some(Cause::Opaque(error)) => Err(Error::unresolvable_cause(error.to_string())
                .with_operation("store::detailed_cause")
                .with_context("name", self.name.as_str())),
        }
    }
}

/// Equality between records is defined solely by `name`, so concrete error
/// types deriving `PartialEq` over their store compare the way the protocol
/// specifies: same concrete type, same name, equal.
impl PartialEq for ErrorStore {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ErrorStore {}

/// Single factory entry point for [`ErrorStore`] records.
///
/// Obtained from [`ErrorStore::named`]; finish with [`StoreBuilder::finish`]
/// for a bare record or [`StoreBuilder::build`] for any conforming error
/// type.
pub struct StoreBuilder<'a> {
    name: String,
    code: Option<i64>,
    severity: Option<Severity>,
    description: Option<Clause>,
    cause: Option<Cause>,
    recovery: Option<Clause>,
    failure: Option<FailureSpec<'a>>,
}

enum FailureSpec<'a> {
    Ready(Clause),
    Deferred(Box<dyn FnOnce() -> Clause + 'a>),
}

impl<'a> StoreBuilder<'a> {
    /// Set the numeric code.
    pub fn code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the severity level.
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set the description clause. When omitted, the description defaults to
    /// the literal name.
    pub fn description(mut self, description: impl Into<Clause>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the recovery-suggestion clause.
    pub fn recovery(mut self, recovery: impl Into<Clause>) -> Self {
        self.recovery = Some(recovery.into());
        self
    }

    /// Set the failure-reason clause.
    pub fn failure(mut self, failure: impl Into<Clause>) -> Self {
        self.failure = Some(FailureSpec::Ready(failure.into()));
        self
    }

    /// Set the failure-reason clause lazily. The closure is captured at the
    /// call site and invoked exactly once, during record construction.
    pub fn failure_with(mut self, failure: impl FnOnce() -> Clause + 'a) -> Self {
        self.failure = Some(FailureSpec::Deferred(Box::new(failure)));
        self
    }

    /// Attach an opaque causing error.
    pub fn cause(mut self, error: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Cause::opaque(error));
        self
    }

    /// Attach a causing error that carries its own details.
    pub fn caused_by(mut self, error: impl Detailed + 'static) -> Self {
        self.cause = Some(Cause::detailed(error));
        self
    }

    /// Construct the immutable record.
    pub fn finish(self) -> ErrorStore {
        let description = self
            .description
            .unwrap_or_else(|| Clause::literal(self.name.clone()));
        let failure = self.failure.map(|spec| match spec {
            FailureSpec::Ready(clause) => clause,
            FailureSpec::Deferred(producer) => producer(),
        });
        ErrorStore {
            name: self.name,
            code: self.code,
            severity: self.severity,
            description,
            cause: self.cause,
            recovery: self.recovery,
            failure,
        }
    }

    /// Construct any error type that can be built from a record.
    pub fn build<E: crate::FromStore>(self) -> E {
        E::from_store(self.finish())
    }
}

impl fmt::Debug for StoreBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreBuilder")
            .field("name", &self.name)
            .field("code", &self.code)
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plaint_clause::clause;
    use plaint_error::ErrorKind;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_named_truncates_at_paren() {
        let store = ErrorStore::named("fileError(x)").finish();
        assert_eq!(store.name(), "fileError");

        let store = ErrorStore::named("fileError").finish();
        assert_eq!(store.name(), "fileError");
    }

    #[test]
    fn test_description_defaults_to_name() {
        let store = ErrorStore::named("fileError(x)").finish();
        assert!(store.description_clause().is_literal());
        assert_eq!(store.description_clause().render(), "fileError");
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let store = ErrorStore::named("e").finish();
        assert_eq!(store.code(), None);
        assert_eq!(store.severity(), None);
        assert!(store.failure_clause().is_none());
        assert!(store.recovery_clause().is_none());
        assert!(store.cause().is_none());
        assert!(store.source().is_none());
    }

    #[test]
    fn test_equality_by_name_only() {
        let a = ErrorStore::named("fileError")
            .code(2)
            .severity(Severity::Fatal)
            .finish();
        let b = ErrorStore::named("fileError")
            .code(404)
            .severity(Severity::Info)
            .cause(std::io::Error::other("disk on fire"))
            .finish();
        let c = ErrorStore::named("netError").code(2).finish();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_failure_with_is_deferred_and_invoked_once() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();

        let builder = ErrorStore::named("fileError").failure_with(move || {
            seen.set(seen.get() + 1);
            clause!["File ", name = "A", " not found."]
        });
        assert_eq!(calls.get(), 0);

        let store = builder.finish();
        assert_eq!(calls.get(), 1);
        assert_eq!(store.failure_clause().unwrap().render(), "File A not found.");
    }

    #[test]
    fn test_detailed_cause_on_opaque_is_unresolvable() {
        let store = ErrorStore::named("outer")
            .cause(std::io::Error::other("connection reset"))
            .finish();

        let err = store.detailed_cause().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnresolvableCause);
        assert!(err.is_recovered());
        assert!(store.source().is_some());
    }

    #[test]
    fn test_detailed_cause_absent() {
        let store = ErrorStore::named("outer").finish();
        assert!(store.detailed_cause().unwrap().is_none());
    }
}
