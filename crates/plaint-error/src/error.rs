//! The main Error type for plaint.

use crate::{Disposition, ErrorKind};
use std::fmt;

/// Unified error type for all plaint operations.
pub struct Error {
    kind: ErrorKind,
    message: String,
    disposition: Disposition,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let disposition = if kind.is_recovered() {
            Disposition::Recovered
        } else {
            Disposition::Surfaced
        };

        Self {
            kind,
            message: message.into(),
            disposition,
            operation: "",
            context: Vec::new(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the error disposition
    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Set the disposition.
    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = disposition;
        self
    }

    /// Mark as surfaced (returned to the caller)
    pub fn surfaced(mut self) -> Self {
        self.disposition = Disposition::Surfaced;
        self
    }

    /// Mark as recovered (absorbed locally, degraded output)
    pub fn recovered(mut self) -> Self {
        self.disposition = Disposition::Recovered;
        self
    }

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Check if this error was absorbed locally
    pub fn is_recovered(&self) -> bool {
        self.disposition.is_recovered()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) at {}", self.kind, self.disposition, self.operation)?;

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}) at {}", self.kind, self.disposition, self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create a MissingParameter error for an unbound placeholder name.
    pub fn missing_parameter(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        Self::new(
            ErrorKind::MissingParameter,
            format!("placeholder '{}' has no bound value", placeholder),
        )
        .with_context("placeholder", placeholder)
    }

    /// Create a MalformedTemplate error
    pub fn malformed_template(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedTemplate, message)
    }

    /// Create an UnresolvableCause error for a cause that carries no details.
    pub fn unresolvable_cause(display: impl Into<String>) -> Self {
        let display = display.into();
        Self::new(
            ErrorKind::UnresolvableCause,
            format!("cause '{}' exposes no error details", display),
        )
        .with_context("cause", display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::MissingParameter, "placeholder 'x' has no bound value");
        assert_eq!(err.kind(), ErrorKind::MissingParameter);
        assert_eq!(err.message(), "placeholder 'x' has no bound value");
        assert_eq!(err.disposition(), Disposition::Surfaced);
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::new(ErrorKind::MissingParameter, "unbound")
            .with_operation("clause::apply")
            .with_context("placeholder", "path")
            .with_context("template", "{path} missing");

        assert_eq!(err.operation(), "clause::apply");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("placeholder", "path".to_string()));
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::new(ErrorKind::MissingParameter, "unbound")
            .with_operation("clause::apply")
            .with_operation("clause::localize");

        assert_eq!(err.operation(), "clause::localize");
        assert_eq!(err.context().len(), 1);
        assert_eq!(err.context()[0], ("called", "clause::apply".to_string()));
    }

    #[test]
    fn test_default_disposition() {
        let err = Error::new(ErrorKind::UnresolvableCause, "opaque cause");
        assert!(err.is_recovered());

        let err = Error::new(ErrorKind::MalformedTemplate, "unclosed placeholder");
        assert!(!err.is_recovered());
    }

    #[test]
    fn test_display() {
        let err = Error::new(ErrorKind::MissingParameter, "placeholder 'name' has no bound value")
            .with_operation("clause::apply")
            .with_context("placeholder", "name")
            .with_context("table", "errors");

        let display = format!("{}", err);
        assert!(display.contains("MissingParameter"));
        assert!(display.contains("surfaced"));
        assert!(display.contains("clause::apply"));
        assert!(display.contains("placeholder: name"));
    }

    #[test]
    fn test_convenience_constructors() {
        let err = Error::missing_parameter("path");
        assert_eq!(err.kind(), ErrorKind::MissingParameter);
        assert!(err.message().contains("path"));

        let err = Error::malformed_template("unclosed '{' at byte 3");
        assert_eq!(err.kind(), ErrorKind::MalformedTemplate);

        let err = Error::unresolvable_cause("connection reset");
        assert_eq!(err.kind(), ErrorKind::UnresolvableCause);
        assert!(err.is_recovered());
    }
}
