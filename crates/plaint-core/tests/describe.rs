//! End-to-end scenarios across the clause engine and the Detailed protocol.

use plaint_core::{
    clause, detailed_error, Clause, DescribeOptions, Detailed, ErrorStore, Severity, StaticCatalog,
};
use pretty_assertions::assert_eq;

detailed_error! {
    /// Errors raised by the file subsystem.
    pub struct FileError, prefix = "file";
}

detailed_error! {
    /// Errors raised while loading application state.
    pub struct LoadError, prefix = "load";
}

fn file_not_found(name: &str, path: &str) -> FileError {
    ErrorStore::named("fileError(name:path:)")
        .code(2)
        .severity(Severity::Error)
        .failure_with(|| clause!["File ", name = name, " not found at ", path = path, "."])
        .recovery(Clause::literal("Check the path and try again."))
        .build()
}

fn german_catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with("errors", "file.fileError", "Dateifehler")
        .with("errors", "file.fileError.failure", "{path} hat keine Datei {name}.")
        .with("errors", "file.fileError.recovery", "Pfad überprüfen.")
        .with("errors", "severity.error", "Fehler")
}

#[test]
fn default_rendering_without_translations() {
    let err = file_not_found("A", "/tmp");
    assert_eq!(err.name(), "fileError");
    assert_eq!(err.code(), Some(2));
    assert_eq!(err.severity(), Some(Severity::Error));
    assert_eq!(err.error_description().as_deref(), Some("fileError"));
    assert_eq!(err.failure_reason().as_deref(), Some("File A not found at /tmp."));
    assert_eq!(
        err.recovery_suggestion().as_deref(),
        Some("Check the path and try again.")
    );
    assert_eq!(
        err.short_description(),
        "fileError File A not found at /tmp. Check the path and try again."
    );
}

#[test]
fn translated_rendering_reorders_parameters() {
    let err = file_not_found("A", "/tmp");
    let de = german_catalog();

    assert_eq!(err.error_description_in(&de).as_deref(), Some("Dateifehler"));
    assert_eq!(
        err.failure_reason_in(&de).as_deref(),
        Some("/tmp hat keine Datei A.")
    );
    assert_eq!(err.recovery_suggestion_in(&de).as_deref(), Some("Pfad überprüfen."));
    assert_eq!(Severity::Error.localized_in(&de, "errors"), "Fehler");
}

#[test]
fn equality_ignores_everything_but_name() {
    let a = file_not_found("A", "/tmp");
    let b: FileError = ErrorStore::named("fileError").severity(Severity::Fatal).build();
    assert_eq!(a, b);

    let other: FileError = ErrorStore::named("dirError").code(2).build();
    assert_ne!(a, other);
}

#[test]
fn cause_chain_includes_detailed_descriptions() {
    let inner = file_not_found("A", "/tmp");
    let outer: LoadError = ErrorStore::named("stateLoadFailed")
        .severity(Severity::Fatal)
        .caused_by(inner)
        .build();

    assert_eq!(
        outer.description(),
        "stateLoadFailed <- fileError File A not found at /tmp. Check the path and try again."
    );
    // the short form never includes causes
    assert_eq!(outer.short_description(), "stateLoadFailed");
}

#[test]
fn nested_detailed_causes_chain_recursively() {
    let innermost: FileError = ErrorStore::named("fileError").build();
    let middle: LoadError = ErrorStore::named("cacheMiss").caused_by(innermost).build();
    let outer: LoadError = ErrorStore::named("startupFailed").caused_by(middle).build();

    assert_eq!(
        outer.description(),
        "startupFailed <- cacheMiss <- fileError"
    );
}

#[test]
fn opaque_cause_is_configurable() {
    let outer: LoadError = ErrorStore::named("startupFailed")
        .cause(std::io::Error::other("permission denied"))
        .build();

    assert_eq!(outer.description(), "startupFailed");
    assert_eq!(
        outer.description_with(DescribeOptions {
            include_opaque_cause: true
        }),
        "startupFailed <- permission denied"
    );
    // the cause is still reachable as an error source either way
    assert!(std::error::Error::source(&outer).is_some());
}

#[test]
fn records_are_shareable_across_threads() {
    let err = file_not_found("A", "/tmp");
    let text = std::thread::scope(|scope| {
        scope
            .spawn(|| err.short_description())
            .join()
            .expect("description thread")
    });
    assert_eq!(text, err.short_description());
}
