//! # plaint-core
//!
//! Convention-based error descriptions: concrete error types adopt the
//! [`Detailed`] protocol to gain a `name`/`code`/`severity`, a localized
//! description, failure reason, and recovery suggestion, all derived on
//! demand from an immutable [`ErrorStore`] built by a single factory entry
//! point.
//!
//! ```rust
//! use plaint_core::{clause, detailed_error, Detailed, ErrorStore, Severity};
//!
//! detailed_error! {
//!     /// Errors raised by the file subsystem.
//!     pub struct FileError, prefix = "file";
//! }
//!
//! fn open(name: &str, path: &str) -> Result<(), FileError> {
//!     Err(ErrorStore::named("fileError")
//!         .code(2)
//!         .severity(Severity::Error)
//!         .failure_with(|| clause!["File ", name = name, " not found at ", path = path, "."])
//!         .build())
//! }
//!
//! let err = open("A", "/tmp").unwrap_err();
//! assert_eq!(err.name(), "fileError");
//! assert_eq!(err.failure_reason().as_deref(), Some("File A not found at /tmp."));
//! ```

mod detail;
pub mod key;
mod severity;
mod store;

pub use detail::{DescribeOptions, Detailed, FromStore, DEFAULT_TABLE};
pub use severity::Severity;
pub use store::{Cause, ErrorStore, StoreBuilder};

pub use plaint_clause::{
    catalog, clause, Catalog, Clause, ClauseBuilder, EmptyCatalog, FallbackCatalog, StaticCatalog,
};
pub use plaint_error::{Disposition, Error, ErrorKind, Result};
