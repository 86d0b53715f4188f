//! # plaint-error
//!
//! Internal error taxonomy for plaint.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what went wrong (e.g. MissingParameter)
//! - **Disposition**: Decide how the core reacts (Surfaced, Recovered)
//! - **Error Context**: Assist in locating the cause with rich context
//!
//! ## Usage
//!
//! ```rust
//! use plaint_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::MissingParameter, "placeholder 'name' is unbound")
//!         .with_operation("clause::apply")
//!         .with_context("placeholder", "name")
//!         .with_context("template", "{path} hat keine Datei {name}."))
//! }
//! ```
//!
//! ## Principles
//!
//! - Nothing here is fatal to the host process: a `Surfaced` error is an
//!   authoring bug the caller must see, a `Recovered` error means output
//!   degraded to a less-polished string.
//! - Same error handled once, subsequent ops only append context.

mod disposition;
mod error;
mod kind;

pub use disposition::Disposition;
pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the plaint Error
pub type Result<T> = std::result::Result<T, Error>;
