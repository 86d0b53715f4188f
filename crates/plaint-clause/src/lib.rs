//! # plaint-clause
//!
//! Templated text values with named, reorderable parameter substitutions.
//!
//! A [`Clause`] is built once from literal fragments interleaved with named
//! parameter values, and is immutable afterwards. Rendering without a
//! translation concatenates everything in construction order; localizing
//! against a [`Catalog`] re-applies the *same* named values in whatever order
//! the translated template specifies, so translators may reorder, repeat, or
//! omit parameters without breaking substitution.
//!
//! ```rust
//! use plaint_clause::{clause, StaticCatalog};
//!
//! let c = clause!["File ", name = "A", " not found at ", path = "/tmp", "."];
//! assert_eq!(c.render(), "File A not found at /tmp.");
//!
//! let de = StaticCatalog::new().with("errors", "fs.missing", "{path} hat keine Datei {name}.");
//! assert_eq!(c.localize_in(&de, "errors", "fs.missing").unwrap(), "/tmp hat keine Datei A.");
//! ```

pub mod catalog;
mod clause;

pub use catalog::{Catalog, EmptyCatalog, FallbackCatalog, StaticCatalog};
pub use clause::{Clause, ClauseBuilder};

pub use plaint_error::{Error, ErrorKind, Result};
