//! The templated Clause value and its substitution engine.

use crate::catalog::{self, Catalog};
use plaint_error::{Error, Result};
use std::fmt;

/// A piece of display text built from literal fragments interleaved with
/// named parameter substitutions.
///
/// Constructed once, immutable afterwards. Localization produces a new
/// rendered string and never mutates the clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Literal segments; always `parameters.len() + 1` entries.
    fragments: Vec<String>,
    /// Named values in insertion order. Order only matters for the default
    /// rendering; localized templates address parameters by name.
    parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Parameter {
    name: String,
    value: String,
}

impl Clause {
    /// Create a clause from a plain literal string: one fragment, no
    /// parameters. Its rendering is the literal text exactly.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            fragments: vec![text.into()],
            parameters: Vec::new(),
        }
    }

    /// Start building an interpolated clause.
    pub fn builder() -> ClauseBuilder {
        ClauseBuilder::new()
    }

    /// True if the clause carries no parameters.
    pub fn is_literal(&self) -> bool {
        self.parameters.is_empty()
    }

    /// The bound value for a parameter name, if any.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Parameter names in insertion order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }

    /// Default rendering: fragments and parameter values concatenated in
    /// construction order. Used whenever no localized template exists.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.fragments[0]);
        for (i, parameter) in self.parameters.iter().enumerate() {
            out.push_str(&parameter.value);
            out.push_str(&self.fragments[i + 1]);
        }
        out
    }

    /// The canonical skeleton of the clause: fragments joined with `{name}`
    /// placeholders, literal braces escaped as `{{`/`}}`.
    ///
    /// This is the authoring-side template form and the input handed to key
    /// selectors when deriving a localization key from literal content.
    pub fn template(&self) -> String {
        let mut out = String::new();
        out.push_str(&escape(&self.fragments[0]));
        for (i, parameter) in self.parameters.iter().enumerate() {
            out.push('{');
            out.push_str(&parameter.name);
            out.push('}');
            out.push_str(&escape(&self.fragments[i + 1]));
        }
        out
    }

    /// Substitute this clause's bound values into `template`.
    ///
    /// Placeholders are `{name}` and are resolved by name, independent of the
    /// order in which the clause bound them: a template may reorder, repeat,
    /// or omit any bound parameter. `{{` and `}}` escape literal braces.
    ///
    /// Fails with `MissingParameter` when the template references a name with
    /// no bound value, and with `MalformedTemplate` for an unclosed, empty,
    /// or stray brace.
    pub fn apply(&self, template: &str) -> Result<String> {
        let bytes = template.as_bytes();
        let mut out = String::with_capacity(template.len());
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'{' => {
                    if bytes.get(i + 1) == Some(&b'{') {
                        out.push('{');
                        i += 2;
                        continue;
                    }
                    let end = template[i + 1..].find('}').map(|off| i + 1 + off).ok_or_else(|| {
                        Error::malformed_template(format!("unclosed '{{' at byte {}", i))
                            .with_operation("clause::apply")
                            .with_context("template", template)
                    })?;
                    let name = &template[i + 1..end];
                    if name.is_empty() {
                        return Err(Error::malformed_template(format!(
                            "empty placeholder at byte {}",
                            i
                        ))
                        .with_operation("clause::apply")
                        .with_context("template", template));
                    }
                    let value = self.value_of(name).ok_or_else(|| {
                        Error::missing_parameter(name)
                            .with_operation("clause::apply")
                            .with_context("template", template)
                    })?;
                    out.push_str(value);
                    i = end + 1;
                }
                b'}' => {
                    if bytes.get(i + 1) == Some(&b'}') {
                        out.push('}');
                        i += 2;
                        continue;
                    }
                    return Err(Error::malformed_template(format!("stray '}}' at byte {}", i))
                        .with_operation("clause::apply")
                        .with_context("template", template));
                }
                _ => {
                    let next = template[i..]
                        .find(['{', '}'])
                        .map(|off| i + off)
                        .unwrap_or(template.len());
                    out.push_str(&template[i..next]);
                    i = next;
                }
            }
        }

        Ok(out)
    }

    /// Localize this clause, deriving the catalog key from its own skeleton.
    ///
    /// `key_for` maps the skeleton (see [`Clause::template`]) to the final
    /// catalog key, letting the caller choose between looking up by record
    /// name and looking up by literal content. When the catalog has a
    /// template for the key, the clause's named values are substituted into
    /// it; when it does not, the default rendering is returned.
    pub fn localize_with<F>(&self, catalog: &dyn Catalog, table: &str, key_for: F) -> Result<String>
    where
        F: FnOnce(&str) -> String,
    {
        let key = key_for(&self.template());
        match catalog.lookup(&key, table) {
            Some(template) => self.apply(&template).map_err(|e| {
                e.with_operation("clause::localize")
                    .with_context("key", key)
                    .with_context("table", table)
            }),
            None => {
                tracing::trace!("no catalog entry for '{}' in table '{}'", key, table);
                Ok(self.render())
            }
        }
    }

    /// Localize this clause under a fixed key.
    pub fn localize_in(&self, catalog: &dyn Catalog, table: &str, key: &str) -> Result<String> {
        self.localize_with(catalog, table, |_| key.to_string())
    }

    /// Localize this clause under a fixed key, against the process-wide
    /// catalog installed via [`catalog::install`].
    pub fn localize(&self, table: &str, key: &str) -> Result<String> {
        self.localize_in(catalog::global(), table, key)
    }
}

fn escape(fragment: &str) -> String {
    if fragment.contains(['{', '}']) {
        fragment.replace('{', "{{").replace('}', "}}")
    } else {
        fragment.to_string()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Clause {
    fn from(text: &str) -> Self {
        Clause::literal(text)
    }
}

impl From<String> for Clause {
    fn from(text: String) -> Self {
        Clause::literal(text)
    }
}

/// Builder interleaving literal text with named parameter values, the
/// programmatic form of the [`clause!`](macro@crate::clause) interpolation
/// macro.
#[derive(Debug)]
pub struct ClauseBuilder {
    fragments: Vec<String>,
    parameters: Vec<Parameter>,
}

impl ClauseBuilder {
    fn new() -> Self {
        Self {
            fragments: vec![String::new()],
            parameters: Vec::new(),
        }
    }

    /// Append literal text. Adjacent literals merge into one fragment.
    pub fn text(mut self, text: impl AsRef<str>) -> Self {
        // new() seeds one fragment, so last_mut always succeeds
        if let Some(last) = self.fragments.last_mut() {
            last.push_str(text.as_ref());
        }
        self
    }

    /// Append a named parameter. The value is formatted immediately; the
    /// clause never holds live references to call-site data.
    pub fn param(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            value: value.to_string(),
        });
        self.fragments.push(String::new());
        self
    }

    /// Finish the clause.
    pub fn build(self) -> Clause {
        Clause {
            fragments: self.fragments,
            parameters: self.parameters,
        }
    }
}

/// Build a [`Clause`] from interpolation-like parts: string literals and
/// `name = value` parameter bindings, comma separated.
///
/// ```rust
/// use plaint_clause::clause;
///
/// let path = "/etc/app.toml";
/// let c = clause!["Config not readable at ", path = path, "."];
/// assert_eq!(c.render(), "Config not readable at /etc/app.toml.");
/// assert_eq!(c.template(), "Config not readable at {path}.");
/// ```
#[macro_export]
macro_rules! clause {
    ($($parts:tt)*) => {{
        #[allow(unused_mut)]
        let mut builder = $crate::Clause::builder();
        $crate::__clause_parts!(builder; $($parts)*);
        builder.build()
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __clause_parts {
    ($builder:ident;) => {};
    ($builder:ident; $name:ident = $value:expr $(, $($rest:tt)*)?) => {
        $builder = $builder.param(stringify!($name), $value);
        $crate::__clause_parts!($builder; $($($rest)*)?);
    };
    ($builder:ident; $text:expr $(, $($rest:tt)*)?) => {
        $builder = $builder.text($text);
        $crate::__clause_parts!($builder; $($($rest)*)?);
    };
}
