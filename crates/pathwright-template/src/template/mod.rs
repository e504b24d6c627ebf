//! Parsed path templates
//!
//! A [`PathTemplate`] is parsed once per endpoint declaration and reused for
//! every call. It is immutable, so sharing it across threads needs no locking.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TemplateError};
use crate::resolve::{self, ParameterSource};

pub mod parser;
pub mod segment;

pub use parser::parse;
pub use segment::{ParameterKind, Segment, WILDCARD_MARKER};

/// An ordered sequence of literal and parameter segments
///
/// Serializes as its source text and validates on deserialization, so
/// templates can live directly in configuration files.
///
/// # Examples
///
/// ```
/// use pathwright_template::{ParameterKind, PathTemplate};
///
/// let template: PathTemplate = "/users/{id}/files/{path:.*}".parse().unwrap();
///
/// let params: Vec<_> = template.parameters().collect();
/// assert_eq!(params, vec![("id", ParameterKind::Single), ("path", ParameterKind::Multi)]);
///
/// let path = template.resolve(&[("id", "42"), ("path", "a/b c")]).unwrap();
/// assert_eq!(path, "/users/42/files/a%2Fb%20c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parses a template (see [`parse`])
    pub fn parse(template: &str) -> Result<Self> {
        parser::parse(template)
    }

    pub(crate) fn from_parts(source: String, segments: Vec<Segment>) -> Self {
        Self { source, segments }
    }

    /// The template text exactly as declared
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Declared parameters in template order
    pub fn parameters(&self) -> impl Iterator<Item = (&str, ParameterKind)> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Parameter { name, kind } => Some((name.as_str(), *kind)),
            Segment::Literal(_) => None,
        })
    }

    pub fn has_parameters(&self) -> bool {
        self.segments.iter().any(Segment::is_parameter)
    }

    /// Whether the template ends in a wildcard parameter
    pub fn ends_with_wildcard(&self) -> bool {
        matches!(
            self.segments.last(),
            Some(Segment::Parameter {
                kind: ParameterKind::Multi,
                ..
            })
        )
    }

    /// Substitutes encoded values into the template (see [`resolve::resolve`])
    pub fn resolve<P>(&self, values: &P) -> Result<String>
    where
        P: ParameterSource + ?Sized,
    {
        resolve::resolve(self, values)
    }
}

/// Renders the canonical form: literals verbatim, `{name}` and `{name:.*}`
impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.segments
            .iter()
            .try_for_each(|segment| write!(f, "{}", segment))
    }
}

impl FromStr for PathTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse(s)
    }
}

impl TryFrom<String> for PathTemplate {
    type Error = TemplateError;

    fn try_from(value: String) -> Result<Self> {
        parser::parse(&value)
    }
}

impl From<PathTemplate> for String {
    fn from(template: PathTemplate) -> Self {
        template.source
    }
}
