//! Segment types for parsed path templates
//!
//! A template is a flat sequence of literal runs and parameter placeholders.
//! All functions here are **pure**: same input → same output, no side effects.

use std::fmt;

/// Marker that turns a placeholder into a rest-of-path parameter: `{name:.*}`
pub const WILDCARD_MARKER: &str = ".*";

/// How a parameter participates in server-side matching
///
/// The kind never changes how a value is encoded (see [`crate::encode`]).
/// It only records what the template author declared.
///
/// # Examples
///
/// ```
/// use pathwright_template::ParameterKind;
///
/// assert_eq!(ParameterKind::from_pattern(None), Some(ParameterKind::Single));
/// assert_eq!(ParameterKind::from_pattern(Some(".*")), Some(ParameterKind::Multi));
/// assert_eq!(ParameterKind::from_pattern(Some(" .* ")), Some(ParameterKind::Multi));
/// assert_eq!(ParameterKind::from_pattern(Some("[0-9]+")), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Exactly one path segment: `{id}`
    Single,
    /// Zero or more path segments, typically the tail of a template: `{path:.*}`
    Multi,
}

impl ParameterKind {
    /// Classifies the text after `:` in a placeholder (pure function)
    ///
    /// `None` (no `:` at all) is `Single`. The wildcard marker, ignoring
    /// surrounding whitespace, is `Multi`. Anything else is unsupported and
    /// yields `None`; callers reject it rather than guessing.
    pub fn from_pattern(pattern: Option<&str>) -> Option<Self> {
        match pattern.map(str::trim) {
            None => Some(Self::Single),
            Some(WILDCARD_MARKER) => Some(Self::Multi),
            Some(_) => None,
        }
    }

    /// The pattern text this kind renders with, if any
    pub fn pattern(&self) -> Option<&'static str> {
        match self {
            Self::Single => None,
            Self::Multi => Some(WILDCARD_MARKER),
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Self::Multi)
    }
}

/// One element of a parsed template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Author-declared text, copied into the output verbatim
    Literal(String),
    /// Placeholder resolved from caller values at call time
    Parameter { name: String, kind: ParameterKind },
}

impl Segment {
    /// Parameter name, or `None` for literals
    pub fn parameter_name(&self) -> Option<&str> {
        match self {
            Self::Parameter { name, .. } => Some(name),
            Self::Literal(_) => None,
        }
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self, Self::Parameter { .. })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Parameter { name, kind } => match kind.pattern() {
                Some(pattern) => write!(f, "{{{}:{}}}", name, pattern),
                None => write!(f, "{{{}}}", name),
            },
        }
    }
}

/// Characters a parameter name may not contain
///
/// Braces and `:` are template syntax; the rest are URI delimiters that would
/// make the name ambiguous in diagnostics and generated code.
pub(crate) fn is_reserved_name_char(c: char) -> bool {
    matches!(c, '{' | '}' | ':' | '/' | '?' | '#' | '%') || c.is_whitespace() || c.is_control()
}
