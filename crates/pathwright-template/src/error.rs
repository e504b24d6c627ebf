// File: src/error.rs
// Purpose: Error types for template parsing and path resolution

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors raised while parsing a template or resolving a path
///
/// Both variants are deterministic: retrying with the same input fails the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template text is not a valid path template
    #[error("malformed path template `{template}` at byte {position}: {reason}")]
    MalformedTemplate {
        template: String,
        position: usize,
        reason: MalformedReason,
    },

    /// A call did not supply a value for a declared parameter
    #[error("missing value for path parameter `{name}` in template `{template}`")]
    MissingParameter { name: String, template: String },
}

impl TemplateError {
    pub(crate) fn malformed(template: &str, position: usize, reason: MalformedReason) -> Self {
        Self::MalformedTemplate {
            template: template.to_string(),
            position,
            reason,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedTemplate { .. })
    }

    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, Self::MissingParameter { .. })
    }

    /// The syntax failure, if this is a `MalformedTemplate`
    pub fn malformed_reason(&self) -> Option<&MalformedReason> {
        match self {
            Self::MalformedTemplate { reason, .. } => Some(reason),
            Self::MissingParameter { .. } => None,
        }
    }
}

/// Why a template failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("placeholder opened here is never closed")]
    UnterminatedPlaceholder,

    #[error("placeholder has an empty parameter name")]
    EmptyParameterName,

    #[error("parameter `{0}` is declared more than once")]
    DuplicateParameter(String),

    #[error("character {0:?} is not allowed in a parameter name")]
    InvalidNameCharacter(char),

    #[error("placeholders cannot be nested")]
    NestedPlaceholder,

    #[error("`}}` without a matching `{{`")]
    UnmatchedClosingBrace,

    #[error("parameter `{0}` directly follows another parameter with no literal text between them")]
    AdjacentParameters(String),

    #[error("parameter `{0}` has an empty pattern")]
    EmptyPattern(String),

    #[error("parameter `{name}` uses unsupported pattern `{pattern}` (only `.*` is recognised)")]
    UnsupportedPattern { name: String, pattern: String },
}
