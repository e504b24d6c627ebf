//! Template parsing
//!
//! A single left-to-right scan driven by an explicit state machine. No regex,
//! no backtracking: each character is looked at once and either extends the
//! current literal run, the placeholder name, or the placeholder pattern.

use std::collections::HashSet;

use super::segment::{is_reserved_name_char, ParameterKind, Segment};
use super::PathTemplate;
use crate::error::{MalformedReason, Result, TemplateError};

/// Scanner position relative to placeholder syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Outside any placeholder
    InLiteral,
    /// After `{`, reading the parameter name
    InPlaceholderName,
    /// After `{name:`, reading the pattern
    InPlaceholderKind,
}

/// Accumulator for the scan
///
/// All mutation is local to one `parse` call.
struct ParseState<'a> {
    template: &'a str,
    state: ScanState,
    segments: Vec<Segment>,
    literal: String,
    name: String,
    pattern: Option<String>,
    /// Byte offset of the `{` that opened the current placeholder
    opened_at: usize,
    seen: HashSet<String>,
}

impl<'a> ParseState<'a> {
    fn new(template: &'a str) -> Self {
        Self {
            template,
            state: ScanState::InLiteral,
            segments: Vec::new(),
            literal: String::new(),
            name: String::new(),
            pattern: None,
            opened_at: 0,
            seen: HashSet::new(),
        }
    }

    fn error(&self, position: usize, reason: MalformedReason) -> TemplateError {
        TemplateError::malformed(self.template, position, reason)
    }

    /// Moves the pending literal run, if any, into the segment list
    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            self.segments
                .push(Segment::Literal(std::mem::take(&mut self.literal)));
        }
    }

    fn step(&mut self, position: usize, c: char) -> Result<()> {
        match (self.state, c) {
            (ScanState::InLiteral, '{') => self.open_placeholder(position),
            (ScanState::InLiteral, '}') => {
                Err(self.error(position, MalformedReason::UnmatchedClosingBrace))
            }
            (ScanState::InLiteral, c) => {
                self.literal.push(c);
                Ok(())
            }

            (ScanState::InPlaceholderName, '}') => self.close_placeholder(),
            (ScanState::InPlaceholderName, ':') => {
                self.pattern = Some(String::new());
                self.state = ScanState::InPlaceholderKind;
                Ok(())
            }
            (ScanState::InPlaceholderName, '{') | (ScanState::InPlaceholderKind, '{') => {
                Err(self.error(position, MalformedReason::NestedPlaceholder))
            }
            (ScanState::InPlaceholderName, c) if is_reserved_name_char(c) => {
                Err(self.error(position, MalformedReason::InvalidNameCharacter(c)))
            }
            (ScanState::InPlaceholderName, c) => {
                self.name.push(c);
                Ok(())
            }

            (ScanState::InPlaceholderKind, '}') => self.close_placeholder(),
            (ScanState::InPlaceholderKind, c) => {
                if let Some(pattern) = self.pattern.as_mut() {
                    pattern.push(c);
                }
                Ok(())
            }
        }
    }

    fn open_placeholder(&mut self, position: usize) -> Result<()> {
        // Two parameters with nothing between them have no defined split point
        if self.literal.is_empty() {
            if let Some(previous) = self.segments.last().and_then(Segment::parameter_name) {
                return Err(self.error(
                    position,
                    MalformedReason::AdjacentParameters(previous.to_string()),
                ));
            }
        }

        self.flush_literal();
        self.opened_at = position;
        self.state = ScanState::InPlaceholderName;
        Ok(())
    }

    fn close_placeholder(&mut self) -> Result<()> {
        let name = std::mem::take(&mut self.name);
        let pattern = self.pattern.take();

        if name.is_empty() {
            return Err(self.error(self.opened_at, MalformedReason::EmptyParameterName));
        }

        let kind = match pattern.as_deref() {
            Some(p) if p.trim().is_empty() => {
                return Err(self.error(self.opened_at, MalformedReason::EmptyPattern(name)));
            }
            p => ParameterKind::from_pattern(p).ok_or_else(|| {
                self.error(
                    self.opened_at,
                    MalformedReason::UnsupportedPattern {
                        name: name.clone(),
                        pattern: p.unwrap_or_default().to_string(),
                    },
                )
            })?,
        };

        if !self.seen.insert(name.clone()) {
            return Err(self.error(self.opened_at, MalformedReason::DuplicateParameter(name)));
        }

        self.segments.push(Segment::Parameter { name, kind });
        self.state = ScanState::InLiteral;
        Ok(())
    }

    fn finish(mut self) -> Result<PathTemplate> {
        if self.state != ScanState::InLiteral {
            return Err(self.error(self.opened_at, MalformedReason::UnterminatedPlaceholder));
        }

        self.flush_literal();
        Ok(PathTemplate::from_parts(self.template.to_string(), self.segments))
    }
}

/// Parses a template string into a [`PathTemplate`]
///
/// Literal runs are kept exactly as written, `/` included; they are trusted
/// author text and are never encoded or split.
///
/// # Errors
///
/// `MalformedTemplate` when a placeholder is unterminated or nested, a name
/// is empty, repeated, or contains a reserved character, a `}` has no
/// matching `{`, two parameters touch, or a pattern is not `.*`.
///
/// # Examples
///
/// ```
/// use pathwright_template::{parse, ParameterKind, Segment};
///
/// let template = parse("begin/{path}/end").unwrap();
/// assert_eq!(
///     template.segments(),
///     &[
///         Segment::Literal("begin/".to_string()),
///         Segment::Parameter { name: "path".to_string(), kind: ParameterKind::Single },
///         Segment::Literal("/end".to_string()),
///     ]
/// );
///
/// assert!(parse("begin/{path").is_err());
/// ```
pub fn parse(template: &str) -> Result<PathTemplate> {
    let mut state = ParseState::new(template);

    for (position, c) in template.char_indices() {
        state.step(position, c)?;
    }

    let parsed = state.finish()?;
    tracing::trace!(
        template,
        segments = parsed.segments().len(),
        "parsed path template"
    );
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn literal(text: &str) -> Segment {
        Segment::Literal(text.to_string())
    }

    fn single(name: &str) -> Segment {
        Segment::Parameter {
            name: name.to_string(),
            kind: ParameterKind::Single,
        }
    }

    fn multi(name: &str) -> Segment {
        Segment::Parameter {
            name: name.to_string(),
            kind: ParameterKind::Multi,
        }
    }

    fn reason(template: &str) -> MalformedReason {
        parse(template)
            .unwrap_err()
            .malformed_reason()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_parse_literal_only() {
        let template = parse("/api/v1/users").unwrap();
        assert_eq!(template.segments(), &[literal("/api/v1/users")]);
    }

    #[test]
    fn test_parse_empty() {
        let template = parse("").unwrap();
        assert!(template.segments().is_empty());
    }

    #[test]
    fn test_parse_single_parameter() {
        let template = parse("begin/{path}/end").unwrap();
        assert_eq!(
            template.segments(),
            &[literal("begin/"), single("path"), literal("/end")]
        );
    }

    #[test]
    fn test_parse_wildcard_parameter() {
        let template = parse("complex/{path:.*}").unwrap();
        assert_eq!(template.segments(), &[literal("complex/"), multi("path")]);
    }

    #[test]
    fn test_parse_wildcard_with_whitespace() {
        let template = parse("complex/{path: .* }").unwrap();
        assert_eq!(template.segments(), &[literal("complex/"), multi("path")]);
    }

    #[test]
    fn test_parse_leading_parameter() {
        let template = parse("{tenant}/items").unwrap();
        assert_eq!(template.segments(), &[single("tenant"), literal("/items")]);
    }

    #[test]
    fn test_parse_parameters_sharing_segment() {
        let template = parse("files/{name}.{ext}").unwrap();
        assert_eq!(
            template.segments(),
            &[literal("files/"), single("name"), literal("."), single("ext")]
        );
    }

    #[test]
    fn test_parse_keeps_repeated_slashes() {
        let template = parse("a//{b}//").unwrap();
        assert_eq!(template.segments(), &[literal("a//"), single("b"), literal("//")]);
    }

    #[test]
    fn test_unterminated_placeholder() {
        let err = parse("users/{id").unwrap_err();
        assert_eq!(
            err,
            TemplateError::MalformedTemplate {
                template: "users/{id".to_string(),
                position: 6,
                reason: MalformedReason::UnterminatedPlaceholder,
            }
        );
    }

    #[test]
    fn test_unterminated_pattern() {
        assert_eq!(reason("files/{path:.*"), MalformedReason::UnterminatedPlaceholder);
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(reason("users/{}"), MalformedReason::EmptyParameterName);
        assert_eq!(reason("users/{:.*}"), MalformedReason::EmptyParameterName);
    }

    #[test]
    fn test_duplicate_name() {
        assert_eq!(
            reason("{id}/x/{id}"),
            MalformedReason::DuplicateParameter("id".to_string())
        );
    }

    #[test]
    fn test_duplicate_name_across_kinds() {
        assert_eq!(
            reason("{id}/x/{id:.*}"),
            MalformedReason::DuplicateParameter("id".to_string())
        );
    }

    #[test]
    fn test_reserved_character_in_name() {
        assert_eq!(reason("{a/b}"), MalformedReason::InvalidNameCharacter('/'));
        assert_eq!(reason("{a b}"), MalformedReason::InvalidNameCharacter(' '));
        assert_eq!(reason("{a?}"), MalformedReason::InvalidNameCharacter('?'));
    }

    #[test]
    fn test_nested_placeholder() {
        assert_eq!(reason("{a{b}}"), MalformedReason::NestedPlaceholder);
        assert_eq!(reason("{a:[0-9]{2}}"), MalformedReason::NestedPlaceholder);
    }

    #[test]
    fn test_unmatched_closing_brace() {
        let err = parse("users/id}").unwrap_err();
        assert_eq!(
            err,
            TemplateError::MalformedTemplate {
                template: "users/id}".to_string(),
                position: 8,
                reason: MalformedReason::UnmatchedClosingBrace,
            }
        );
    }

    #[test]
    fn test_adjacent_parameters() {
        assert_eq!(
            reason("{a}{b}"),
            MalformedReason::AdjacentParameters("a".to_string())
        );
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(reason("{a:}"), MalformedReason::EmptyPattern("a".to_string()));
        assert_eq!(reason("{a: }"), MalformedReason::EmptyPattern("a".to_string()));
    }

    #[test]
    fn test_unsupported_pattern() {
        assert_eq!(
            reason("{id:[0-9]+}"),
            MalformedReason::UnsupportedPattern {
                name: "id".to_string(),
                pattern: "[0-9]+".to_string(),
            }
        );
    }

    #[test]
    fn test_position_is_byte_offset() {
        // 'é' is two bytes in UTF-8
        let err = parse("é/{x").unwrap_err();
        assert!(matches!(
            err,
            TemplateError::MalformedTemplate { position: 3, .. }
        ));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse("begin/{path}/end/{rest:.*}").unwrap();
        let second = parse("begin/{path}/end/{rest:.*}").unwrap();
        assert_eq!(first, second);
    }
}
