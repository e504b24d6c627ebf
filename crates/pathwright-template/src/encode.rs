//! Parameter value encoding
//!
//! This is the one place caller-supplied text enters a request path. Any new
//! parameter kind must get its own arm here with its own rule.

use std::borrow::Cow;

use crate::template::ParameterKind;

/// Percent-encodes a parameter value for splicing into a path (pure function)
///
/// Every byte outside the unreserved set (`A-Z a-z 0-9 - . _ ~`) is encoded,
/// non-ASCII text as its UTF-8 bytes. Both kinds encode `/` as `%2F`: a value
/// is always one opaque unit and can never add a segment boundary. `Multi`
/// only affects where the template may place the parameter.
///
/// # Examples
///
/// ```
/// use pathwright_template::{encode, ParameterKind};
///
/// assert_eq!(encode(ParameterKind::Single, "x/y"), "x%2Fy");
/// assert_eq!(encode(ParameterKind::Multi, "foo/bar"), "foo%2Fbar");
/// assert_eq!(encode(ParameterKind::Single, "100% done?"), "100%25%20done%3F");
/// assert_eq!(encode(ParameterKind::Multi, ""), "");
/// ```
pub fn encode(kind: ParameterKind, value: &str) -> Cow<'_, str> {
    match kind {
        ParameterKind::Single | ParameterKind::Multi => urlencoding::encode(value),
    }
}
