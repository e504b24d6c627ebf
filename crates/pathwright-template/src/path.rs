//! Joining of a service base path and an endpoint path
//!
//! Endpoints are declared relative to their service (`/` + `complex/{path:.*}`),
//! and the two halves are joined into one template before parsing.

use std::borrow::Cow;

/// Joins a base path and an endpoint path with exactly one `/` at the seam
///
/// **Pure function** with zero-copy when one side is empty.
///
/// # Rules
///
/// - Empty base or empty path → the other side, unchanged
/// - Base ends with `/` and path starts with `/` → one of them is dropped
/// - Neither side has a `/` at the seam → one is inserted
/// - Nothing away from the seam is touched (repeated slashes stay)
///
/// # Examples
///
/// ```
/// use pathwright_template::path::join_template_paths;
///
/// assert_eq!(join_template_paths("/", "complex/{path:.*}"), "/complex/{path:.*}");
/// assert_eq!(join_template_paths("/api/", "/users"), "/api/users");
/// assert_eq!(join_template_paths("/api", "users"), "/api/users");
/// assert_eq!(join_template_paths("/api", ""), "/api");
/// ```
pub fn join_template_paths<'a>(base: &'a str, path: &'a str) -> Cow<'a, str> {
    if base.is_empty() {
        return Cow::Borrowed(path);
    }
    if path.is_empty() {
        return Cow::Borrowed(base);
    }

    match (base.ends_with('/'), path.starts_with('/')) {
        (true, true) => Cow::Owned(format!("{}{}", base, &path[1..])),
        (false, false) => Cow::Owned(format!("{}/{}", base, path)),
        _ => Cow::Owned(format!("{}{}", base, path)),
    }
}
