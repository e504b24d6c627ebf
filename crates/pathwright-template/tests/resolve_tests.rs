//! Integration tests for pathwright-template
//!
//! Covers the path-level guarantees client bindings rely on:
//! - Literal-only templates resolve to themselves
//! - Values never introduce unencoded `/`
//! - Empty values keep the surrounding separators
//! - Parsing is deterministic
//! - Endpoint declarations joined onto a `/` base

use pathwright_template::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashMap;

fn endpoint(base: &str, path: &str) -> PathTemplate {
    PathTemplate::parse(&join_template_paths(base, path)).unwrap()
}

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Declared endpoint scenarios
// ============================================================================

#[rstest]
#[case("complex/{path:.*}", "foo/bar", "/complex/foo%2Fbar")]
#[case("complex/{path:.*}", "", "/complex/")]
#[case("begin/{path}/end", "", "/begin//end")]
#[case("begin/{path}/end", "x/y", "/begin/x%2Fy/end")]
#[case("begin/{path}/end", "plain", "/begin/plain/end")]
#[case("complex/{path:.*}", "a b/c?d", "/complex/a%20b%2Fc%3Fd")]
fn test_endpoint_resolution(#[case] path: &str, #[case] value: &str, #[case] expected: &str) {
    let template = endpoint("/", path);
    let resolved = template.resolve(&values(&[("path", value)])).unwrap();
    assert_eq!(resolved, expected);
}

#[test]
fn test_missing_parameter_fails_without_partial_path() {
    let template = endpoint("/", "begin/{path}/end");
    let err = template.resolve(&values(&[])).unwrap_err();

    assert_eq!(
        err,
        TemplateError::MissingParameter {
            name: "path".to_string(),
            template: "/begin/{path}/end".to_string(),
        }
    );
}

#[test]
fn test_wrong_parameter_name_is_missing() {
    let template = endpoint("/", "complex/{path:.*}");
    let err = template.resolve(&[("Path", "x")]).unwrap_err();
    assert!(err.is_missing_parameter());
}

// ============================================================================
// Round-trip: literal-only templates
// ============================================================================

#[rstest]
#[case("/")]
#[case("")]
#[case("/health")]
#[case("/api/v1/users/")]
#[case("//double//slashes//")]
#[case("/already%20encoded")]
#[case("relative/path")]
fn test_literal_template_resolves_to_itself(#[case] source: &str) {
    let template = PathTemplate::parse(source).unwrap();
    assert_eq!(template.resolve(&values(&[])).unwrap(), source);
}

// ============================================================================
// Slash property
// ============================================================================

#[rstest]
#[case("{p}")]
#[case("{p:.*}")]
#[case("/a/{p}/b")]
#[case("/a/{p:.*}")]
fn test_value_slashes_never_add_separators(#[case] source: &str) {
    let template = PathTemplate::parse(source).unwrap();
    let literal_slashes = source.matches('/').count();

    for value in ["/", "a/b", "/a/b/", "..//..", "%2F/x", "ü/ö"] {
        let resolved = template.resolve(&[("p", value)]).unwrap();
        assert_eq!(
            resolved.matches('/').count(),
            literal_slashes,
            "value {:?} produced {:?}",
            value,
            resolved
        );
    }
}

// ============================================================================
// Empty-value property
// ============================================================================

#[rstest]
#[case("/complex/{path:.*}", "/complex/")]
#[case("/a/b/{rest:.*}", "/a/b/")]
#[case("{rest:.*}", "")]
#[case("/{id}/files/{rest:.*}", "/7/files/")]
fn test_empty_trailing_wildcard_stops_at_separator(#[case] source: &str, #[case] expected: &str) {
    let template = PathTemplate::parse(source).unwrap();
    assert!(template.ends_with_wildcard());

    let resolved = template.resolve(&[("id", "7"), ("rest", ""), ("path", "")]).unwrap();
    assert_eq!(resolved, expected);
}

#[test]
fn test_empty_single_parameter_keeps_both_separators() {
    let template = PathTemplate::parse("/a/{x}/{y}/b").unwrap();
    assert_eq!(
        template.resolve(&[("x", ""), ("y", "")]).unwrap(),
        "/a///b"
    );
}

// ============================================================================
// Deterministic parsing
// ============================================================================

#[rstest]
#[case("complex/{path:.*}")]
#[case("begin/{path}/end")]
#[case("/{a}/x/{b}.{c}/{rest:.*}")]
fn test_parse_twice_resolves_identically(#[case] source: &str) {
    let first = PathTemplate::parse(source).unwrap();
    let second = PathTemplate::parse(source).unwrap();
    assert_eq!(first, second);

    let input = [
        ("path", "p/q"),
        ("a", "1"),
        ("b", ""),
        ("c", "json"),
        ("rest", "r e/s t"),
    ];
    assert_eq!(first.resolve(&input), second.resolve(&input));
}

// ============================================================================
// Malformed templates surface at parse time
// ============================================================================

#[rstest]
#[case("users/{id")]
#[case("users/{}")]
#[case("users/{id}/{id}")]
#[case("users/{a}{b}")]
#[case("users/{id:[0-9]+}")]
#[case("users/{id:}")]
#[case("users/id}")]
#[case("users/{i/d}")]
fn test_malformed_templates(#[case] source: &str) {
    let err = PathTemplate::parse(source).unwrap_err();
    assert!(err.is_malformed(), "{:?} should be malformed", source);
}

#[test]
fn test_cache_resolves_like_direct_parse() {
    let cache = TemplateCache::new();
    let cached = cache.get_or_parse("/complex/{path:.*}").unwrap();
    let direct = PathTemplate::parse("/complex/{path:.*}").unwrap();

    let input = [("path", "foo/bar")];
    assert_eq!(cached.resolve(&input), direct.resolve(&input));
}
