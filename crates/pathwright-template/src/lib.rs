//! # Pathwright Template
//!
//! Path-template resolution for typed HTTP client bindings, with support for:
//! - Literal text (`/users`)
//! - Single-segment parameters (`/users/{id}`)
//! - Wildcard parameters that match the rest of the path (`/files/{path:.*}`)
//!
//! ## Encoding
//!
//! Every substituted value is percent-encoded as one opaque unit. Anything
//! outside the unreserved set (`A-Z a-z 0-9 - . _ ~`) is encoded, and a `/`
//! inside a value always becomes `%2F`, whatever the parameter kind. A caller
//! value can never introduce a path segment the template did not declare.
//!
//! ## No Normalization
//!
//! Resolution copies template literals verbatim and never collapses or trims
//! separators:
//! - `begin/{path}/end` with `path = ""` → `begin//end`
//! - `complex/{path:.*}` with `path = ""` → `complex/`
//!
//! ## Example
//!
//! ```
//! use pathwright_template::PathTemplate;
//! use std::collections::HashMap;
//!
//! let template = PathTemplate::parse("/complex/{path:.*}").unwrap();
//!
//! let mut values = HashMap::new();
//! values.insert("path".to_string(), "foo/bar".to_string());
//!
//! assert_eq!(template.resolve(&values).unwrap(), "/complex/foo%2Fbar");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod cache;
pub mod encode;
mod error;
pub mod path;
pub mod resolve;
pub mod template;

pub use cache::TemplateCache;
pub use encode::encode;
pub use error::{MalformedReason, Result, TemplateError};
pub use path::join_template_paths;
pub use resolve::{resolve, ParameterSource};
pub use template::{parse, ParameterKind, PathTemplate, Segment};
