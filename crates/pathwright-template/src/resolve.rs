//! Path assembly
//!
//! Walks a parsed template and splices in encoded values. Output is the
//! template structure verbatim plus substitutions; nothing is normalized.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::encode::encode;
use crate::error::{Result, TemplateError};
use crate::template::{PathTemplate, Segment};

/// Lookup of per-call parameter values by name
///
/// Implemented for the common map types and for slices/arrays of `(&str, &str)`
/// pairs, so call sites can pass whichever they already have.
pub trait ParameterSource {
    fn parameter(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> ParameterSource for HashMap<String, String, S> {
    fn parameter(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<'v, S: BuildHasher> ParameterSource for HashMap<&'v str, &'v str, S> {
    fn parameter(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

impl ParameterSource for BTreeMap<String, String> {
    fn parameter(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<'v> ParameterSource for [(&'v str, &'v str)] {
    fn parameter(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

impl<'v, const N: usize> ParameterSource for [(&'v str, &'v str); N] {
    fn parameter(&self, name: &str) -> Option<&str> {
        self.as_slice().parameter(name)
    }
}

/// Resolves a template against per-call values (pure function)
///
/// Literals are appended unchanged; each parameter is looked up by name,
/// encoded by [`encode`], and appended. Values for names the template does
/// not declare are ignored.
///
/// # Errors
///
/// `MissingParameter` for the first declared parameter without a value. No
/// partial path is returned.
///
/// # Examples
///
/// ```
/// use pathwright_template::{resolve, PathTemplate};
///
/// let template = PathTemplate::parse("begin/{path}/end").unwrap();
/// assert_eq!(resolve(&template, &[("path", "")]).unwrap(), "begin//end");
/// assert_eq!(resolve(&template, &[("path", "x/y")]).unwrap(), "begin/x%2Fy/end");
///
/// let wildcard = PathTemplate::parse("complex/{path:.*}").unwrap();
/// assert_eq!(resolve(&wildcard, &[("path", "")]).unwrap(), "complex/");
///
/// let err = resolve(&template, &[("other", "1")]).unwrap_err();
/// assert!(err.is_missing_parameter());
/// ```
pub fn resolve<P>(template: &PathTemplate, values: &P) -> Result<String>
where
    P: ParameterSource + ?Sized,
{
    template.segments().iter().try_fold(
        String::with_capacity(template.as_str().len()),
        |mut path, segment| {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Parameter { name, kind } => {
                    let value = values.parameter(name).ok_or_else(|| {
                        TemplateError::MissingParameter {
                            name: name.clone(),
                            template: template.as_str().to_string(),
                        }
                    })?;
                    path.push_str(&encode(*kind, value));
                }
            }
            Ok(path)
        },
    )
}
