//! Endpoint declarations
//!
//! An endpoint is what a generated binding method corresponds to: a name, an
//! HTTP method, and a path template joined onto the service base path.

use std::sync::Arc;

use http::{HeaderMap, Method};
use pathwright_template::{join_template_paths, ParameterSource, PathTemplate, TemplateCache};

use crate::transport::Request;

/// One declared service operation
///
/// The template is parsed when the endpoint is built, so a malformed
/// declaration fails at binding construction rather than on first call.
///
/// # Examples
///
/// ```
/// use http::Method;
/// use pathwright_client::Endpoint;
///
/// let endpoint = Endpoint::new("inner_path", Method::GET, "/", "begin/{path}/end").unwrap();
/// assert_eq!(endpoint.resolve(&[("path", "")]).unwrap(), "/begin//end");
/// ```
#[derive(Debug, Clone)]
pub struct Endpoint {
    name: String,
    method: Method,
    template: Arc<PathTemplate>,
}

impl Endpoint {
    /// Declares an endpoint at `path` relative to `base_path`
    pub fn new(
        name: impl Into<String>,
        method: Method,
        base_path: &str,
        path: &str,
    ) -> pathwright_template::Result<Self> {
        let template = PathTemplate::parse(&join_template_paths(base_path, path))?;
        Ok(Self::from_template(name, method, Arc::new(template)))
    }

    /// Like [`Endpoint::new`], sharing parsed templates through `cache`
    pub fn with_cache(
        name: impl Into<String>,
        method: Method,
        base_path: &str,
        path: &str,
        cache: &TemplateCache,
    ) -> pathwright_template::Result<Self> {
        let template = cache.get_or_parse(&join_template_paths(base_path, path))?;
        Ok(Self::from_template(name, method, template))
    }

    pub fn from_template(
        name: impl Into<String>,
        method: Method,
        template: Arc<PathTemplate>,
    ) -> Self {
        Self {
            name: name.into(),
            method,
            template,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    /// Resolves the encoded request path for one call
    pub fn resolve<P>(&self, values: &P) -> pathwright_template::Result<String>
    where
        P: ParameterSource + ?Sized,
    {
        self.template.resolve(values)
    }

    /// Builds the request for one call; fails before anything is built if a
    /// parameter is missing
    pub fn request<P>(
        &self,
        values: &P,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> pathwright_template::Result<Request>
    where
        P: ParameterSource + ?Sized,
    {
        let path = self.resolve(values)?;
        Ok(Request::new(self.method.clone(), path)
            .with_headers(headers)
            .with_body(body))
    }
}
