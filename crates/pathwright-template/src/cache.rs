//! Shared cache of parsed templates
//!
//! Templates are static per endpoint, so each distinct template string only
//! needs to be parsed once per process.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::Result;
use crate::template::PathTemplate;

/// Thread-safe memo of parsed templates keyed by source text
///
/// Failed parses are returned to the caller and not cached.
///
/// # Examples
///
/// ```
/// use pathwright_template::TemplateCache;
/// use std::sync::Arc;
///
/// let cache = TemplateCache::new();
/// let first = cache.get_or_parse("/users/{id}").unwrap();
/// let second = cache.get_or_parse("/users/{id}").unwrap();
///
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TemplateCache {
    templates: RwLock<HashMap<String, Arc<PathTemplate>>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached template for `source`, parsing it on first use
    pub fn get_or_parse(&self, source: &str) -> Result<Arc<PathTemplate>> {
        // The map is only ever inserted into, so a poisoned lock still holds valid data
        if let Some(template) = self
            .templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(source)
        {
            tracing::trace!(template = source, "path template cache hit");
            return Ok(Arc::clone(template));
        }

        let parsed = Arc::new(PathTemplate::parse(source)?);
        tracing::debug!(template = source, "path template cached");

        let mut templates = self
            .templates
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another thread may have won the race; keep its copy so callers share one Arc
        let template = templates
            .entry(source.to_string())
            .or_insert(parsed);
        Ok(Arc::clone(template))
    }

    pub fn len(&self) -> usize {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.templates
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
