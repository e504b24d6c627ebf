//! Service client
//!
//! Holds a transport and a set of named endpoints. Every call resolves its
//! path first; the transport is only invoked once a complete path exists.

use std::collections::HashMap;

use http::{HeaderMap, Method};
use pathwright_template::{ParameterSource, TemplateCache};

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{ClientError, Result};
use crate::transport::{Response, Transport};

/// A service binding: named endpoints dispatched over one transport
///
/// Built either with the builder API or from a [`ClientConfig`].
pub struct ServiceClient<T> {
    name: String,
    transport: T,
    endpoints: HashMap<String, Endpoint>,
}

impl<T: Transport> ServiceClient<T> {
    pub fn new(name: impl Into<String>, transport: T) -> Self {
        Self {
            name: name.into(),
            transport,
            endpoints: HashMap::new(),
        }
    }

    /// Builds a client from configuration, validating every template
    ///
    /// Fails on the first malformed template, unknown method, or duplicate
    /// endpoint name.
    pub fn from_config(config: &ClientConfig, transport: T) -> Result<Self> {
        let cache = TemplateCache::new();

        config.endpoints.iter().try_fold(
            Self::new(config.service.name.clone(), transport),
            |client, endpoint| {
                let method = Method::from_bytes(endpoint.method.as_bytes()).map_err(|_| {
                    ClientError::InvalidMethod {
                        endpoint: endpoint.name.clone(),
                        method: endpoint.method.clone(),
                    }
                })?;

                let declared = Endpoint::with_cache(
                    endpoint.name.clone(),
                    method,
                    &config.service.base_path,
                    &endpoint.path,
                    &cache,
                )?;

                client.try_with_endpoint(declared)
            },
        )
    }

    /// Adds an endpoint (functional builder), replacing any with the same name
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.add_endpoint(endpoint);
        self
    }

    /// Adds an endpoint, rejecting a name that is already declared
    pub fn try_with_endpoint(mut self, endpoint: Endpoint) -> Result<Self> {
        if self.endpoints.contains_key(endpoint.name()) {
            return Err(ClientError::DuplicateEndpoint(endpoint.name().to_string()));
        }
        self.add_endpoint(endpoint);
        Ok(self)
    }

    pub fn add_endpoint(&mut self, endpoint: Endpoint) {
        self.endpoints.insert(endpoint.name().to_string(), endpoint);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn endpoint(&self, name: &str) -> Option<&Endpoint> {
        self.endpoints.get(name)
    }

    pub fn endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.endpoints.values()
    }

    /// Resolves the endpoint's path and sends the request
    ///
    /// # Errors
    ///
    /// - `UnknownEndpoint` if no endpoint has this name
    /// - `Template` (`MissingParameter`) if a path value is absent; the
    ///   transport is not invoked
    /// - `Transport` if dispatch itself fails
    pub async fn call<P>(
        &self,
        endpoint: &str,
        values: &P,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Result<Response>
    where
        P: ParameterSource + ?Sized,
    {
        let declared = self
            .endpoints
            .get(endpoint)
            .ok_or_else(|| ClientError::UnknownEndpoint(endpoint.to_string()))?;

        let request = declared.request(values, headers, body).map_err(|err| {
            tracing::warn!(
                service = %self.name,
                endpoint,
                error = %err,
                "request not dispatched"
            );
            err
        })?;

        tracing::debug!(
            service = %self.name,
            endpoint,
            method = %request.method,
            path = %request.path,
            transport = self.transport.name(),
            "dispatching request"
        );

        self.transport
            .send(request)
            .await
            .map_err(|source| ClientError::Transport {
                transport: self.transport.name(),
                source,
            })
    }
}

impl<T> std::fmt::Debug for ServiceClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("name", &self.name)
            .field("endpoints", &self.endpoints.keys().collect::<Vec<_>>())
            .finish()
    }
}
