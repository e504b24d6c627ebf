//! Transport seam
//!
//! The HTTP stack itself (pooling, retries, TLS) lives behind [`Transport`].
//! This crate only hands it a fully resolved request.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};

/// A request whose path has already been resolved and encoded
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Encoded request path, ready for the request line
    pub path: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// HTTP/1.1 request line, e.g. `GET /complex/foo%2Fbar HTTP/1.1`
    pub fn request_line(&self) -> String {
        format!("{} {} HTTP/1.1", self.method, self.path)
    }
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Something that can deliver a resolved request
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return the response
    async fn send(&self, request: Request) -> Result<Response>;

    /// Transport name for logs and errors
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: Request) -> Result<Response> {
        (**self).send(request).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
