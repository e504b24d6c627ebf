//! # Pathwright Client
//!
//! Service bindings built on `pathwright-template`:
//! - Endpoint declarations (name, method, path template under a base path)
//! - Service configuration loaded from TOML
//! - A [`Transport`] seam for whatever HTTP stack actually sends requests
//!
//! A call resolves and encodes its path before anything is dispatched, so a
//! missing parameter never reaches the transport.
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use http::{HeaderMap, Method, StatusCode};
//! use pathwright_client::{Endpoint, Request, Response, ServiceClient, Transport};
//!
//! struct Noop;
//!
//! #[async_trait]
//! impl Transport for Noop {
//!     async fn send(&self, _request: Request) -> anyhow::Result<Response> {
//!         Ok(Response::new(StatusCode::OK))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "noop"
//!     }
//! }
//!
//! # async fn run() -> Result<(), pathwright_client::ClientError> {
//! let client = ServiceClient::new("files", Noop)
//!     .with_endpoint(Endpoint::new("get_file", Method::GET, "/", "files/{path:.*}")?);
//!
//! client
//!     .call("get_file", &[("path", "docs/readme.md")], HeaderMap::new(), Vec::new())
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
mod endpoint;
mod error;
pub mod transport;

pub use client::ServiceClient;
pub use config::{ClientConfig, EndpointConfig, ServiceConfig};
pub use endpoint::Endpoint;
pub use error::{ClientError, Result};
pub use transport::{Request, Response, Transport};

pub use pathwright_template::{ParameterKind, ParameterSource, PathTemplate, TemplateError};
