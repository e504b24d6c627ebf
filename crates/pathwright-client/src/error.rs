// File: src/error.rs
// Purpose: Errors surfaced to code calling a service binding

use pathwright_template::TemplateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Malformed endpoint template or missing path parameter
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("unknown endpoint `{0}`")]
    UnknownEndpoint(String),

    #[error("endpoint `{0}` is declared more than once")]
    DuplicateEndpoint(String),

    #[error("endpoint `{endpoint}` has invalid HTTP method `{method}`")]
    InvalidMethod { endpoint: String, method: String },

    /// The request was dispatched and the transport failed
    #[error("transport `{transport}` failed")]
    Transport {
        transport: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ClientError {
    /// Whether the request reached the transport
    pub fn was_dispatched(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, Self::Template(err) if err.is_missing_parameter())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
