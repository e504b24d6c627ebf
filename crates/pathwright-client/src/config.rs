// File: src/config.rs
// Purpose: Service binding declarations parsed from a TOML file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Service binding configuration
///
/// ```toml
/// [service]
/// name = "path-params"
/// base_path = "/"
///
/// [[endpoints]]
/// name = "complex_path"
/// method = "GET"
/// path = "complex/{path:.*}"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Prefix joined onto every endpoint path (default: "/")
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub name: String,

    /// HTTP method name (default: "GET")
    #[serde(default = "default_method")]
    pub method: String,

    /// Path template relative to the service base path
    pub path: String,
}

// Default values
fn default_service_name() -> String {
    "service".to_string()
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_method() -> String {
    "GET".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            base_path: default_base_path(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration. Templates are
    /// not parsed here; that happens when a client is built from the config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No client config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read client config: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse client config: {:?}", path))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ClientConfig = toml::from_str(content)?;
        Ok(config)
    }
}
