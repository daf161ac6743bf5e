//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults. It is loaded once at
//! startup and shared read-only with every tool.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use url::Url;

/// Production host of the Favicon.so service.
pub const DEFAULT_FAVICON_API_BASE: &str = "https://favicon.so";

/// Identification header sent with every outbound API request.
pub const DEFAULT_USER_AGENT: &str = "favicon-mcp-server/1.0";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Remote favicon API configuration.
    pub favicon: FaviconApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the remote Favicon.so API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaviconApiConfig {
    /// Base URL every endpoint is built from, without trailing slash.
    pub base_url: String,

    /// Value of the `User-Agent` header on outbound requests.
    pub user_agent: String,
}

impl Default for FaviconApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FAVICON_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FaviconApiConfig {
    /// Create a config pointing at the given base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "favicon-so".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            favicon: FaviconApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// `FAVICON_API_BASE` overrides the API host. Server settings use the
    /// `MCP_` prefix: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_LOG_TIMESTAMPS`,
    /// `MCP_TRANSPORT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("FAVICON_API_BASE") {
            if !base_url.trim().is_empty() {
                config.favicon.base_url = base_url.trim().trim_end_matches('/').to_string();
            }
        }

        config
    }

    /// Check that the configuration is usable before the server starts.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.favicon.base_url).map_err(|e| {
            Error::config(format!(
                "invalid favicon API base URL '{}': {}",
                self.favicon.base_url, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "favicon API base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(())
    }
}
