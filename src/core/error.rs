//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for startup and dispatch
//! failures. Favicon lookup failures are not represented here: they are
//! reported to the client as tool output.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Transport setup or serving failure.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportError;
    use crate::domains::tools::ToolError;

    #[test]
    fn test_from_tool_error() {
        let err: Error = ToolError::not_found("fetch_logo").into();
        assert_eq!(err.to_string(), "Tool error: Tool not found: fetch_logo");
    }

    #[test]
    fn test_from_transport_error() {
        let err: Error = TransportError::init("stdin closed").into();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn test_config_error_message() {
        let err = Error::config("missing base URL");
        assert_eq!(err.to_string(), "Configuration error: missing base URL");
    }
}
