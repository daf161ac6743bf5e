//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool calls are routed through the rmcp `ToolRouter` built in
//! `domains/tools/router.rs`; adding a tool does not touch this file.

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{
    build_tool_router, build_tool_router_with_context, definitions::FaviconContext,
};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        Self {
            tool_router: build_tool_router::<Self>(config.clone()),
            config,
        }
    }

    /// Create a server whose tools use the given favicon context.
    pub fn with_context(config: Config, context: FaviconContext) -> Self {
        Self {
            tool_router: build_tool_router_with_context::<Self>(context),
            config: Arc::new(config),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Names of the tools this server exposes.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Favicon.so tools: look up the favicon of any domain, or get links to the \
                 favicon generator and favicon search pages."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_identity() {
        let server = McpServer::new(Config::default());
        assert_eq!(server.name(), "favicon-so");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(server.config().favicon.base_url, "https://favicon.so");
    }

    #[test]
    fn test_server_info() {
        let server = McpServer::new(Config::default());
        let info = server.get_info();
        assert_eq!(info.server_info.name, "favicon-so");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
    }

    #[test]
    fn test_server_with_context() {
        use crate::domains::tools::definitions::favicon::{FaviconEndpoints, HttpFaviconApi};
        use crate::core::config::FaviconApiConfig;

        let favicon = FaviconApiConfig::with_base_url("http://127.0.0.1:9");
        let context = FaviconContext::new(
            Arc::new(HttpFaviconApi::new(&favicon)),
            FaviconEndpoints::from_config(&favicon),
        );
        let server = McpServer::with_context(Config::default(), context);
        assert_eq!(server.tool_names().len(), 3);
    }

    #[test]
    fn test_server_exposes_three_tools() {
        let mut names = McpServer::new(Config::default()).tool_names();
        names.sort();
        assert_eq!(
            names,
            vec!["get_favicon", "get_favicon_generator_url", "search_favicons"]
        );
    }
}
