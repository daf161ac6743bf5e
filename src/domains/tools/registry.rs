//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Direct dispatch of tool calls by name, outside the rmcp router
//! - Tool metadata for listing

use std::sync::Arc;
use tracing::warn;

use rmcp::model::{CallToolResult, JsonObject, Tool};

use crate::core::config::Config;

use super::ToolError;
use super::definitions::favicon::common::parse_arguments;
use super::definitions::{FaviconContext, GeneratorUrlTool, GetFaviconTool, SearchFaviconsTool};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    context: FaviconContext,
}

impl ToolRegistry {
    /// Create a new tool registry talking to the configured API.
    pub fn new(config: Arc<Config>) -> Self {
        Self::with_context(FaviconContext::from_config(&config))
    }

    /// Create a registry over an existing favicon context.
    pub fn with_context(context: FaviconContext) -> Self {
        Self { context }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetFaviconTool::NAME,
            GeneratorUrlTool::NAME,
            SearchFaviconsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetFaviconTool::to_tool(),
            GeneratorUrlTool::to_tool(),
            SearchFaviconsTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// `arguments` must be a JSON object or `null`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        let arguments = into_arguments(arguments)?;

        match name {
            GetFaviconTool::NAME => {
                let params = parse_arguments(arguments)?;
                Ok(GetFaviconTool::execute(&params, &self.context).await)
            }
            GeneratorUrlTool::NAME => {
                let params = parse_arguments(arguments)?;
                Ok(GeneratorUrlTool::execute(&params, self.context.endpoints()))
            }
            SearchFaviconsTool::NAME => {
                let params = parse_arguments(arguments)?;
                Ok(SearchFaviconsTool::execute(&params, self.context.endpoints()))
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

fn into_arguments(value: serde_json::Value) -> Result<Option<JsonObject>, ToolError> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(map) => Ok(Some(map)),
        other => Err(ToolError::invalid_arguments(format!(
            "arguments must be a JSON object, got {}",
            other
        ))),
    }
}
