//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only wires them
//! to the shared favicon context.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{FaviconContext, GeneratorUrlTool, GetFaviconTool, SearchFaviconsTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    build_tool_router_with_context(FaviconContext::from_config(&config))
}

/// Build the tool router over an existing favicon context.
pub fn build_tool_router_with_context<S>(context: FaviconContext) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GeneratorUrlTool::create_route(context.endpoints().clone()))
        .with_route(SearchFaviconsTool::create_route(context.endpoints().clone()))
        .with_route(GetFaviconTool::create_route(context))
}
