//! Favicon search link tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::common::{json_result, parse_arguments};
use super::endpoints::FaviconEndpoints;

const SEARCH_DESCRIPTION: &str = "Favicon Search - Search and browse favicons by domain. Preview favicons at different sizes and download them.";

/// Parameters for the search link tool. Both fields are optional and any
/// query string is accepted.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchFaviconsParams {
    #[serde(default)]
    #[schemars(description = "Optional search query (domain name)")]
    pub query: Option<String>,

    #[serde(default)]
    #[schemars(description = "Optional locale code (e.g. 'en', 'zh'). Defaults to 'en'.")]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchUrlResult {
    pub url: String,
    pub description: &'static str,
}

/// Search link tool.
#[derive(Debug, Clone)]
pub struct SearchFaviconsTool;

impl SearchFaviconsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_favicons";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the URL to search and browse favicons on Favicon.so. Useful when the user wants to explore favicons from popular websites.";

    pub fn build(params: &SearchFaviconsParams, endpoints: &FaviconEndpoints) -> SearchUrlResult {
        SearchUrlResult {
            url: endpoints.search_url(params.query.as_deref(), params.locale.as_deref()),
            description: SEARCH_DESCRIPTION,
        }
    }

    pub fn execute(params: &SearchFaviconsParams, endpoints: &FaviconEndpoints) -> CallToolResult {
        let result = Self::build(params, endpoints);
        info!("Search URL: {}", result.url);
        json_result(&result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchFaviconsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(endpoints: FaviconEndpoints) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let endpoints = endpoints.clone();
            async move {
                let params: SearchFaviconsParams = parse_arguments(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &endpoints))
            }
            .boxed()
        })
    }
}
