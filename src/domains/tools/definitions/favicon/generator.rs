//! Favicon generator link tool.
//!
//! Points the caller at the Favicon.so generator page. Pure templating, no
//! network access and no failure path.

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

const GENERATOR_DESCRIPTION: &str = "Favicon Generator - Create custom favicons from text or SVG icons. Choose 1-2 characters, shape, font, and colors. Download all sizes (favicon.ico, apple-touch-icon, android-chrome, etc.) and HTML link tags.";

/// What the generator page offers.
pub const GENERATOR_FEATURES: [&str; 9] = [
    "Text to favicon (letters, emoji)",
    "SVG icon to favicon",
    "Multiple shapes (square, circle, rounded)",
    "Custom fonts (Google Fonts)",
    "Custom colors (text and background)",
    "Transparent background support",
    "All standard favicon sizes generated",
    "ZIP download with all assets",
    "HTML link tags for easy integration",
];

/// Parameters for the generator link tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GeneratorUrlParams {
    #[serde(default)]
    #[schemars(
        description = "Optional locale code for the generator page (e.g. 'en', 'zh', 'ja'). Defaults to 'en'."
    )]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratorUrlResult {
    pub url: String,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// Generator link tool.
#[derive(Debug, Clone)]
pub struct GeneratorUrlTool;

impl GeneratorUrlTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_favicon_generator_url";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the URL to the Favicon.so favicon generator. Use this when the user wants to create a custom favicon from text or SVG icons. The generator allows choosing characters, shapes, fonts, and colors to create favicon packages.";

    pub fn build(params: &GeneratorUrlParams, endpoints: &FaviconEndpoints) -> GeneratorUrlResult {
        GeneratorUrlResult {
            url: endpoints.generator_url(params.locale.as_deref()),
            description: GENERATOR_DESCRIPTION,
            features: &GENERATOR_FEATURES,
        }
    }

    pub fn execute(params: &GeneratorUrlParams, endpoints: &FaviconEndpoints) -> CallToolResult {
        let result = Self::build(params, endpoints);
        info!("Generator URL: {}", result.url);
        json_result(&result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GeneratorUrlParams>(),
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
                let params: GeneratorUrlParams = parse_arguments(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &endpoints))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::test_support::result_json;
    use super::*;

    fn endpoints() -> FaviconEndpoints {
        FaviconEndpoints::new("https://favicon.so")
    }

    fn params(locale: Option<&str>) -> GeneratorUrlParams {
        GeneratorUrlParams {
            locale: locale.map(String::from),
        }
    }

    #[test]
    fn test_default_locale() {
        let result = GeneratorUrlTool::build(&params(None), &endpoints());
        assert!(result.url.ends_with("/en/generator"));

        let result = GeneratorUrlTool::build(&params(Some("")), &endpoints());
        assert_eq!(result.url, "https://favicon.so/en/generator");
    }

    #[test]
    fn test_explicit_locale() {
        let result = GeneratorUrlTool::build(&params(Some("zh")), &endpoints());
        assert_eq!(result.url, "https://favicon.so/zh/generator");
    }

    #[test]
    fn test_execute_payload() {
        let result = GeneratorUrlTool::execute(&params(Some("ja")), &endpoints());
        assert_eq!(result.is_error, Some(false));

        let json = result_json(&result);
        assert_eq!(json["url"], "https://favicon.so/ja/generator");
        assert!(json["description"].as_str().unwrap().starts_with("Favicon Generator"));

        let features = json["features"].as_array().unwrap();
        assert_eq!(features.len(), GENERATOR_FEATURES.len());
        assert_eq!(features[0], "Text to favicon (letters, emoji)");
    }

    #[test]
    fn test_params_accept_empty_object() {
        let params: GeneratorUrlParams = serde_json::from_str("{}").unwrap();
        assert!(params.locale.is_none());
    }
}
