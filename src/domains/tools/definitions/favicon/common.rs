//! Shared plumbing for the Favicon.so tools.
//!
//! Every tool answers with a single text block holding pretty-printed JSON.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::error;

use crate::core::config::Config;

use super::api::{FaviconApi, HttpFaviconApi};
use super::endpoints::FaviconEndpoints;

/// Read-only state the favicon tools share: the API client and the URL
/// templates for the configured base.
#[derive(Clone)]
pub struct FaviconContext {
    api: Arc<dyn FaviconApi>,
    endpoints: FaviconEndpoints,
}

impl FaviconContext {
    pub fn new(api: Arc<dyn FaviconApi>, endpoints: FaviconEndpoints) -> Self {
        Self { api, endpoints }
    }

    /// Build the production context (reqwest client) from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(HttpFaviconApi::new(&config.favicon)),
            FaviconEndpoints::from_config(&config.favicon),
        )
    }

    pub fn api(&self) -> &dyn FaviconApi {
        self.api.as_ref()
    }

    pub fn endpoints(&self) -> &FaviconEndpoints {
        &self.endpoints
    }
}

/// Serialize `value` as 2-space indented JSON into a single text block.
pub fn json_result<T: Serialize>(value: &T) -> CallToolResult {
    to_pretty_content(value).map_or_else(|e| e, |content| CallToolResult::success(vec![content]))
}

/// Like [`json_result`], with the result flagged as a tool error.
pub fn json_error_result<T: Serialize>(value: &T) -> CallToolResult {
    to_pretty_content(value).map_or_else(|e| e, |content| CallToolResult::error(vec![content]))
}

fn to_pretty_content<T: Serialize>(value: &T) -> Result<Content, CallToolResult> {
    serde_json::to_string_pretty(value)
        .map(Content::text)
        .map_err(|e| {
            error!("Failed to serialize tool output: {}", e);
            CallToolResult::error(vec![Content::text(format!(
                "Failed to serialize tool output: {}",
                e
            ))])
        })
}

/// Deserialize tool call arguments into a params struct.
///
/// Missing arguments are treated as an empty object so tools whose
/// parameters are all optional accept a bare call.
pub fn parse_arguments<T: DeserializeOwned>(
    arguments: Option<JsonObject>,
) -> Result<T, serde_json::Error> {
    serde_json::from_value(serde_json::Value::Object(arguments.unwrap_or_default()))
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct OptionalParams {
        #[serde(default)]
        locale: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    struct RequiredParams {
        #[allow(dead_code)]
        domain: String,
    }

    #[test]
    fn test_json_result_is_pretty_printed() {
        let result = json_result(&serde_json::json!({"url": "https://favicon.so"}));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_text(&result), "{\n  \"url\": \"https://favicon.so\"\n}");
    }

    #[test]
    fn test_json_error_result_flags_error() {
        let result = json_error_result(&serde_json::json!({"error": "boom"}));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_json(&result)["error"], "boom");
    }

    #[test]
    fn test_parse_arguments_missing_is_empty_object() {
        let params: OptionalParams = parse_arguments(None).unwrap();
        assert!(params.locale.is_none());
    }

    #[test]
    fn test_parse_arguments_missing_required_field() {
        let result: Result<RequiredParams, _> = parse_arguments(Some(JsonObject::new()));
        assert!(result.is_err());
    }
}
