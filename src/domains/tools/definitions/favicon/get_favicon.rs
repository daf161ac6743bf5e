//! Favicon lookup tool.
//!
//! Normalizes the requested domain, asks the Favicon.so API for the icon
//! metadata and reshapes the answer into a stable output contract.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument, warn};

use super::api::{FaviconApi, FaviconApiResponse, FetchError};
use super::common::{FaviconContext, json_error_result, json_result, parse_arguments};
use super::domain::{DomainError, NormalizedDomain};
use super::endpoints::FaviconEndpoints;

/// Reported when the API does not say which image format it found.
pub const UNKNOWN_FORMAT: &str = "unknown";

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the favicon lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFaviconParams {
    /// Domain to look up.
    #[schemars(
        description = "The domain to fetch the favicon for (e.g. 'google.com', 'github.com')"
    )]
    pub domain: String,
}

// ============================================================================
// Structured Output
// ============================================================================

/// Successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaviconResult {
    pub domain: String,
    /// Serialized as `null` when the API returned no icon URL.
    pub favicon_url: Option<String>,
    pub format: String,
    pub is_default: bool,
    pub embed_url: String,
    pub short_url: String,
}

impl FaviconResult {
    /// Apply the defaulting rules to a raw API answer.
    ///
    /// `embed_url` and `short_url` depend only on the domain and base URL.
    pub fn from_response(
        domain: &NormalizedDomain,
        response: FaviconApiResponse,
        endpoints: &FaviconEndpoints,
    ) -> Self {
        Self {
            domain: domain.to_string(),
            favicon_url: response.url.filter(|url| !url.is_empty()),
            format: response
                .format
                .filter(|format| !format.is_empty())
                .unwrap_or_else(|| UNKNOWN_FORMAT.to_string()),
            is_default: response.is_default.unwrap_or(false),
            embed_url: endpoints.embed_url(domain),
            short_url: endpoints.short_url(domain),
        }
    }
}

/// Why a lookup produced no [`FaviconResult`].
#[derive(Debug, Error)]
pub enum LookupError {
    /// The input did not survive normalization. No request was made.
    #[error(transparent)]
    InvalidDomain(#[from] DomainError),

    /// The API call failed at transport, HTTP status or decoding level.
    #[error("Failed to fetch favicon for {domain}: {source}")]
    Fetch {
        domain: String,
        #[source]
        source: FetchError,
    },
}

/// JSON shape of a failed lookup: `{error, message?, domain?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupErrorPayload {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl From<&LookupError> for LookupErrorPayload {
    fn from(err: &LookupError) -> Self {
        match err {
            LookupError::InvalidDomain(e) => Self {
                error: "Invalid domain format",
                message: None,
                domain: Some(e.domain().to_string()),
            },
            LookupError::Fetch { domain, source } => Self {
                error: "Failed to fetch favicon",
                message: Some(source.to_string()),
                domain: Some(domain.clone()),
            },
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Favicon lookup tool.
#[derive(Debug, Clone)]
pub struct GetFaviconTool;

impl GetFaviconTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_favicon";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the favicon for any website domain. Returns the favicon URL, format, and an embed URL that can be used directly in HTML img tags or link rel='icon'.";

    /// Normalize, validate and fetch.
    ///
    /// Makes zero requests for invalid input and exactly one otherwise.
    pub async fn lookup(
        api: &dyn FaviconApi,
        endpoints: &FaviconEndpoints,
        raw_domain: &str,
    ) -> Result<FaviconResult, LookupError> {
        let domain = NormalizedDomain::parse(raw_domain)?;

        let response = api
            .fetch(&domain)
            .await
            .map_err(|source| LookupError::Fetch {
                domain: domain.to_string(),
                source,
            })?;

        Ok(FaviconResult::from_response(&domain, response, endpoints))
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(domain = %params.domain))]
    pub async fn execute(params: &GetFaviconParams, context: &FaviconContext) -> CallToolResult {
        info!("Favicon lookup requested");

        match Self::lookup(context.api(), context.endpoints(), &params.domain).await {
            Ok(result) => {
                info!(
                    "Found favicon for {} (format: {}, default: {})",
                    result.domain, result.format, result.is_default
                );
                json_result(&result)
            }
            Err(e) => {
                warn!("{}", e);
                json_error_result(&LookupErrorPayload::from(&e))
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetFaviconParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(context: FaviconContext) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let context = context.clone();
            async move {
                let params: GetFaviconParams = parse_arguments(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &context).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::test_support::result_json;
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const BASE: &str = "https://favicon.so";

    /// Canned API that counts how often it was asked.
    struct FakeApi {
        calls: AtomicUsize,
        reply: fn() -> Result<FaviconApiResponse, FetchError>,
    }

    impl FakeApi {
        fn new(reply: fn() -> Result<FaviconApiResponse, FetchError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                reply,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FaviconApi for FakeApi {
        async fn fetch(
            &self,
            _domain: &NormalizedDomain,
        ) -> Result<FaviconApiResponse, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.reply)()
        }
    }

    fn png_reply() -> Result<FaviconApiResponse, FetchError> {
        Ok(FaviconApiResponse {
            url: Some("https://cdn.example/g.png".to_string()),
            format: Some("png".to_string()),
            is_default: None,
        })
    }

    fn empty_reply() -> Result<FaviconApiResponse, FetchError> {
        Ok(FaviconApiResponse::default())
    }

    fn server_error_reply() -> Result<FaviconApiResponse, FetchError> {
        Err(FetchError::Status(500))
    }

    fn endpoints() -> FaviconEndpoints {
        FaviconEndpoints::new(BASE)
    }

    fn context(api: Arc<FakeApi>) -> FaviconContext {
        FaviconContext::new(api, endpoints())
    }

    #[tokio::test]
    async fn test_lookup_success() {
        let api = FakeApi::new(png_reply);
        let result = GetFaviconTool::lookup(api.as_ref(), &endpoints(), "https://google.com/path?x=1")
            .await
            .unwrap();

        assert_eq!(
            result,
            FaviconResult {
                domain: "google.com".to_string(),
                favicon_url: Some("https://cdn.example/g.png".to_string()),
                format: "png".to_string(),
                is_default: false,
                embed_url: "https://favicon.so/api/favicon?url=google.com".to_string(),
                short_url: "https://favicon.so/en/google.com".to_string(),
            }
        );
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn test_lookup_defaults_for_missing_fields() {
        let api = FakeApi::new(empty_reply);
        let result = GetFaviconTool::lookup(api.as_ref(), &endpoints(), "example.org")
            .await
            .unwrap();

        assert_eq!(result.favicon_url, None);
        assert_eq!(result.format, "unknown");
        assert!(!result.is_default);
        assert_eq!(result.embed_url, "https://favicon.so/api/favicon?url=example.org");
        assert_eq!(result.short_url, "https://favicon.so/en/example.org");
    }

    #[test]
    fn test_empty_strings_treated_as_absent() {
        let domain = NormalizedDomain::parse("example.org").unwrap();
        let response = FaviconApiResponse {
            url: Some(String::new()),
            format: Some(String::new()),
            is_default: Some(true),
        };
        let result = FaviconResult::from_response(&domain, response, &endpoints());
        assert_eq!(result.favicon_url, None);
        assert_eq!(result.format, UNKNOWN_FORMAT);
        assert!(result.is_default);
    }

    #[tokio::test]
    async fn test_invalid_domains_make_no_requests() {
        let api = FakeApi::new(png_reply);
        let long_label = format!("{}.com", "x".repeat(64));

        for input in ["", "   ", "not a domain", "bad_chars!.com", "localhost", long_label.as_str()] {
            let err = GetFaviconTool::lookup(api.as_ref(), &endpoints(), input)
                .await
                .unwrap_err();
            assert!(matches!(err, LookupError::InvalidDomain(_)), "input: {input}");
        }
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_lookup_is_not_cached() {
        let api = FakeApi::new(png_reply);
        for _ in 0..2 {
            GetFaviconTool::lookup(api.as_ref(), &endpoints(), "google.com")
                .await
                .unwrap();
        }
        assert_eq!(api.calls(), 2);
    }

    #[tokio::test]
    async fn test_lookup_fetch_failure() {
        let api = FakeApi::new(server_error_reply);
        let err = GetFaviconTool::lookup(api.as_ref(), &endpoints(), "google.com")
            .await
            .unwrap_err();

        match &err {
            LookupError::Fetch { domain, source } => {
                assert_eq!(domain, "google.com");
                assert!(matches!(source, FetchError::Status(500)));
            }
            other => panic!("expected fetch error, got {:?}", other),
        }
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn test_execute_success_payload() {
        let api = FakeApi::new(png_reply);
        let params = GetFaviconParams {
            domain: "google.com".to_string(),
        };
        let result = GetFaviconTool::execute(&params, &context(api)).await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result_json(&result),
            serde_json::json!({
                "domain": "google.com",
                "faviconUrl": "https://cdn.example/g.png",
                "format": "png",
                "isDefault": false,
                "embedUrl": "https://favicon.so/api/favicon?url=google.com",
                "shortUrl": "https://favicon.so/en/google.com"
            })
        );
    }

    #[tokio::test]
    async fn test_execute_null_favicon_url_is_present() {
        let api = FakeApi::new(empty_reply);
        let params = GetFaviconParams {
            domain: "example.org".to_string(),
        };
        let json = result_json(&GetFaviconTool::execute(&params, &context(api)).await);

        assert!(json.as_object().unwrap().contains_key("faviconUrl"));
        assert!(json["faviconUrl"].is_null());
    }

    #[tokio::test]
    async fn test_execute_invalid_domain_payload() {
        let api = FakeApi::new(png_reply);
        let params = GetFaviconParams {
            domain: "not a domain".to_string(),
        };
        let result = GetFaviconTool::execute(&params, &context(api.clone())).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_json(&result),
            serde_json::json!({
                "error": "Invalid domain format",
                "domain": "not a domain"
            })
        );
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_execute_fetch_error_payload() {
        let api = FakeApi::new(server_error_reply);
        let params = GetFaviconParams {
            domain: "google.com".to_string(),
        };
        let result = GetFaviconTool::execute(&params, &context(api)).await;

        assert_eq!(result.is_error, Some(true));
        let json = result_json(&result);
        assert_eq!(json["error"], "Failed to fetch favicon");
        assert_eq!(json["domain"], "google.com");
        assert_eq!(json["message"], "API returned 500");
    }

    #[test]
    fn test_params_require_domain() {
        let result: Result<GetFaviconParams, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
