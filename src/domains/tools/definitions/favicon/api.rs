//! Client for the remote Favicon.so JSON API.

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::core::config::FaviconApiConfig;

use super::domain::NormalizedDomain;
use super::endpoints::FaviconEndpoints;

/// Body of `GET /api/favicon?raw=true`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaviconApiResponse {
    pub url: Option<String>,
    pub format: Option<String>,
    pub is_default: Option<bool>,
}

impl FaviconApiResponse {
    /// Pick the known fields out of a decoded body.
    ///
    /// A field that is missing, `null` or of the wrong type reads as absent.
    /// Returns `None` when the body is not a JSON object.
    pub fn from_json(body: &Value) -> Option<Self> {
        let fields = body.as_object()?;
        let text = |key: &str| fields.get(key).and_then(Value::as_str).map(String::from);

        Some(Self {
            url: text("url"),
            format: text("format"),
            is_default: fields.get("isDefault").and_then(Value::as_bool),
        })
    }
}

/// Failure talking to the remote API.
///
/// Transport errors, non-2xx statuses and undecodable bodies all land here.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, protocol or body decoding failure.
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("API returned {0}")]
    Status(u16),

    /// The body was valid JSON but not an object.
    #[error("API returned an unexpected body: {0}")]
    UnexpectedBody(String),
}

/// The remote favicon lookup, abstracted for testing.
#[async_trait]
pub trait FaviconApi: Send + Sync {
    /// Fetch favicon metadata for a validated domain. Exactly one attempt.
    async fn fetch(&self, domain: &NormalizedDomain) -> Result<FaviconApiResponse, FetchError>;
}

/// [`FaviconApi`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFaviconApi {
    client: reqwest::Client,
    endpoints: FaviconEndpoints,
    user_agent: String,
}

impl HttpFaviconApi {
    pub fn new(config: &FaviconApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &FaviconApiConfig) -> Self {
        Self {
            client,
            endpoints: FaviconEndpoints::from_config(config),
            user_agent: config.user_agent.clone(),
        }
    }
}

#[async_trait]
impl FaviconApi for HttpFaviconApi {
    async fn fetch(&self, domain: &NormalizedDomain) -> Result<FaviconApiResponse, FetchError> {
        let url = self.endpoints.api_url(domain);
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.json::<Value>().await?;
        FaviconApiResponse::from_json(&body)
            .ok_or_else(|| FetchError::UnexpectedBody(json_kind(&body).to_string()))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
