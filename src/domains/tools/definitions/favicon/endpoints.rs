//! URL templates over the configured Favicon.so base URL.
//!
//! Every function here is pure: the same base and inputs always produce the
//! same URL. Nothing is fetched.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::core::config::FaviconApiConfig;

use super::domain::NormalizedDomain;

/// Characters left as-is by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Locale used when none (or an empty one) is supplied.
pub const DEFAULT_LOCALE: &str = "en";

/// Resolve an optional locale to the one used in page URLs.
pub fn resolve_locale(locale: Option<&str>) -> &str {
    locale.filter(|l| !l.is_empty()).unwrap_or(DEFAULT_LOCALE)
}

/// Builder for all Favicon.so URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaviconEndpoints {
    base_url: String,
}

impl FaviconEndpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &FaviconApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// JSON (non-redirecting) form of the favicon endpoint.
    pub fn api_url(&self, domain: &NormalizedDomain) -> String {
        format!("{}&raw=true", self.embed_url(domain))
    }

    /// Image form of the favicon endpoint, usable directly as `<img src>`.
    pub fn embed_url(&self, domain: &NormalizedDomain) -> String {
        format!(
            "{}/api/favicon?url={}",
            self.base_url,
            encode_component(domain.as_str())
        )
    }

    /// Human-facing domain page.
    pub fn short_url(&self, domain: &NormalizedDomain) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            DEFAULT_LOCALE,
            encode_component(domain.as_str())
        )
    }

    pub fn generator_url(&self, locale: Option<&str>) -> String {
        format!("{}/{}/generator", self.base_url, resolve_locale(locale))
    }

    /// Search page, with `?q=` only for a non-empty query.
    pub fn search_url(&self, query: Option<&str>, locale: Option<&str>) -> String {
        let mut url = format!("{}/{}/search", self.base_url, resolve_locale(locale));
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push_str("?q=");
            url.push_str(&encode_component(query));
        }
        url
    }
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
