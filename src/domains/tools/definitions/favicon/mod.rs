//! Favicon.so tools module.
//!
//! - `get_favicon`: look up a domain's favicon through the Favicon.so API
//! - `generator`: link to the favicon generator page
//! - `search`: link to the favicon search page
//!
//! `domain`, `endpoints` and `api` hold the normalization rules, URL
//! templates and HTTP client the tools share.

pub mod api;
pub mod common;
pub mod domain;
pub mod endpoints;
pub mod generator;
pub mod get_favicon;
pub mod search;

pub use api::{FaviconApi, FaviconApiResponse, FetchError, HttpFaviconApi};
pub use common::FaviconContext;
pub use domain::{DomainError, NormalizedDomain, normalize_and_validate};
pub use endpoints::FaviconEndpoints;
pub use generator::{GeneratorUrlParams, GeneratorUrlTool};
pub use get_favicon::{FaviconResult, GetFaviconParams, GetFaviconTool, LookupError};
pub use search::{SearchFaviconsParams, SearchFaviconsTool};
