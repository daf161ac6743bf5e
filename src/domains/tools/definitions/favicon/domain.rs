//! Domain normalization and validation.
//!
//! User input is cleaned into a bare hostname (no scheme, path or query)
//! and then checked against a DNS-style hostname grammar. Invalid input is
//! an ordinary `Err` value, never a panic.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Dot-separated labels of letters, digits and interior hyphens (at most 63
/// characters each), ending in an alphabetic TLD of two or more letters.
static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$").unwrap()
});

const SCHEME_PREFIXES: [&str; 2] = ["https://", "http://"];

/// Validation failure for a cleaned domain string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The cleaned input does not match the hostname grammar.
    #[error("Invalid domain format: '{domain}'")]
    InvalidFormat { domain: String },
}

impl DomainError {
    /// The cleaned (but invalid) domain string.
    pub fn domain(&self) -> &str {
        match self {
            Self::InvalidFormat { domain } => domain,
        }
    }
}

/// A hostname that passed validation.
///
/// Casing is preserved as supplied; only the grammar check is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedDomain(String);

impl NormalizedDomain {
    /// Clean and validate raw user input.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let cleaned = clean_domain(raw);

        if DOMAIN_REGEX.is_match(cleaned) {
            Ok(Self(cleaned.to_string()))
        } else {
            Err(DomainError::InvalidFormat {
                domain: cleaned.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shorthand for [`NormalizedDomain::parse`].
pub fn normalize_and_validate(raw: &str) -> Result<NormalizedDomain, DomainError> {
    NormalizedDomain::parse(raw)
}

/// Strip surrounding whitespace, one leading `http://` or `https://`, and
/// everything from the first `/` and then the first `?` onward.
pub fn clean_domain(raw: &str) -> &str {
    let host = strip_scheme(raw.trim());
    let host = host.split_once('/').map_or(host, |(head, _)| head);
    host.split_once('?').map_or(host, |(head, _)| head)
}

fn strip_scheme(input: &str) -> &str {
    for prefix in SCHEME_PREFIXES {
        let matches = input
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if matches {
            return &input[prefix.len()..];
        }
    }
    input
}
