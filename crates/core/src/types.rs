//! Core type definitions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

use crate::errors::{FetchError, FetchResult};
use crate::prices::parse_price;

/// Rule for locating the price inside a decoded response body.
///
/// Extraction is pure: the same body always yields the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PriceExtractor {
    /// RFC 6901 JSON pointer, e.g. `/data/rates/USD`
    Pointer(Cow<'static, str>),
}

impl PriceExtractor {
    pub const fn pointer(path: &'static str) -> Self {
        PriceExtractor::Pointer(Cow::Borrowed(path))
    }

    pub fn owned_pointer(path: impl Into<String>) -> Self {
        PriceExtractor::Pointer(Cow::Owned(path.into()))
    }

    /// Locate the raw price value, if present
    pub fn extract<'a>(&self, body: &'a Value) -> Option<&'a Value> {
        match self {
            PriceExtractor::Pointer(path) => body.pointer(path),
        }
    }
}

impl fmt::Display for PriceExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceExtractor::Pointer(path) => write!(f, "pointer({})", path),
        }
    }
}

/// One price source: name, endpoint and extraction rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub name: Cow<'static, str>,
    pub endpoint: Cow<'static, str>,
    pub extractor: PriceExtractor,
}

impl SourceDescriptor {
    /// Compile-time descriptor for the built-in registry
    pub const fn builtin(
        name: &'static str,
        endpoint: &'static str,
        extractor: PriceExtractor,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            endpoint: Cow::Borrowed(endpoint),
            extractor,
        }
    }

    pub fn new(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        extractor: PriceExtractor,
    ) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            endpoint: Cow::Owned(endpoint.into()),
            extractor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Extract and validate the price from a decoded body
    pub fn extract_price(&self, body: &Value) -> FetchResult<Decimal> {
        self.extractor
            .extract(body)
            .ok_or(FetchError::InvalidPrice)
            .and_then(parse_price)
    }
}

/// Result of attempting one source
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success { name: String, price: Decimal },
    Failure { name: String, error: FetchError },
}

impl FetchOutcome {
    pub fn success(name: impl Into<String>, price: Decimal) -> Self {
        FetchOutcome::Success { name: name.into(), price }
    }

    pub fn failure(name: impl Into<String>, error: FetchError) -> Self {
        FetchOutcome::Failure { name: name.into(), error }
    }

    pub fn name(&self) -> &str {
        match self {
            FetchOutcome::Success { name, .. } | FetchOutcome::Failure { name, .. } => name,
        }
    }

    pub fn price(&self) -> Option<Decimal> {
        match self {
            FetchOutcome::Success { price, .. } => Some(*price),
            FetchOutcome::Failure { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }

    /// Failure reason, `None` on success
    pub fn reason(&self) -> Option<String> {
        match self {
            FetchOutcome::Success { .. } => None,
            FetchOutcome::Failure { error, .. } => Some(error.to_string()),
        }
    }
}

/// A successful source price as listed in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub name: String,
    pub price: Decimal,
}

/// A dropped source and why it was dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFailure {
    pub name: String,
    pub reason: String,
}
