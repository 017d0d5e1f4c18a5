//! Error types

use thiserror::Error;

/// Per-source fetch errors.
///
/// These never escape a single fetch: the fetcher downgrades them into a
/// [`FetchOutcome::Failure`](crate::FetchOutcome::Failure) and the display
/// string becomes the outcome's reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request timeout")]
    Timeout,

    #[error("{0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to parse JSON: {0}")]
    Parse(String),

    #[error("Invalid price data")]
    InvalidPrice,
}

/// Errors that surface out of an aggregation call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("All {total} price sources unavailable")]
    AllSourcesFailed {
        total: usize,
        /// `(source name, reason)` for every source, in registry order
        failures: Vec<(String, String)>,
    },

    #[error("Source not found: {0}")]
    SourceNotFound(String),

    #[error("Invalid source registry: {0}")]
    InvalidRegistry(String),

    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("Price sum overflowed")]
    Overflow,
}

impl OracleError {
    pub fn is_all_sources_failed(&self) -> bool {
        matches!(self, OracleError::AllSourcesFailed { .. })
    }

    pub fn is_source_not_found(&self) -> bool {
        matches!(self, OracleError::SourceNotFound(_))
    }
}

/// Result type alias
pub type FetchResult<T> = Result<T, FetchError>;
pub type OracleResult<T> = Result<T, OracleError>;
