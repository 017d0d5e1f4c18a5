//! Single-source fetch and validation

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use oracle_core::{FetchError, FetchOutcome, FetchResult, SourceDescriptor};
use rust_decimal::Decimal;

use crate::transport::HttpTransport;

/// Fetch one source and classify the result.
///
/// Never fails: every error becomes a [`FetchOutcome::Failure`]. When the
/// timeout expires the in-flight request future is dropped, which aborts it.
pub async fn fetch_one<T>(transport: &T, source: &SourceDescriptor, timeout: Duration) -> FetchOutcome
where
    T: HttpTransport + ?Sized,
{
    match fetch_price(transport, source, timeout).await {
        Ok(price) => {
            debug!("{} returned {}", source.name(), price);
            FetchOutcome::success(source.name(), price)
        }
        Err(e) => {
            warn!("{} failed: {}", source.name(), e);
            FetchOutcome::failure(source.name(), e)
        }
    }
}

async fn fetch_price<T>(transport: &T, source: &SourceDescriptor, timeout: Duration) -> FetchResult<Decimal>
where
    T: HttpTransport + ?Sized,
{
    let response = tokio::time::timeout(timeout, transport.get(source.endpoint()))
        .await
        .map_err(|_| FetchError::Timeout)??;

    if !response.is_success() {
        return Err(FetchError::Http {
            status: response.status,
            body: response.body,
        });
    }

    let body: Value =
        serde_json::from_str(&response.body).map_err(|e| FetchError::Parse(e.to_string()))?;

    source.extract_price(&body)
}
