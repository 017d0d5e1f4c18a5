//! Configuration types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP fetch configuration shared by every source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    pub request_timeout_ms: u64,
    pub user_agent: String,
    /// Decimal places kept in `spread_percent`
    pub spread_precision: u32,
}

impl FetchConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 10_000,
            user_agent: format!("btc-price-oracle/{}", env!("CARGO_PKG_VERSION")),
            spread_precision: 2,
        }
    }
}
