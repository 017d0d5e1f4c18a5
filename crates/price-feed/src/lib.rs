//! Multi-source BTC/USD price feed
//!
//! Features:
//! - Concurrent one-shot queries to several public price APIs
//! - Per-request timeout that cancels only the slow source
//! - Partial-failure tolerance with per-source failure reasons
//! - Decimal aggregation: average, min, max, spread

pub mod aggregator;
pub mod fetcher;
pub mod sources;
pub mod transport;

#[cfg(test)]
mod testing;

pub use aggregator::{fetch_btc_price, PriceAggregator};
pub use fetcher::fetch_one;
pub use sources::{SourceRegistry, DEFAULT_SOURCES};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
