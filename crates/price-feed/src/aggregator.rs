//! Price aggregator - fans out to every source and reduces the results

use futures::future::join_all;
use tracing::{error, info};

use oracle_core::{AggregationReport, FetchConfig, FetchOutcome, OracleError, OracleResult};

use crate::fetcher::fetch_one;
use crate::sources::SourceRegistry;
use crate::transport::{HttpTransport, ReqwestTransport};

/// One-shot multi-source price aggregator
pub struct PriceAggregator<T = ReqwestTransport> {
    registry: SourceRegistry,
    transport: T,
    config: FetchConfig,
}

impl PriceAggregator<ReqwestTransport> {
    /// Built-in sources over a real HTTP client
    pub fn new(config: FetchConfig) -> OracleResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(SourceRegistry::builtin(), transport, config))
    }
}

impl<T: HttpTransport> PriceAggregator<T> {
    pub fn with_transport(registry: SourceRegistry, transport: T, config: FetchConfig) -> Self {
        Self {
            registry,
            transport,
            config,
        }
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Query every source concurrently and wait for all of them.
    ///
    /// Outcomes come back in registry order regardless of completion order.
    pub async fn fetch_all(&self) -> Vec<FetchOutcome> {
        let timeout = self.config.request_timeout();

        join_all(
            self.registry
                .iter()
                .map(|source| fetch_one(&self.transport, source, timeout)),
        )
        .await
    }

    /// Fetch all sources and build the report
    pub async fn aggregate(&self) -> OracleResult<AggregationReport> {
        info!("Fetching BTC/USD from {} sources", self.registry.len());

        let outcomes = self.fetch_all().await;
        let report = AggregationReport::from_outcomes(
            outcomes,
            self.registry.len(),
            self.config.spread_precision,
        );

        match &report {
            Ok(r) => info!(
                "BTC/USD average {} from {}/{} sources (spread {}%)",
                r.average.round_dp(2),
                r.sources,
                r.total_sources,
                r.spread_percent
            ),
            Err(e) => error!("{}", e),
        }

        report
    }

    /// Average price as a string
    pub async fn average(&self) -> OracleResult<String> {
        let report = self.aggregate().await?;
        Ok(report.average.normalize().to_string())
    }

    /// Price reported by one named source this round, as a string.
    ///
    /// Fails with [`OracleError::SourceNotFound`] when that source failed or
    /// is unknown, even if other sources succeeded.
    pub async fn source_price(&self, name: &str) -> OracleResult<String> {
        let report = self.aggregate().await?;
        report
            .price_of(name)
            .map(|price| price.normalize().to_string())
            .ok_or_else(|| OracleError::SourceNotFound(name.to_string()))
    }
}

/// Aggregate the built-in sources with default settings
pub async fn fetch_btc_price() -> OracleResult<AggregationReport> {
    PriceAggregator::new(FetchConfig::default())?.aggregate().await
}
