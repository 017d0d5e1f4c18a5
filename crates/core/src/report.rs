//! Aggregation report and the reduction that builds it

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::{OracleError, OracleResult};
use crate::types::{FetchOutcome, PricePoint, SourceFailure};

/// Summary statistics over the sources that succeeded in one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationReport {
    pub average: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    pub spread: Decimal,
    pub spread_percent: Decimal,
    pub sources: usize,
    pub total_sources: usize,
    /// Successful prices in registry order
    pub prices: Vec<PricePoint>,
    pub failures: Vec<SourceFailure>,
    pub fetched_at: DateTime<Utc>,
}

impl AggregationReport {
    /// Reduce one round of outcomes to a report.
    ///
    /// Outcomes must be in registry order; that order is kept in `prices`.
    /// Fails with [`OracleError::AllSourcesFailed`] when nothing succeeded,
    /// and with [`OracleError::InvalidRegistry`] when there are more outcomes
    /// than `total_sources`.
    pub fn from_outcomes(
        outcomes: Vec<FetchOutcome>,
        total_sources: usize,
        spread_precision: u32,
    ) -> OracleResult<Self> {
        if outcomes.len() > total_sources {
            return Err(OracleError::InvalidRegistry(format!(
                "{} outcomes for {} sources",
                outcomes.len(),
                total_sources
            )));
        }

        let mut prices = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();

        for outcome in outcomes {
            match outcome {
                FetchOutcome::Success { name, price } => prices.push(PricePoint { name, price }),
                FetchOutcome::Failure { name, error } => failures.push(SourceFailure {
                    name,
                    reason: error.to_string(),
                }),
            }
        }

        if prices.is_empty() {
            return Err(OracleError::AllSourcesFailed {
                total: total_sources,
                failures: failures.into_iter().map(|f| (f.name, f.reason)).collect(),
            });
        }

        let mut sum = Decimal::ZERO;
        let mut min = prices[0].price;
        let mut max = prices[0].price;
        for point in &prices {
            sum = sum.checked_add(point.price).ok_or(OracleError::Overflow)?;
            min = min.min(point.price);
            max = max.max(point.price);
        }

        let count = prices.len();
        let average = sum / Decimal::from(count);
        let spread = max - min;
        let spread_percent = (spread / average * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(spread_precision, RoundingStrategy::MidpointAwayFromZero);

        Ok(Self {
            average,
            min,
            max,
            spread,
            spread_percent,
            sources: count,
            total_sources,
            prices,
            failures,
            fetched_at: Utc::now(),
        })
    }

    /// Case-sensitive lookup among the sources that succeeded
    pub fn price_of(&self, name: &str) -> Option<Decimal> {
        self.prices.iter().find(|p| p.name == name).map(|p| p.price)
    }

    pub fn failed_sources(&self) -> usize {
        self.total_sources.saturating_sub(self.sources)
    }
}
