//! Built-in price source registry

use std::collections::HashSet;

use oracle_core::{OracleError, OracleResult, PriceExtractor, SourceDescriptor};

/// BTC/USD sources, queried in this order
pub static DEFAULT_SOURCES: [SourceDescriptor; 4] = [
    // {"bitcoin":{"usd":60000.12}}
    SourceDescriptor::builtin(
        "CoinGecko",
        "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd",
        PriceExtractor::pointer("/bitcoin/usd"),
    ),
    // {"symbol":"BTCUSDT","price":"60000.12000000"}
    SourceDescriptor::builtin(
        "Binance",
        "https://api.binance.com/api/v3/ticker/price?symbol=BTCUSDT",
        PriceExtractor::pointer("/price"),
    ),
    // {"data":{"currency":"BTC","rates":{"USD":"60000.125",...}}}
    SourceDescriptor::builtin(
        "Coinbase",
        "https://api.coinbase.com/v2/exchange-rates?currency=BTC",
        PriceExtractor::pointer("/data/rates/USD"),
    ),
    // {"USD":60000.12}
    SourceDescriptor::builtin(
        "CryptoCompare",
        "https://min-api.cryptocompare.com/data/price?fsym=BTC&tsyms=USD",
        PriceExtractor::pointer("/USD"),
    ),
];

/// Ordered, non-empty list of sources with unique names
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    sources: Vec<SourceDescriptor>,
}

impl SourceRegistry {
    pub fn new(sources: Vec<SourceDescriptor>) -> OracleResult<Self> {
        if sources.is_empty() {
            return Err(OracleError::InvalidRegistry("no sources".to_string()));
        }

        let mut seen = HashSet::new();
        for source in &sources {
            if !seen.insert(source.name()) {
                return Err(OracleError::InvalidRegistry(format!(
                    "duplicate source name: {}",
                    source.name()
                )));
            }
        }

        Ok(Self { sources })
    }

    pub fn builtin() -> Self {
        Self {
            sources: DEFAULT_SOURCES.to_vec(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceDescriptor> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&SourceDescriptor> {
        self.sources.iter().find(|s| s.name() == name)
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_builtin_registry() {
        let registry = SourceRegistry::builtin();
        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.names(),
            ["CoinGecko", "Binance", "Coinbase", "CryptoCompare"]
        );
        assert!(SourceRegistry::new(DEFAULT_SOURCES.to_vec()).is_ok());
    }

    #[test]
    fn test_builtin_extractors() {
        let registry = SourceRegistry::builtin();
        let cases = [
            ("CoinGecko", json!({"bitcoin": {"usd": 60000.12}}), dec!(60000.12)),
            ("Binance", json!({"symbol": "BTCUSDT", "price": "60200.01000000"}), dec!(60200.01)),
            ("Coinbase", json!({"data": {"currency": "BTC", "rates": {"USD": "59900.125"}}}), dec!(59900.125)),
            ("CryptoCompare", json!({"USD": 60010.5}), dec!(60010.5)),
        ];

        for (name, body, expected) in cases {
            let source = registry.get(name).unwrap();
            assert_eq!(source.extract_price(&body), Ok(expected), "{}", name);
        }
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert!(matches!(
            SourceRegistry::new(vec![]),
            Err(OracleError::InvalidRegistry(_))
        ));

        let dup = vec![DEFAULT_SOURCES[0].clone(), DEFAULT_SOURCES[0].clone()];
        assert!(matches!(
            SourceRegistry::new(dup),
            Err(OracleError::InvalidRegistry(msg)) if msg.contains("CoinGecko")
        ));
    }
}
