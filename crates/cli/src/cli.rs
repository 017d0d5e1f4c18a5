//! Command-line argument parsing

use clap::Parser;

/// btc-price - BTC/USD price averaged across public exchange APIs
///
/// Examples:
///   btc-price
///   btc-price --average
///   btc-price --source Coinbase
///   btc-price --json --timeout-ms 5000
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print only the price reported by this source (case-sensitive)
    #[arg(short, long, value_name = "NAME", conflicts_with_all = ["average", "json"])]
    pub source: Option<String>,

    /// Print only the average price
    #[arg(short, long, conflicts_with = "json")]
    pub average: bool,

    /// Print the full aggregation report as JSON
    #[arg(long)]
    pub json: bool,

    /// Per-source request timeout in milliseconds
    #[arg(long, default_value = "10000", value_name = "MS")]
    pub timeout_ms: u64,

    /// List the built-in sources and exit
    #[arg(long)]
    pub list_sources: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// What the user asked to see
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Summary,
    Average,
    Source(String),
    Json,
    ListSources,
}

impl Args {
    pub fn output_mode(&self) -> OutputMode {
        if self.list_sources {
            OutputMode::ListSources
        } else if let Some(name) = &self.source {
            OutputMode::Source(name.clone())
        } else if self.average {
            OutputMode::Average
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Summary
        }
    }

    /// Default filter when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("btc-price").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.output_mode(), OutputMode::Summary);
        assert_eq!(args.timeout_ms, 10_000);
        assert_eq!(args.default_log_filter(), "warn");
    }

    #[test]
    fn test_modes() {
        assert_eq!(parse(&["--average"]).unwrap().output_mode(), OutputMode::Average);
        assert_eq!(parse(&["--json"]).unwrap().output_mode(), OutputMode::Json);
        assert_eq!(
            parse(&["--source", "Coinbase"]).unwrap().output_mode(),
            OutputMode::Source("Coinbase".into())
        );
        assert_eq!(parse(&["--list-sources"]).unwrap().output_mode(), OutputMode::ListSources);
    }

    #[test]
    fn test_conflicting_flags() {
        assert!(parse(&["--source", "Binance", "--average"]).is_err());
        assert!(parse(&["--average", "--json"]).is_err());
    }

    #[test]
    fn test_timeout_and_verbose() {
        let args = parse(&["--timeout-ms", "2500", "-v"]).unwrap();
        assert_eq!(args.timeout_ms, 2500);
        assert_eq!(args.default_log_filter(), "debug");
    }
}
