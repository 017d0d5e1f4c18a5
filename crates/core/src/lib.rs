//! Core types for the BTC/USD price oracle
//!
//! This crate holds everything that does not touch the network:
//! - Source descriptors and extraction rules
//! - Price validation
//! - The aggregation report and its reduction
//! - Configuration and error types

pub mod config;
pub mod errors;
pub mod prices;
pub mod report;
pub mod types;

pub use config::*;
pub use errors::*;
pub use prices::*;
pub use report::*;
pub use types::*;
