//! Cambio builds a USD-based rate snapshot from several providers.
//!
//! Overview
//! - Local dollar markets (Argentina, Bolivia) are fetched first and reduced to
//!   named rates through per-source `RuleTable`s.
//! - The world-rate table is fetched next; codes computed locally replace the
//!   world figures for the same currency.
//! - Crypto tickers come last and are filtered down to the configured basket.
//!
//! Failure policy
//! - Local quotes and world rates are required: the first failure aborts the
//!   run with `CambioError::RequiredSource` and nothing is written.
//! - Crypto tickers are optional: transport and parse failures degrade to an
//!   empty crypto table and a warning in the report, while an upstream error
//!   envelope (`CambioError::ProviderRejected`) still aborts.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use cambio::Oracle;
//! use cambio_core::RuleTable;
//! use cambio_http::{CryptoTickerConnector, CryptoVenue, DolarApiConnector, ExchangeRateApiConnector};
//!
//! let oracle = Oracle::builder()
//!     .local_source("argentina", Arc::new(DolarApiConnector::argentina()?), RuleTable::argentina())
//!     .local_source("bolivia", Arc::new(DolarApiConnector::bolivia()?), RuleTable::bolivia())
//!     .world_rates(Arc::new(ExchangeRateApiConnector::new(key)?))
//!     .crypto_tickers(Arc::new(CryptoTickerConnector::new(CryptoVenue::Binance)?))
//!     .build()?;
//!
//! let report = oracle.run_and_persist("rates.json").await?;
//! for w in &report.warnings {
//!     eprintln!("degraded: {w}");
//! }
//! ```
#![warn(missing_docs)]

mod core;
/// Snapshot persistence.
pub mod persist;

pub use crate::core::{Oracle, OracleBuilder};
pub use cambio_core::{CambioError, OracleConfig, OracleReport, Snapshot};
