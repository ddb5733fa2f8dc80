//! Cambio-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod crypto;
mod error;
mod rate;
mod reports;
mod role;
mod snapshot;
mod table;

pub use config::OracleConfig;
pub use crypto::{CryptoBasket, DEFAULT_BASKET, SymbolMap, TickerPrice};
pub use error::CambioError;
pub use rate::{CategoryRule, DerivationRule, FallbackRule, RawQuote, RuleTable, Substitution};
pub use reports::OracleReport;
pub use role::SourceRole;
pub use snapshot::Snapshot;
pub use table::{RateTable, WorldRates};
