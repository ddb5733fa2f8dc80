//! Re-export of foundational types from `cambio-types`.
// Consolidated re-exports so downstream crates can depend on `cambio-core` only

pub use cambio_types::{CambioError, SourceRole};
pub use cambio_types::{
    CategoryRule, CryptoBasket, DEFAULT_BASKET, DerivationRule, FallbackRule, OracleConfig,
    OracleReport, RateTable, RawQuote, RuleTable, Snapshot, Substitution, SymbolMap, TickerPrice,
    WorldRates,
};
