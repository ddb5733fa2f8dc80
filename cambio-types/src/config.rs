//! Configuration shared by the engine and the orchestrator.

use serde::{Deserialize, Serialize};

use crate::crypto::CryptoBasket;
use crate::rate::FallbackRule;

/// Engine configuration that is not tied to a particular source.
///
/// Per-source category rules travel with the registered local source; this
/// struct holds the cross-source pieces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Fallbacks applied after all local sources are normalized, in order.
    pub fallbacks: Vec<FallbackRule>,
    /// Codes removed from the world table because they are computed locally.
    pub reserved_codes: Vec<String>,
    /// Crypto assets of interest.
    pub basket: CryptoBasket,
    /// Base currency stamped on the snapshot.
    pub base_currency: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            fallbacks: vec![FallbackRule::argentina_mep()],
            reserved_codes: vec!["ARS".to_string(), "BOB".to_string()],
            basket: CryptoBasket::default(),
            base_currency: "USD".to_string(),
        }
    }
}
