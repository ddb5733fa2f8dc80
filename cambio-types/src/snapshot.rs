use serde::{Deserialize, Serialize};

use crate::table::RateTable;

/// Immutable output record of one run.
///
/// Serialized as `{"updatedAt", "base", "rates", "cryptoRates"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    updated_at: String,
    base: String,
    rates: RateTable,
    crypto_rates: RateTable,
}

impl Snapshot {
    /// Assemble a snapshot. `updated_at` is expected in RFC 3339 UTC.
    pub fn new(
        updated_at: impl Into<String>,
        base: impl Into<String>,
        rates: RateTable,
        crypto_rates: RateTable,
    ) -> Self {
        Self {
            updated_at: updated_at.into(),
            base: base.into(),
            rates,
            crypto_rates,
        }
    }

    /// Generation timestamp.
    #[must_use]
    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    /// Base currency code.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Fiat table.
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Crypto table.
    #[must_use]
    pub const fn crypto_rates(&self) -> &RateTable {
        &self.crypto_rates
    }
}
