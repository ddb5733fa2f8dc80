use core::fmt;
use serde::{Deserialize, Serialize};

/// Roles a source can play in a run.
///
/// These map one-to-one with the connector role traits and give errors and
/// telemetry a stable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SourceRole {
    /// Locally computed fiat quotes (dollar markets of a single country).
    LocalQuotes,
    /// Base table of USD conversion rates for world currencies.
    WorldRates,
    /// Crypto ticker list for the configured basket.
    CryptoTickers,
}

impl SourceRole {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LocalQuotes => "local-quotes",
            Self::WorldRates => "world-rates",
            Self::CryptoTickers => "crypto-tickers",
        }
    }

    /// Whether a failure of this role aborts the run.
    #[must_use]
    pub const fn is_required(self) -> bool {
        match self {
            Self::LocalQuotes | Self::WorldRates => true,
            Self::CryptoTickers => false,
        }
    }
}

impl fmt::Display for SourceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
