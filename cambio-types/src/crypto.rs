//! Crypto basket configuration and provider symbol naming.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Canonical symbols tracked by default.
pub const DEFAULT_BASKET: &[&str] = &[
    "BTC", "ETH", "BNB", "SOL", "XRP", "ADA", "AVAX", "DOT", "LINK", "NEAR", "APT", "SUI", "TON",
    "POL", "UNI", "AAVE", "MKR", "INJ", "RNDR", "LTC", "BCH", "ETC", "USDC", "DAI", "FDUSD",
    "DOGE", "SHIB", "PEPE", "WIF",
];

/// Set of canonical asset symbols of interest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoBasket {
    symbols: BTreeSet<String>,
}

impl Default for CryptoBasket {
    fn default() -> Self {
        Self::new(DEFAULT_BASKET.iter().copied())
    }
}

impl CryptoBasket {
    /// Build a basket from canonical symbols.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `symbol` is part of the basket.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    /// Iterate over the canonical symbols in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Provider-specific naming adapter.
///
/// Maps a venue symbol (e.g. `BTCUSDT`, `BTC-USDT`, `XXBTZUSD`) to its
/// canonical asset symbol. Aliases are checked before suffix stripping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMap {
    quote_suffix: Option<String>,
    aliases: BTreeMap<String, String>,
}

impl SymbolMap {
    /// Identity mapping: symbols are already canonical.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Strip `suffix` from venue symbols; symbols without it are not mapped.
    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self {
            quote_suffix: Some(suffix.into()),
            aliases: BTreeMap::new(),
        }
    }

    /// Add an explicit alias from a venue symbol to a canonical symbol.
    #[must_use]
    pub fn alias(mut self, venue: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(venue.into(), canonical.into());
        self
    }

    /// Resolve a venue symbol to its canonical form.
    #[must_use]
    pub fn canonical(&self, raw: &str) -> Option<String> {
        if let Some(c) = self.aliases.get(raw) {
            return Some(c.clone());
        }
        match &self.quote_suffix {
            None => Some(raw.to_string()),
            Some(suffix) => raw
                .strip_suffix(suffix.as_str())
                .filter(|base| !base.is_empty())
                .map(str::to_string),
        }
    }
}

/// A venue ticker reduced to the shape the basket filter consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerPrice {
    /// Venue symbol, before canonicalisation.
    pub symbol: String,
    /// Price as reported, still text.
    pub price: String,
}

impl TickerPrice {
    /// Build a ticker pair.
    pub fn new(symbol: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            price: price.into(),
        }
    }
}
