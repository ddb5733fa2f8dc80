//! Quote shapes and the category dispatch tables that turn them into rates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One provider's view of a single instrument.
///
/// Either side may be missing depending on the provider; the derivation rules
/// read a missing side as `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQuote {
    /// Provider category tag, e.g. `"blue"`, `"oficial"`, `"bolsa"`.
    pub category: String,
    /// Bid side.
    pub buy: Option<f64>,
    /// Ask side.
    pub sell: Option<f64>,
}

impl RawQuote {
    /// Build a quote with both sides present.
    pub fn new(category: impl Into<String>, buy: f64, sell: f64) -> Self {
        Self {
            category: category.into(),
            buy: Some(buy),
            sell: Some(sell),
        }
    }

    /// Build a quote that only reports the sell side.
    pub fn sell_only(category: impl Into<String>, sell: f64) -> Self {
        Self {
            category: category.into(),
            buy: None,
            sell: Some(sell),
        }
    }
}

/// How a category's value is derived from its quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DerivationRule {
    /// `(buy + sell) / 2`, for markets quoted as a bid/ask spread.
    Midpoint,
    /// `sell`, for markets where only the sell side is meaningful or reported.
    SellOnly,
}

impl DerivationRule {
    /// Apply the rule to a quote. No clamping is performed.
    #[must_use]
    pub fn apply(self, quote: &RawQuote) -> f64 {
        let buy = quote.buy.unwrap_or(0.0);
        let sell = quote.sell.unwrap_or(0.0);
        match self {
            Self::Midpoint => (buy + sell) / 2.0,
            Self::SellOnly => sell,
        }
    }
}

/// Output code and derivation rule for one category tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Rate code written to the fiat table, e.g. `"ARS_BLUE"`.
    pub code: String,
    /// Rule used to derive the value.
    pub rule: DerivationRule,
}

/// Dispatch table from category tag to [`CategoryRule`].
///
/// Tags missing from the table are ignored by the normalizer, so supporting a
/// new category is a configuration change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    rules: BTreeMap<String, CategoryRule>,
}

impl RuleTable {
    /// Empty table; every category is ignored.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rule for `tag`.
    #[must_use]
    pub fn with_rule(
        mut self,
        tag: impl Into<String>,
        code: impl Into<String>,
        rule: DerivationRule,
    ) -> Self {
        self.rules.insert(
            tag.into(),
            CategoryRule {
                code: code.into(),
                rule,
            },
        );
        self
    }

    /// Argentina dollar markets.
    #[must_use]
    pub fn argentina() -> Self {
        Self::new()
            .with_rule("blue", "ARS_BLUE", DerivationRule::Midpoint)
            .with_rule("oficial", "ARS_OFFICIAL", DerivationRule::Midpoint)
            .with_rule("cripto", "ARS_CRYPTO", DerivationRule::Midpoint)
            .with_rule("bolsa", "ARS_MEP", DerivationRule::SellOnly)
    }

    /// Bolivia dollar markets. The `binance` record reports no buy side.
    #[must_use]
    pub fn bolivia() -> Self {
        Self::new()
            .with_rule("oficial", "BOB_OFFICIAL", DerivationRule::Midpoint)
            .with_rule("binance", "BOB_BLUE", DerivationRule::SellOnly)
    }

    /// Look up the rule for a category tag.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&CategoryRule> {
        self.rules.get(tag)
    }

    /// Iterate over `(tag, rule)` pairs in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryRule)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of configured categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if no category is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Substitute `target` with `fallback` when `target` is zero or missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackRule {
    /// Preferred rate code.
    pub target: String,
    /// Code whose value stands in for the target.
    pub fallback: String,
}

impl FallbackRule {
    /// Build a fallback rule.
    pub fn new(target: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            fallback: fallback.into(),
        }
    }

    /// Argentina card/MEP rate falls back to the parallel "blue" rate.
    #[must_use]
    pub fn argentina_mep() -> Self {
        Self::new("ARS_MEP", "ARS_BLUE")
    }
}

/// Record of an applied fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    /// Code that was replaced.
    pub target: String,
    /// Code whose value was used.
    pub fallback: String,
    /// Value written to the target.
    pub value: f64,
}
