//! Rate tables and the world-rate payload.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Mapping from rate code to value.
///
/// Every stored value is finite and non-negative; anything else is refused at
/// insertion. Keys are kept sorted so serialized snapshots are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `value` may be stored in a table.
    #[must_use]
    pub fn is_storable(value: f64) -> bool {
        value.is_finite() && value >= 0.0
    }

    /// Insert or overwrite `code`. Returns `false` and leaves the table
    /// untouched when `value` is not storable.
    pub fn insert(&mut self, code: impl Into<String>, value: f64) -> bool {
        if !Self::is_storable(value) {
            return false;
        }
        self.rates.insert(code.into(), value);
        true
    }

    /// Remove `code`, returning its value if present.
    pub fn remove(&mut self, code: &str) -> Option<f64> {
        self.rates.remove(code)
    }

    /// Value for `code`, if present.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Whether `code` is present.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Copy every entry of `other` into `self`; `other` wins on collisions.
    pub fn extend_overriding(&mut self, other: &Self) {
        for (code, value) in &other.rates {
            self.rates.insert(code.clone(), *value);
        }
    }

    /// Iterate over `(code, value)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for RateTable {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (code, value) in iter {
            table.insert(code, value);
        }
        table
    }
}

impl<'de> Deserialize<'de> for RateTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, f64>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

/// Payload of the world-rate provider: a status and a USD conversion table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldRates {
    /// Upstream status indicator, `"success"` when usable.
    pub result: String,
    /// Conversion table; absent when the provider returned none.
    #[serde(default)]
    pub conversion_rates: Option<RateTable>,
}

impl WorldRates {
    /// Successful payload carrying `rates`.
    #[must_use]
    pub fn success(rates: RateTable) -> Self {
        Self {
            result: "success".to_string(),
            conversion_rates: Some(rates),
        }
    }

    /// Whether the upstream reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.eq_ignore_ascii_case("success")
    }
}
