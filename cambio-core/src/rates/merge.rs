use crate::types::RateTable;

/// Build the fiat table from the world-rate base and the locally derived rates.
///
/// The base table (empty when the provider returned none) is seeded first,
/// every `reserved` code is removed from it, then every local rate is written
/// over it. Reserved codes are removed regardless of whether a local value
/// exists for them.
#[must_use]
pub fn merge_rates(base: Option<RateTable>, reserved: &[String], local: &RateTable) -> RateTable {
    let mut out = base.unwrap_or_default();
    for code in reserved {
        out.remove(code);
    }
    out.extend_overriding(local);
    out
}
