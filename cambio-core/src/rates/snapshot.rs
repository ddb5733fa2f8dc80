use chrono::SecondsFormat;

use crate::clock::Clock;
use crate::types::{RateTable, Snapshot};

/// Stamp the finished tables into a [`Snapshot`].
///
/// The timestamp is RFC 3339 UTC with second precision and a `Z` suffix.
pub fn build_snapshot(
    rates: RateTable,
    crypto_rates: RateTable,
    base: &str,
    clock: &dyn Clock,
) -> Snapshot {
    let updated_at = clock.now().to_rfc3339_opts(SecondsFormat::Secs, true);
    Snapshot::new(updated_at, base, rates, crypto_rates)
}
