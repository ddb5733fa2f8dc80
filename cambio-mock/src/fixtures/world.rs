use cambio_core::{RateTable, WorldRates};

pub fn usd_base() -> WorldRates {
    let rates: RateTable = [
        ("USD", 1.0),
        ("EUR", 0.9213),
        ("GBP", 0.7891),
        ("BRL", 5.4301),
        ("CLP", 935.12),
        ("JPY", 151.32),
        ("ARS", 1045.5),
        ("BOB", 6.91),
    ]
    .into_iter()
    .collect();
    WorldRates::success(rates)
}
