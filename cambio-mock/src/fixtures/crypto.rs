use cambio_core::TickerPrice;

/// Venue-style tickers quoted against USDT, including pairs outside the
/// default basket and one malformed price.
pub fn usdt_tickers() -> Vec<TickerPrice> {
    vec![
        TickerPrice::new("BTCUSDT", "65000.50000000"),
        TickerPrice::new("ETHUSDT", "3120.10000000"),
        TickerPrice::new("SOLUSDT", "151.23000000"),
        TickerPrice::new("DOGEUSDT", "0.15870000"),
        TickerPrice::new("ETHBTC", "0.04800000"),
        TickerPrice::new("XYZUSDT", "1.00000000"),
        TickerPrice::new("PEPEUSDT", "not-a-price"),
    ]
}
