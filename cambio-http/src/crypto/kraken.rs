use std::collections::BTreeMap;

use cambio_core::{CambioError, SymbolMap, TickerPrice};
use serde::Deserialize;

use crate::http;

pub(super) const PATH: &str = "0/public/Ticker";

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    error: Vec<String>,
    #[serde(default)]
    result: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Deserialize)]
struct Ticker {
    // last trade: [price, lot volume]
    c: Vec<String>,
}

pub(super) fn symbol_map() -> SymbolMap {
    SymbolMap::with_suffix("USD")
        .alias("XXBTZUSD", "BTC")
        .alias("XBTUSD", "BTC")
        .alias("XETHZUSD", "ETH")
        .alias("XXRPZUSD", "XRP")
        .alias("XLTCZUSD", "LTC")
        .alias("XETCZUSD", "ETC")
        .alias("XDGUSD", "DOGE")
}

/// `{"error":[],"result":{"XXBTZUSD":{"c":["67000.1","0.01"], ...}}}`
pub(super) fn parse(connector: &str, body: &str) -> Result<Vec<TickerPrice>, CambioError> {
    let value = http::parse_json(connector, body)?;
    let env: Envelope =
        serde_json::from_value(value).map_err(|_| super::unexpected_shape(connector, body))?;
    if !env.error.is_empty() {
        return Err(CambioError::provider_rejected(connector, env.error.join("; ")));
    }
    let Some(result) = env.result else {
        return Err(super::unexpected_shape(connector, body));
    };
    Ok(result
        .into_iter()
        .filter_map(|(pair, v)| {
            let t = serde_json::from_value::<Ticker>(v).ok()?;
            let last = t.c.into_iter().next()?;
            Some(TickerPrice::new(pair, last))
        })
        .collect())
}
