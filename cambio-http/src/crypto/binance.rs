use cambio_core::{CambioError, SymbolMap, TickerPrice};
use serde::Deserialize;
use serde_json::Value;

use crate::http;

pub(super) const PATH: &str = "api/v3/ticker/price";

#[derive(Deserialize)]
struct Ticker {
    symbol: String,
    price: String,
}

pub(super) fn symbol_map() -> SymbolMap {
    SymbolMap::with_suffix("USDT")
}

/// `[{"symbol":"BTCUSDT","price":"67000.10"}, ...]`
pub(super) fn parse(connector: &str, body: &str) -> Result<Vec<TickerPrice>, CambioError> {
    let Value::Array(items) = http::parse_json(connector, body)? else {
        return Err(super::unexpected_shape(connector, body));
    };
    Ok(items
        .into_iter()
        .filter_map(|v| serde_json::from_value::<Ticker>(v).ok())
        .map(|t| TickerPrice::new(t.symbol, t.price))
        .collect())
}
