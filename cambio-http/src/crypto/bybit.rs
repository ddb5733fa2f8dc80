use cambio_core::{CambioError, SymbolMap, TickerPrice};
use serde::Deserialize;

use crate::http;

pub(super) const PATH: &str = "v5/market/tickers?category=spot";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    ret_code: i64,
    #[serde(default)]
    ret_msg: String,
    #[serde(default)]
    result: Option<ResultList>,
}

#[derive(Deserialize)]
struct ResultList {
    #[serde(default)]
    list: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ticker {
    symbol: String,
    last_price: String,
}

pub(super) fn symbol_map() -> SymbolMap {
    SymbolMap::with_suffix("USDT")
}

/// `{"retCode":0,"retMsg":"OK","result":{"list":[{"symbol":"BTCUSDT","lastPrice":"..."}]}}`
pub(super) fn parse(connector: &str, body: &str) -> Result<Vec<TickerPrice>, CambioError> {
    let value = http::parse_json(connector, body)?;
    let env: Envelope =
        serde_json::from_value(value).map_err(|_| super::unexpected_shape(connector, body))?;
    if env.ret_code != 0 {
        return Err(CambioError::provider_rejected(
            connector,
            format!("retCode {}: {}", env.ret_code, env.ret_msg),
        ));
    }
    let Some(result) = env.result else {
        return Err(super::unexpected_shape(connector, body));
    };
    Ok(result
        .list
        .into_iter()
        .filter_map(|v| serde_json::from_value::<Ticker>(v).ok())
        .map(|t| TickerPrice::new(t.symbol, t.last_price))
        .collect())
}
