use cambio_core::{CambioError, SymbolMap, TickerPrice};
use serde::Deserialize;

use crate::http;

pub(super) const PATH: &str = "api/v5/market/tickers?instType=SPOT";

#[derive(Deserialize)]
struct Envelope {
    code: String,
    #[serde(default)]
    msg: String,
    #[serde(default)]
    data: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ticker {
    inst_id: String,
    last: String,
}

pub(super) fn symbol_map() -> SymbolMap {
    SymbolMap::with_suffix("-USDT")
}

/// `{"code":"0","msg":"","data":[{"instId":"BTC-USDT","last":"..."}]}`
pub(super) fn parse(connector: &str, body: &str) -> Result<Vec<TickerPrice>, CambioError> {
    let value = http::parse_json(connector, body)?;
    let env: Envelope =
        serde_json::from_value(value).map_err(|_| super::unexpected_shape(connector, body))?;
    if env.code != "0" {
        return Err(CambioError::provider_rejected(
            connector,
            format!("code {}: {}", env.code, env.msg),
        ));
    }
    Ok(env
        .data
        .into_iter()
        .filter_map(|v| serde_json::from_value::<Ticker>(v).ok())
        .map(|t| TickerPrice::new(t.inst_id, t.last))
        .collect())
}
