//! ExchangeRate-API (`v6.exchangerate-api.com`) world-rate connector.

use async_trait::async_trait;
use cambio_core::connector::{RateConnector, WorldRateProvider};
use cambio_core::{CambioError, RateTable, WorldRates};
use serde::Deserialize;
use url::Url;

use crate::http;

const NAME: &str = "cambio-exchangerate-api";
const DEFAULT_BASE: &str = "https://v6.exchangerate-api.com/";

#[derive(Debug, Deserialize)]
struct LatestResponse {
    result: String,
    #[serde(rename = "error-type", default)]
    error_type: Option<String>,
    #[serde(default)]
    conversion_rates: Option<RateTable>,
}

/// Parse a `/latest/USD` payload.
///
/// A body whose `result` is `"error"` is surfaced as `ProviderRejected` with
/// the upstream `error-type`. Other non-success results are returned as-is so
/// the orchestrator can apply its status check.
pub(crate) fn parse_latest(body: &str) -> Result<WorldRates, CambioError> {
    let value = http::parse_json(NAME, body)?;
    let resp: LatestResponse = serde_json::from_value(value).map_err(|e| {
        CambioError::provider_rejected(NAME, format!("unexpected payload shape: {e}"))
    })?;

    if resp.result.eq_ignore_ascii_case("error") {
        let kind = resp.error_type.unwrap_or_else(|| "unknown".to_string());
        return Err(CambioError::provider_rejected(NAME, kind));
    }

    Ok(WorldRates {
        result: resp.result,
        conversion_rates: resp.conversion_rates,
    })
}

/// World-rate connector keyed by an ExchangeRate-API key.
///
/// The key is part of the request path and is never logged.
pub struct ExchangeRateApiConnector {
    api_key: String,
    base: Url,
    client: reqwest::Client,
}

impl ExchangeRateApiConnector {
    /// Connector against the public service.
    ///
    /// # Errors
    /// Returns `Config` for an empty key, or an error if the HTTP client
    /// cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CambioError> {
        Self::with_base_url(api_key, DEFAULT_BASE)
    }

    /// Connector against an arbitrary base URL.
    ///
    /// # Errors
    /// Returns `Config` for an empty key and `InvalidArg` for a bad URL.
    pub fn with_base_url(api_key: impl Into<String>, base: &str) -> Result<Self, CambioError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CambioError::config("EXCHANGE_KEY is empty"));
        }
        Ok(Self {
            api_key,
            base: http::parse_base(base)?,
            client: http::default_client()?,
        })
    }

    /// Replace the HTTP client.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    // The key is appended as a single encoded segment and never echoed in errors.
    fn latest_url(&self) -> Result<Url, CambioError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| CambioError::InvalidArg("base url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(["v6", self.api_key.as_str(), "latest", "USD"]);
        Ok(url)
    }
}

impl std::fmt::Debug for ExchangeRateApiConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeRateApiConnector")
            .field("base", &self.base.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WorldRateProvider for ExchangeRateApiConnector {
    async fn world_rates(&self) -> Result<WorldRates, CambioError> {
        let url = self.latest_url()?;
        let body = http::get_text(&self.client, url, NAME).await?;
        let rates = parse_latest(&body)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            connector = NAME,
            result = %rates.result,
            rates = rates.conversion_rates.as_ref().map_or(0, RateTable::len),
            "fetched world rates"
        );

        Ok(rates)
    }
}

impl RateConnector for ExchangeRateApiConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn as_world_rate_provider(&self) -> Option<&dyn WorldRateProvider> {
        Some(self as &dyn WorldRateProvider)
    }
}
