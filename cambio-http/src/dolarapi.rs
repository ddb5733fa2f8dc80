//! DolarApi connectors for the Argentine and Bolivian dollar markets.

use async_trait::async_trait;
use cambio_core::connector::{LocalQuoteProvider, RateConnector};
use cambio_core::{CambioError, RawQuote};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::http;

const AR_BASE: &str = "https://dolarapi.com/";
const BO_BASE: &str = "https://bo.dolarapi.com/";
const QUOTES_PATH: &str = "v1/dolares";

#[derive(Debug, Deserialize)]
struct DolarRecord {
    casa: String,
    #[serde(default)]
    compra: Option<f64>,
    #[serde(default)]
    venta: Option<f64>,
}

/// Parse a `/v1/dolares` payload into raw quotes.
///
/// The payload must be a JSON array; anything else is how the service reports
/// its own failures and maps to `ProviderRejected`. Every record must carry a
/// `casa` tag and numeric (or `null`) sides; a single malformed record fails
/// the whole payload with `Data`.
pub(crate) fn parse_quotes(connector: &str, body: &str) -> Result<Vec<RawQuote>, CambioError> {
    let value = http::parse_json(connector, body)?;
    let Value::Array(items) = value else {
        return Err(CambioError::provider_rejected(
            connector,
            format!("expected a list of quotes, got: {}", http::snippet(body)),
        ));
    };

    let records: Vec<DolarRecord> = serde_json::from_value(Value::Array(items))
        .map_err(|e| CambioError::Data(format!("{connector}: malformed quote record: {e}")))?;

    Ok(records
        .into_iter()
        .map(|r| RawQuote {
            category: r.casa,
            buy: r.compra,
            sell: r.venta,
        })
        .collect())
}

/// Connector for a DolarApi deployment (`dolarapi.com`, `bo.dolarapi.com`).
///
/// Serves the local-quotes role only. Which categories become rates is decided
/// by the `RuleTable` the orchestrator pairs with the connector.
pub struct DolarApiConnector {
    name: &'static str,
    base: Url,
    client: reqwest::Client,
}

impl DolarApiConnector {
    /// Connector for the Argentine market (`cambio-dolarapi-ar`).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn argentina() -> Result<Self, CambioError> {
        Self::with_base_url("cambio-dolarapi-ar", AR_BASE)
    }

    /// Connector for the Bolivian market (`cambio-dolarapi-bo`).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn bolivia() -> Result<Self, CambioError> {
        Self::with_base_url("cambio-dolarapi-bo", BO_BASE)
    }

    /// Connector against an arbitrary base URL, e.g. a local mock server.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unparsable URL.
    pub fn with_base_url(name: &'static str, base: &str) -> Result<Self, CambioError> {
        Ok(Self {
            name,
            base: http::parse_base(base)?,
            client: http::default_client()?,
        })
    }

    /// Replace the HTTP client, e.g. to share one across connectors.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl LocalQuoteProvider for DolarApiConnector {
    async fn local_quotes(&self) -> Result<Vec<RawQuote>, CambioError> {
        let url = http::endpoint(&self.base, QUOTES_PATH)?;
        let body = http::get_text(&self.client, url, self.name).await?;
        let quotes = parse_quotes(self.name, &body)?;

        #[cfg(feature = "tracing")]
        tracing::info!(connector = self.name, quotes = quotes.len(), "fetched local quotes");

        Ok(quotes)
    }
}

impl RateConnector for DolarApiConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_local_quote_provider(&self) -> Option<&dyn LocalQuoteProvider> {
        Some(self as &dyn LocalQuoteProvider)
    }
}
