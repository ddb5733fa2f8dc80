//! Crypto venue connectors.
//!
//! Every venue is served by [`CryptoTickerConnector`]; a [`CryptoVenue`]
//! supplies the endpoint, the wire-shape adapter, and the symbol naming.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use cambio_core::connector::{RateConnector, TickerProvider};
use cambio_core::{CambioError, SymbolMap, TickerPrice};
use url::Url;

use crate::http;

mod binance;
mod bybit;
mod kraken;
mod okx;

/// Supported crypto price venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CryptoVenue {
    /// Binance spot, `XXXUSDT` pairs.
    Binance,
    /// Bybit v5 spot, `XXXUSDT` pairs.
    Bybit,
    /// OKX v5 spot, `XXX-USDT` instruments.
    Okx,
    /// Kraken public ticker, `XXXUSD` pairs plus legacy `X…Z…` names.
    Kraken,
}

impl CryptoVenue {
    /// All venues, in CLI listing order.
    pub const ALL: [Self; 4] = [Self::Binance, Self::Bybit, Self::Okx, Self::Kraken];

    /// Lowercase identifier used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Binance => "binance",
            Self::Bybit => "bybit",
            Self::Okx => "okx",
            Self::Kraken => "kraken",
        }
    }

    /// Connector name reported in logs and errors.
    #[must_use]
    pub const fn connector_name(self) -> &'static str {
        match self {
            Self::Binance => "cambio-binance",
            Self::Bybit => "cambio-bybit",
            Self::Okx => "cambio-okx",
            Self::Kraken => "cambio-kraken",
        }
    }

    const fn default_base(self) -> &'static str {
        match self {
            Self::Binance => "https://api.binance.com/",
            Self::Bybit => "https://api.bybit.com/",
            Self::Okx => "https://www.okx.com/",
            Self::Kraken => "https://api.kraken.com/",
        }
    }

    const fn path(self) -> &'static str {
        match self {
            Self::Binance => binance::PATH,
            Self::Bybit => bybit::PATH,
            Self::Okx => okx::PATH,
            Self::Kraken => kraken::PATH,
        }
    }

    /// How this venue's symbols map onto canonical asset symbols.
    #[must_use]
    pub fn symbol_map(self) -> SymbolMap {
        match self {
            Self::Binance => binance::symbol_map(),
            Self::Bybit => bybit::symbol_map(),
            Self::Okx => okx::symbol_map(),
            Self::Kraken => kraken::symbol_map(),
        }
    }

    fn parse(self, body: &str) -> Result<Vec<TickerPrice>, CambioError> {
        let name = self.connector_name();
        match self {
            Self::Binance => binance::parse(name, body),
            Self::Bybit => bybit::parse(name, body),
            Self::Okx => okx::parse(name, body),
            Self::Kraken => kraken::parse(name, body),
        }
    }
}

impl fmt::Display for CryptoVenue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CryptoVenue {
    type Err = CambioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CambioError::config(format!("unknown crypto venue: {s}")))
    }
}

/// Ticker connector for one [`CryptoVenue`].
pub struct CryptoTickerConnector {
    venue: CryptoVenue,
    symbols: SymbolMap,
    base: Url,
    client: reqwest::Client,
}

impl CryptoTickerConnector {
    /// Connector against the venue's public API.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(venue: CryptoVenue) -> Result<Self, CambioError> {
        Self::with_base_url(venue, venue.default_base())
    }

    /// Connector against an arbitrary base URL.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unparsable URL.
    pub fn with_base_url(venue: CryptoVenue, base: &str) -> Result<Self, CambioError> {
        Ok(Self {
            venue,
            symbols: venue.symbol_map(),
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

    /// Venue served by this connector.
    #[must_use]
    pub const fn venue(&self) -> CryptoVenue {
        self.venue
    }
}

#[async_trait]
impl TickerProvider for CryptoTickerConnector {
    async fn tickers(&self) -> Result<Vec<TickerPrice>, CambioError> {
        let url = http::endpoint(&self.base, self.venue.path())?;
        let body = http::get_text(&self.client, url, self.venue.connector_name()).await?;
        let tickers = self.venue.parse(&body)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            connector = self.venue.connector_name(),
            tickers = tickers.len(),
            "fetched crypto tickers"
        );

        Ok(tickers)
    }

    fn symbol_map(&self) -> &SymbolMap {
        &self.symbols
    }
}

impl RateConnector for CryptoTickerConnector {
    fn name(&self) -> &'static str {
        self.venue.connector_name()
    }

    fn as_ticker_provider(&self) -> Option<&dyn TickerProvider> {
        Some(self as &dyn TickerProvider)
    }
}

/// Error for a payload that is JSON but not the venue's ticker shape.
pub(super) fn unexpected_shape(connector: &str, body: &str) -> CambioError {
    CambioError::provider_rejected(
        connector,
        format!("unexpected ticker payload: {}", http::snippet(body)),
    )
}
