use async_trait::async_trait;

use crate::types::{CambioError, RawQuote, SymbolMap, TickerPrice, WorldRates};

/// Focused role trait for connectors that provide local dollar-market quotes.
#[async_trait]
pub trait LocalQuoteProvider: Send + Sync {
    /// Fetch every quote the source publishes; category filtering happens in
    /// the normalizer.
    async fn local_quotes(&self) -> Result<Vec<RawQuote>, CambioError>;
}

/// Focused role trait for connectors that provide the USD world-rate table.
#[async_trait]
pub trait WorldRateProvider: Send + Sync {
    /// Fetch the conversion table and its status indicator.
    async fn world_rates(&self) -> Result<WorldRates, CambioError>;
}

/// Focused role trait for connectors that provide crypto tickers.
///
/// Implementations only adapt their wire shape into [`TickerPrice`] pairs and
/// describe their naming with a [`SymbolMap`]; basket selection is done by
/// [`crate::filter_basket`].
///
/// Error contract: a payload that is valid JSON but not the expected list must
/// be reported as [`CambioError::ProviderRejected`]; transport failures and
/// unparsable bodies use the other variants.
#[async_trait]
pub trait TickerProvider: Send + Sync {
    /// Fetch the venue's ticker list.
    async fn tickers(&self) -> Result<Vec<TickerPrice>, CambioError>;

    /// How venue symbols map to canonical asset symbols.
    fn symbol_map(&self) -> &SymbolMap;
}

/// Main connector trait implemented by provider crates. Exposes role discovery.
#[async_trait]
pub trait RateConnector: Send + Sync {
    /// A stable identifier (e.g., "cambio-dolarapi-ar", "cambio-binance").
    fn name(&self) -> &'static str;

    /// Advertise local quote capability by returning a usable trait object reference.
    fn as_local_quote_provider(&self) -> Option<&dyn LocalQuoteProvider> {
        None
    }

    /// If implemented, returns a trait object for the world-rate table.
    fn as_world_rate_provider(&self) -> Option<&dyn WorldRateProvider> {
        None
    }

    /// If implemented, returns a trait object for crypto tickers.
    fn as_ticker_provider(&self) -> Option<&dyn TickerProvider> {
        None
    }
}
