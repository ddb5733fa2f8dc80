//! Mock connectors for CI-safe tests and demos.
//!
//! `MockConnector` serves deterministic fixtures by default and can be
//! scripted per role with [`MockBehavior`]. Every call is appended to an
//! optional shared [`CallLog`] so callers can assert fetch order.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cambio_core::connector::{
    LocalQuoteProvider, RateConnector, TickerProvider, WorldRateProvider,
};
use cambio_core::{CambioError, RawQuote, SymbolMap, TickerPrice, WorldRates};

mod fixtures;

/// Instruction for how a role should behave when called.
#[derive(Clone, Debug)]
pub enum MockBehavior<T> {
    /// Return the provided value.
    Return(T),
    /// Fail with the provided error.
    Fail(CambioError),
}

impl<T: Clone> MockBehavior<T> {
    fn run(&self) -> Result<T, CambioError> {
        match self {
            Self::Return(v) => Ok(v.clone()),
            Self::Fail(e) => Err(e.clone()),
        }
    }
}

/// Shared, ordered record of `(connector, role)` calls.
#[derive(Clone, Debug, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    /// New empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, entry: String) {
        if let Ok(mut v) = self.0.lock() {
            v.push(entry);
        }
    }

    /// Snapshot of the entries recorded so far, formatted `name:role`.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

/// Scriptable in-memory connector.
pub struct MockConnector {
    name: &'static str,
    local: Option<MockBehavior<Vec<RawQuote>>>,
    world: Option<MockBehavior<WorldRates>>,
    tickers: Option<MockBehavior<Vec<TickerPrice>>>,
    symbols: SymbolMap,
    log: Option<CallLog>,
}

impl MockConnector {
    /// Connector with no roles; add them with the `with_*` methods.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            local: None,
            world: None,
            tickers: None,
            symbols: SymbolMap::identity(),
            log: None,
        }
    }

    /// Argentina dollar quotes fixture.
    #[must_use]
    pub fn argentina() -> Self {
        Self::new("cambio-mock-ar").with_local(MockBehavior::Return(fixtures::local::argentina()))
    }

    /// Bolivia dollar quotes fixture.
    #[must_use]
    pub fn bolivia() -> Self {
        Self::new("cambio-mock-bo").with_local(MockBehavior::Return(fixtures::local::bolivia()))
    }

    /// USD world-rate fixture.
    #[must_use]
    pub fn world() -> Self {
        Self::new("cambio-mock-world").with_world(MockBehavior::Return(fixtures::world::usd_base()))
    }

    /// USDT-quoted crypto tickers fixture.
    #[must_use]
    pub fn crypto() -> Self {
        Self::new("cambio-mock-crypto").with_tickers(
            MockBehavior::Return(fixtures::crypto::usdt_tickers()),
            SymbolMap::with_suffix("USDT"),
        )
    }

    /// Serve local quotes with `behavior`.
    #[must_use]
    pub fn with_local(mut self, behavior: MockBehavior<Vec<RawQuote>>) -> Self {
        self.local = Some(behavior);
        self
    }

    /// Serve the world-rate table with `behavior`.
    #[must_use]
    pub fn with_world(mut self, behavior: MockBehavior<WorldRates>) -> Self {
        self.world = Some(behavior);
        self
    }

    /// Serve crypto tickers with `behavior`, named according to `symbols`.
    #[must_use]
    pub fn with_tickers(
        mut self,
        behavior: MockBehavior<Vec<TickerPrice>>,
        symbols: SymbolMap,
    ) -> Self {
        self.tickers = Some(behavior);
        self.symbols = symbols;
        self
    }

    /// Replace every configured role's behavior with a failure.
    #[must_use]
    pub fn failing(mut self, err: CambioError) -> Self {
        if self.local.is_some() {
            self.local = Some(MockBehavior::Fail(err.clone()));
        }
        if self.world.is_some() {
            self.world = Some(MockBehavior::Fail(err.clone()));
        }
        if self.tickers.is_some() {
            self.tickers = Some(MockBehavior::Fail(err));
        }
        self
    }

    /// Record calls into `log`.
    #[must_use]
    pub fn logging_to(mut self, log: &CallLog) -> Self {
        self.log = Some(log.clone());
        self
    }

    fn record(&self, role: &str) {
        if let Some(log) = &self.log {
            log.push(format!("{}:{role}", self.name));
        }
    }
}

#[async_trait]
impl RateConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_local_quote_provider(&self) -> Option<&dyn LocalQuoteProvider> {
        self.local.as_ref().map(|_| self as &dyn LocalQuoteProvider)
    }

    fn as_world_rate_provider(&self) -> Option<&dyn WorldRateProvider> {
        self.world.as_ref().map(|_| self as &dyn WorldRateProvider)
    }

    fn as_ticker_provider(&self) -> Option<&dyn TickerProvider> {
        self.tickers.as_ref().map(|_| self as &dyn TickerProvider)
    }
}

#[async_trait]
impl LocalQuoteProvider for MockConnector {
    async fn local_quotes(&self) -> Result<Vec<RawQuote>, CambioError> {
        self.record("local-quotes");
        self.local
            .as_ref()
            .map_or_else(|| Ok(Vec::new()), MockBehavior::run)
    }
}

#[async_trait]
impl WorldRateProvider for MockConnector {
    async fn world_rates(&self) -> Result<WorldRates, CambioError> {
        self.record("world-rates");
        self.world
            .as_ref()
            .map_or_else(|| Ok(WorldRates::default()), MockBehavior::run)
    }
}

#[async_trait]
impl TickerProvider for MockConnector {
    async fn tickers(&self) -> Result<Vec<TickerPrice>, CambioError> {
        self.record("crypto-tickers");
        self.tickers
            .as_ref()
            .map_or_else(|| Ok(Vec::new()), MockBehavior::run)
    }

    fn symbol_map(&self) -> &SymbolMap {
        &self.symbols
    }
}
