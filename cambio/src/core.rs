use std::path::Path;
use std::sync::Arc;

use cambio_core::{
    CambioError, Clock, OracleConfig, OracleReport, RateConnector, RateTable, RuleTable,
    SourceRole, Substitution, SystemClock, build_snapshot, filter_basket, merge_rates,
    normalize_quotes, resolve_fallbacks,
};

/// A local dollar-market source paired with the rules that read its quotes.
struct LocalSource {
    label: String,
    connector: Arc<dyn RateConnector>,
    rules: RuleTable,
}

/// Orchestrator that fetches every source in a fixed order and assembles a
/// [`cambio_core::Snapshot`].
pub struct Oracle {
    locals: Vec<LocalSource>,
    world: Arc<dyn RateConnector>,
    crypto: Option<Arc<dyn RateConnector>>,
    cfg: OracleConfig,
    clock: Arc<dyn Clock>,
}

/// Builder for constructing an [`Oracle`].
pub struct OracleBuilder {
    locals: Vec<LocalSource>,
    world: Option<Arc<dyn RateConnector>>,
    crypto: Option<Arc<dyn RateConnector>>,
    cfg: OracleConfig,
    clock: Arc<dyn Clock>,
}

impl Default for OracleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OracleBuilder {
    /// Create a builder with the default configuration and the system clock.
    ///
    /// Starts with no sources; a world-rate connector is mandatory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locals: Vec::new(),
            world: None,
            crypto: None,
            cfg: OracleConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Register a local quote source.
    ///
    /// Sources are fetched in registration order. When two sources produce
    /// the same code the later one wins.
    #[must_use]
    pub fn local_source(
        mut self,
        label: impl Into<String>,
        connector: Arc<dyn RateConnector>,
        rules: RuleTable,
    ) -> Self {
        self.locals.push(LocalSource {
            label: label.into(),
            connector,
            rules,
        });
        self
    }

    /// Set the world-rate connector.
    #[must_use]
    pub fn world_rates(mut self, connector: Arc<dyn RateConnector>) -> Self {
        self.world = Some(connector);
        self
    }

    /// Set the crypto ticker connector. Without one the crypto table is empty.
    #[must_use]
    pub fn crypto_tickers(mut self, connector: Arc<dyn RateConnector>) -> Self {
        self.crypto = Some(connector);
        self
    }

    /// Replace the engine configuration.
    #[must_use]
    pub fn config(mut self, cfg: OracleConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Replace the time source used to stamp snapshots.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the oracle.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no world-rate connector is set, or if a
    /// registered connector does not advertise the role it was registered for.
    pub fn build(self) -> Result<Oracle, CambioError> {
        let Some(world) = self.world else {
            return Err(CambioError::InvalidArg(
                "no world-rate connector registered; add one via world_rates(...)".to_string(),
            ));
        };

        let mismatch = |c: &Arc<dyn RateConnector>, role: SourceRole| {
            CambioError::InvalidArg(format!(
                "connector {} does not provide {role}",
                c.name()
            ))
        };

        for src in &self.locals {
            if src.connector.as_local_quote_provider().is_none() {
                return Err(mismatch(&src.connector, SourceRole::LocalQuotes));
            }
        }
        if world.as_world_rate_provider().is_none() {
            return Err(mismatch(&world, SourceRole::WorldRates));
        }
        if let Some(c) = &self.crypto {
            if c.as_ticker_provider().is_none() {
                return Err(mismatch(c, SourceRole::CryptoTickers));
            }
        }

        Ok(Oracle {
            locals: self.locals,
            world,
            crypto: self.crypto,
            cfg: self.cfg,
            clock: self.clock,
        })
    }
}

impl Oracle {
    /// Start building a new `Oracle`.
    #[must_use]
    pub fn builder() -> OracleBuilder {
        OracleBuilder::new()
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &OracleConfig {
        &self.cfg
    }

    /// Fetch every source and assemble a snapshot.
    ///
    /// Sources are contacted one at a time: local sources in registration
    /// order, then world rates, then crypto tickers.
    ///
    /// # Errors
    /// - `RequiredSource` when a local or world-rate source fails or the world
    ///   table reports a non-success status.
    /// - `ProviderRejected` when the crypto venue answers with an error envelope.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cambio::core::run",
            skip(self),
            fields(locals = self.locals.len(), crypto = self.crypto.is_some()),
        )
    )]
    pub async fn run(&self) -> Result<OracleReport, CambioError> {
        let mut local = RateTable::new();
        for src in &self.locals {
            let table = self.fetch_local(src).await?;
            local.extend_overriding(&table);
        }
        let substitutions = self.apply_fallbacks(&mut local);

        let world = self.fetch_world().await?;
        let rates = merge_rates(world, &self.cfg.reserved_codes, &local);

        let mut warnings = Vec::new();
        let crypto_rates = self.fetch_crypto(&mut warnings).await?;

        let snapshot = build_snapshot(rates, crypto_rates, &self.cfg.base_currency, &*self.clock);

        #[cfg(feature = "tracing")]
        tracing::info!(
            rates = snapshot.rates().len(),
            crypto = snapshot.crypto_rates().len(),
            warnings = warnings.len(),
            "snapshot assembled"
        );

        Ok(OracleReport {
            snapshot,
            substitutions,
            warnings,
        })
    }

    /// Run and write the snapshot to `path`, replacing previous content.
    ///
    /// The file is only touched after a successful run.
    ///
    /// # Errors
    /// Any error from [`Oracle::run`], or `Persist` if the file cannot be written.
    pub async fn run_and_persist(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<OracleReport, CambioError> {
        let report = self.run().await?;
        crate::persist::write_snapshot(path.as_ref(), &report.snapshot).await?;
        Ok(report)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cambio::core::fetch_local",
            skip(self, src),
            fields(source = %src.label, connector = src.connector.name()),
        )
    )]
    async fn fetch_local(&self, src: &LocalSource) -> Result<RateTable, CambioError> {
        let role = SourceRole::LocalQuotes;
        let name = src.connector.name();
        let provider = src
            .connector
            .as_local_quote_provider()
            .ok_or_else(|| CambioError::unsupported(role))?;

        #[cfg(feature = "tracing")]
        tracing::info!("fetching local quotes");

        let quotes = provider
            .local_quotes()
            .await
            .map_err(|e| CambioError::required_source(role, name, &e))?;
        Ok(normalize_quotes(&quotes, &src.rules))
    }

    fn apply_fallbacks(&self, local: &mut RateTable) -> Vec<Substitution> {
        resolve_fallbacks(local, &self.cfg.fallbacks)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cambio::core::fetch_world",
            skip(self),
            fields(connector = self.world.name()),
        )
    )]
    async fn fetch_world(&self) -> Result<Option<RateTable>, CambioError> {
        let role = SourceRole::WorldRates;
        let name = self.world.name();
        let provider = self
            .world
            .as_world_rate_provider()
            .ok_or_else(|| CambioError::unsupported(role))?;

        #[cfg(feature = "tracing")]
        tracing::info!("fetching world rates");

        let world = provider
            .world_rates()
            .await
            .map_err(|e| CambioError::required_source(role, name, &e))?;

        if !world.is_success() {
            return Err(CambioError::RequiredSource {
                role,
                connector: name.to_string(),
                reason: format!("unsuccessful result: {}", world.result),
            });
        }
        Ok(world.conversion_rates)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "cambio::core::fetch_crypto", skip(self, warnings))
    )]
    async fn fetch_crypto(&self, warnings: &mut Vec<CambioError>) -> Result<RateTable, CambioError> {
        let Some(connector) = &self.crypto else {
            return Ok(RateTable::new());
        };
        let provider = connector
            .as_ticker_provider()
            .ok_or_else(|| CambioError::unsupported(SourceRole::CryptoTickers))?;

        #[cfg(feature = "tracing")]
        tracing::info!(connector = connector.name(), "fetching crypto tickers");

        match provider.tickers().await {
            Ok(tickers) => Ok(filter_basket(
                &tickers,
                &self.cfg.basket,
                provider.symbol_map(),
            )),
            Err(e) if e.is_fatal_for_optional() => Err(e),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    connector = connector.name(),
                    error = %e,
                    "crypto source unavailable; continuing without crypto rates"
                );
                warnings.push(e);
                Ok(RateTable::new())
            }
        }
    }
}
