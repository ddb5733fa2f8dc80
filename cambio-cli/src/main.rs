//! `cambio` binary: fetch every source once and write the snapshot file.

mod args;

use std::process::ExitCode;
use std::sync::Arc;

use cambio::{CambioError, Oracle, OracleReport};
use cambio_core::{RateConnector, RuleTable};
use cambio_http::{CryptoTickerConnector, DolarApiConnector, ExchangeRateApiConnector};
use clap::Parser;

use crate::args::Cli;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn exchange_key(cli: &Cli) -> Result<String, CambioError> {
    cli.exchange_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CambioError::config("EXCHANGE_KEY is not set"))
}

fn build_oracle(cli: &Cli, key: String) -> Result<Oracle, CambioError> {
    let client = cambio_http::default_client()?;

    let ar = match &cli.dolarapi_ar_url {
        Some(url) => DolarApiConnector::with_base_url("cambio-dolarapi-ar", url)?,
        None => DolarApiConnector::argentina()?,
    };
    let bo = match &cli.dolarapi_bo_url {
        Some(url) => DolarApiConnector::with_base_url("cambio-dolarapi-bo", url)?,
        None => DolarApiConnector::bolivia()?,
    };
    let world = match &cli.exchangerate_url {
        Some(url) => ExchangeRateApiConnector::with_base_url(key, url)?,
        None => ExchangeRateApiConnector::new(key)?,
    };

    let mut builder = Oracle::builder()
        .local_source(
            "argentina",
            Arc::new(ar.with_client(client.clone())),
            RuleTable::argentina(),
        )
        .local_source(
            "bolivia",
            Arc::new(bo.with_client(client.clone())),
            RuleTable::bolivia(),
        )
        .world_rates(Arc::new(world.with_client(client.clone())));

    if let Some(venue) = cli.crypto.venue() {
        let c = match &cli.crypto_url {
            Some(url) => CryptoTickerConnector::with_base_url(venue, url)?,
            None => CryptoTickerConnector::new(venue)?,
        };
        let c: Arc<dyn RateConnector> = Arc::new(c.with_client(client));
        builder = builder.crypto_tickers(c);
    }

    builder.build()
}

async fn run(cli: &Cli) -> Result<OracleReport, CambioError> {
    // Checked before any connector is built so a missing key never hits the network.
    let key = exchange_key(cli)?;
    let oracle = build_oracle(cli, key)?;
    oracle.run_and_persist(&cli.output).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    init_tracing();
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(report) => {
            for w in &report.warnings {
                tracing::warn!(error = %w, "optional source degraded");
            }
            tracing::info!(
                path = %cli.output.display(),
                rates = report.snapshot.rates().len(),
                crypto = report.snapshot.crypto_rates().len(),
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            eprintln!("error: {e}");
            if e.is_config() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
