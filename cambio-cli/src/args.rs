use std::path::PathBuf;

use cambio_http::CryptoVenue;
use clap::{Parser, ValueEnum, ValueHint};

pub const DEFAULT_OUTPUT: &str = "rates.json";

/// Crypto source selection; `none` disables the crypto table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CryptoChoice {
    Binance,
    Bybit,
    Okx,
    Kraken,
    None,
}

impl CryptoChoice {
    pub const fn venue(self) -> Option<CryptoVenue> {
        match self {
            Self::Binance => Some(CryptoVenue::Binance),
            Self::Bybit => Some(CryptoVenue::Bybit),
            Self::Okx => Some(CryptoVenue::Okx),
            Self::Kraken => Some(CryptoVenue::Kraken),
            Self::None => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cambio", version, about = "Write a USD rate snapshot (fiat, local dollar markets, crypto)")]
pub struct Cli {
    /// Where to write the snapshot; replaced on every successful run
    #[arg(
        short,
        long,
        value_hint = ValueHint::FilePath,
        env = "CAMBIO_OUTPUT",
        default_value = DEFAULT_OUTPUT
    )]
    pub output: PathBuf,

    /// Crypto price venue
    #[arg(long, value_enum, env = "CAMBIO_CRYPTO", default_value_t = CryptoChoice::Binance)]
    pub crypto: CryptoChoice,

    /// ExchangeRate-API key
    #[arg(long, env = "EXCHANGE_KEY", hide_env_values = true)]
    pub exchange_key: Option<String>,

    // Endpoint overrides, used to point the binary at local test servers.
    #[arg(long, env = "CAMBIO_DOLARAPI_AR_URL", hide = true)]
    pub dolarapi_ar_url: Option<String>,

    #[arg(long, env = "CAMBIO_DOLARAPI_BO_URL", hide = true)]
    pub dolarapi_bo_url: Option<String>,

    #[arg(long, env = "CAMBIO_EXCHANGERATE_URL", hide = true)]
    pub exchangerate_url: Option<String>,

    #[arg(long, env = "CAMBIO_CRYPTO_URL", hide = true)]
    pub crypto_url: Option<String>,
}
