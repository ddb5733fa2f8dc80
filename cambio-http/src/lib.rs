//! cambio-http
//!
//! Public connectors that implement `RateConnector` over HTTP:
//!
//! - [`DolarApiConnector`]: Argentine and Bolivian local dollar quotes.
//! - [`ExchangeRateApiConnector`]: the USD world-rate table.
//! - [`CryptoTickerConnector`]: spot tickers from a [`CryptoVenue`].
//!
//! Transport failures and non-200 statuses map to `CambioError::Connector`,
//! bodies that are not JSON to `CambioError::Data`, and JSON of the wrong
//! shape (provider error envelopes) to `CambioError::ProviderRejected`.
#![warn(missing_docs)]

mod crypto;
mod dolarapi;
mod exchangerate;
mod http;

pub use crypto::{CryptoTickerConnector, CryptoVenue};
pub use dolarapi::DolarApiConnector;
pub use exchangerate::ExchangeRateApiConnector;
pub use http::default_client;
