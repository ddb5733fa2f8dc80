//! cambio-core
//!
//! Core types, traits, and the rate engine shared across the cambio workspace.
//!
//! - `types`: re-exports of the data transfer objects from `cambio-types`.
//! - `connector`: the `RateConnector` trait and the source role traits.
//! - `rates`: the pure engine that turns provider quotes into a snapshot.
//! - `clock`: time source used to stamp snapshots.
//!
//! Nothing in this crate performs I/O. Connectors live in `cambio-http` and
//! `cambio-mock`; sequencing and failure policy live in `cambio`.
#![warn(missing_docs)]

/// Time source abstraction.
pub mod clock;
/// Connector role traits and the primary `RateConnector` interface.
pub mod connector;
/// Normalization, fallback, basket filtering, merging, and snapshot assembly.
pub mod rates;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use connector::RateConnector;
pub use rates::basket::filter_basket;
pub use rates::fallback::{resolve_fallback, resolve_fallbacks};
pub use rates::merge::merge_rates;
pub use rates::normalize::normalize_quotes;
pub use rates::snapshot::build_snapshot;
pub use types::*;
