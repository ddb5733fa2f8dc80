/// Crypto basket selection over venue tickers.
pub mod basket;
/// Zero/missing substitutions between local rate codes.
pub mod fallback;
/// Base-table seeding and local override merge.
pub mod merge;
/// Category dispatch from raw quotes to rate codes.
pub mod normalize;
/// Final snapshot assembly.
pub mod snapshot;
