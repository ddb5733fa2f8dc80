use crate::types::{CryptoBasket, RateTable, SymbolMap, TickerPrice};

/// Select basket members from a venue ticker list.
///
/// Venue symbols are canonicalised through `symbols`; entries outside the
/// basket are skipped, as are entries whose price text does not parse to a
/// finite non-negative number. Duplicates are last-wins among the entries
/// that parse.
pub fn filter_basket<'a, I>(tickers: I, basket: &CryptoBasket, symbols: &SymbolMap) -> RateTable
where
    I: IntoIterator<Item = &'a TickerPrice>,
{
    let mut out = RateTable::new();
    for t in tickers {
        let Some(canonical) = symbols.canonical(&t.symbol) else {
            continue;
        };
        if !basket.contains(&canonical) {
            continue;
        }
        let Ok(price) = t.price.parse::<f64>() else {
            continue;
        };
        out.insert(canonical, price);
    }
    out
}
