use crate::types::{RateTable, RawQuote, RuleTable};

/// Derive rate codes from a provider's raw quotes.
///
/// Each quote's category is looked up in `rules`; unknown categories are
/// ignored. Writes are last-wins per code, and a derived value that cannot be
/// stored (non-finite or negative) leaves the code absent.
pub fn normalize_quotes<'a, I>(quotes: I, rules: &RuleTable) -> RateTable
where
    I: IntoIterator<Item = &'a RawQuote>,
{
    let mut out = RateTable::new();
    for q in quotes {
        let Some(cat) = rules.get(&q.category) else {
            continue;
        };
        let value = cat.rule.apply(q);
        if !out.insert(cat.code.as_str(), value) {
            out.remove(&cat.code);
            #[cfg(feature = "tracing")]
            tracing::warn!(
                category = %q.category,
                code = %cat.code,
                value,
                "dropping derived rate that is not a finite non-negative number"
            );
        }
    }
    out
}
