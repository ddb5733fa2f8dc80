use crate::types::{FallbackRule, RateTable, Substitution};

/// Apply a single fallback rule in place.
///
/// When the target code is zero or missing it takes the fallback code's value
/// and the substitution is returned. When the fallback code is missing too,
/// the target ends up absent.
pub fn resolve_fallback(table: &mut RateTable, rule: &FallbackRule) -> Option<Substitution> {
    if table.get(&rule.target).is_some_and(|v| v != 0.0) {
        return None;
    }

    let Some(value) = table.get(&rule.fallback) else {
        if table.remove(&rule.target).is_some() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                target_code = %rule.target,
                fallback_code = %rule.fallback,
                "rate is zero and its fallback is unavailable; leaving it out"
            );
        }
        return None;
    };

    table.insert(rule.target.as_str(), value);
    #[cfg(feature = "tracing")]
    tracing::info!(
        target_code = %rule.target,
        fallback_code = %rule.fallback,
        value,
        "rate unavailable, substituting fallback"
    );
    Some(Substitution {
        target: rule.target.clone(),
        fallback: rule.fallback.clone(),
        value,
    })
}

/// Apply `rules` in order and collect the substitutions that happened.
pub fn resolve_fallbacks(table: &mut RateTable, rules: &[FallbackRule]) -> Vec<Substitution> {
    rules
        .iter()
        .filter_map(|r| resolve_fallback(table, r))
        .collect()
}
