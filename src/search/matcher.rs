use crate::catalog::Catalog;
use crate::types::{MAX_CANDIDATES, TickerEntry};

/// Normalize raw box text into the form entries are compared against.
/// `None` means there is nothing to match.
pub fn normalize_query(raw_query: &str) -> Option<String> {
    let q = raw_query.trim();
    if q.is_empty() {
        None
    } else {
        Some(q.to_ascii_uppercase())
    }
}

/// Symbol prefix OR description substring, both against the uppercased query.
pub fn is_match(entry: &TickerEntry, query_upper: &str) -> bool {
    entry.symbol.starts_with(query_upper)
        || entry.description.to_ascii_uppercase().contains(query_upper)
}

/// Suggestions for `raw_query`, in catalog order, at most [`MAX_CANDIDATES`].
pub fn find_matches(catalog: &Catalog, raw_query: &str) -> Vec<TickerEntry> {
    find_matches_limited(catalog, raw_query, MAX_CANDIDATES)
}

/// Same as [`find_matches`] with a smaller cap. `limit` above
/// [`MAX_CANDIDATES`] is treated as [`MAX_CANDIDATES`].
///
/// Stops scanning as soon as `limit` entries matched.
pub fn find_matches_limited(catalog: &Catalog, raw_query: &str, limit: usize) -> Vec<TickerEntry> {
    let Some(query) = normalize_query(raw_query) else {
        return Vec::new();
    };

    catalog
        .entries()
        .iter()
        .filter(|e| is_match(e, &query))
        .take(limit.min(MAX_CANDIDATES))
        .cloned()
        .collect()
}
