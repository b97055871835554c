use crate::common::{aapl_amzn, sample_catalog};
use ticker_search::search::matcher::{find_matches, find_matches_limited, is_match, normalize_query};
use ticker_search::types::MAX_CANDIDATES;
use ticker_search::{Catalog, TickerEntry};

const QUERIES: &[&str] = &[
    "a", "A", "aa", "am", "inc", "corp", " ms ", "micro", "x", "zzz", "N", "Inc.", "p", "PAY",
];

fn symbols(entries: &[TickerEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.symbol.as_str()).collect()
}

#[test]
fn test_every_result_satisfies_predicate_and_cap() {
    let catalog = sample_catalog();
    for q in QUERIES {
        let upper = q.trim().to_ascii_uppercase();
        let found = find_matches(&catalog, q);
        assert!(found.len() <= MAX_CANDIDATES, "query {q:?} returned {}", found.len());
        for e in &found {
            assert!(
                e.symbol.starts_with(&upper) || e.description.to_ascii_uppercase().contains(&upper),
                "{} does not match {q:?}",
                e.symbol
            );
        }
    }
}

#[test]
fn test_empty_query_matches_nothing() {
    let catalog = sample_catalog();
    assert!(find_matches(&catalog, "").is_empty());
    assert!(find_matches(&catalog, "   ").is_empty());
    assert!(find_matches(&Catalog::empty(), "").is_empty());
    assert_eq!(normalize_query(" \t"), None);
}

#[test]
fn test_results_keep_catalog_order() {
    let catalog = sample_catalog();
    for q in QUERIES {
        let found = find_matches(&catalog, q);
        let positions: Vec<usize> = found
            .iter()
            .map(|f| catalog.entries().iter().position(|e| e == f).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {q:?} reordered results");
    }
}

#[test]
fn test_matching_is_idempotent() {
    let catalog = sample_catalog();
    for q in QUERIES {
        assert_eq!(find_matches(&catalog, q), find_matches(&catalog, q));
    }
}

#[test]
fn test_results_are_the_first_matches_in_order() {
    // "inc" hits most descriptions; only the first 8 in catalog order survive.
    let catalog = sample_catalog();
    let all: Vec<&TickerEntry> = catalog
        .entries()
        .iter()
        .filter(|e| is_match(e, "INC"))
        .collect();
    assert!(all.len() > MAX_CANDIDATES);

    let found = find_matches(&catalog, "inc");
    assert_eq!(found.len(), MAX_CANDIDATES);
    for (f, e) in found.iter().zip(all) {
        assert_eq!(f, e);
    }
}

#[test]
fn test_prefix_vs_substring() {
    let catalog = Catalog::from_entries(aapl_amzn());
    assert_eq!(symbols(&find_matches(&catalog, "A")), vec!["AAPL", "AMZN"]);
    assert_eq!(symbols(&find_matches(&catalog, "AA")), vec!["AAPL"]);
    // Symbol match is prefix only: "ZN" is inside AMZN but not at the start.
    assert!(find_matches(&catalog, "ZN").is_empty());
    // Description match is substring, case-insensitive.
    assert_eq!(symbols(&find_matches(&catalog, "azon")), vec!["AMZN"]);
    assert_eq!(symbols(&find_matches(&catalog, "apple")), vec!["AAPL"]);
}

#[test]
fn test_query_is_trimmed_and_uppercased() {
    let catalog = sample_catalog();
    assert_eq!(symbols(&find_matches(&catalog, "  msft ")), vec!["MSFT"]);
    assert_eq!(normalize_query(" nvda "), Some("NVDA".to_string()));
}

#[test]
fn test_explicit_limit() {
    let catalog = sample_catalog();
    assert_eq!(find_matches_limited(&catalog, "inc", 3).len(), 3);
    assert!(find_matches_limited(&catalog, "inc", 0).is_empty());
    assert_eq!(find_matches_limited(&catalog, "i", 20).len(), MAX_CANDIDATES);
}
