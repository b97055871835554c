use ticker_search::catalog::http::{TickerListing, parse_listing};
use ticker_search::{Catalog, CatalogError, TickerEntry};

#[test]
fn test_wrapped_listing_deserialization() {
    let json = r#"{"tickers":[{"symbol":"AAPL","description":"APPLE INC"},{"symbol":"MSFT","description":"MICROSOFT CORP"}],"count":2}"#;
    let catalog = parse_listing(json).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entries()[0], TickerEntry::new("AAPL", "APPLE INC"));
    assert_eq!(catalog.entries()[1].symbol, "MSFT");
}

#[test]
fn test_bare_listing_deserialization() {
    let json = r#"[{"symbol":"TSLA","description":"Tesla Inc"}]"#;
    let listing: TickerListing = serde_json::from_str(json).unwrap();
    assert!(matches!(listing, TickerListing::Bare(_)));
    assert_eq!(listing.into_entries().len(), 1);
}

#[test]
fn test_empty_listing_deserialization() {
    let catalog = parse_listing(r#"{"tickers":[],"count":0}"#).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn test_missing_description_defaults_to_empty() {
    let catalog = parse_listing(r#"[{"symbol":"IBM"}]"#).unwrap();
    assert_eq!(catalog.entries()[0].description, "");
}

#[test]
fn test_listing_normalizes_symbols() {
    let json = r#"[
        {"symbol":" aapl ","description":"Apple Inc"},
        {"symbol":"","description":"no symbol"},
        {"symbol":"AAPL","description":"duplicate"},
        {"symbol":"brk.b","description":"Berkshire Hathaway"}
    ]"#;
    let catalog = parse_listing(json).unwrap();
    let symbols: Vec<&str> = catalog.entries().iter().map(|e| e.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["AAPL", "BRK.B"]);
    assert_eq!(catalog.entries()[0].description, "Apple Inc");
}

#[test]
fn test_invalid_listing_is_parse_error() {
    let err = parse_listing(r#"{"unexpected":true}"#).unwrap_err();
    assert!(matches!(err, CatalogError::ParseError(_)));

    let err = parse_listing("<html>oops</html>").unwrap_err();
    assert!(matches!(err, CatalogError::ParseError(_)));
}

#[test]
fn test_catalog_from_entries_has_no_fetch_time() {
    let catalog = Catalog::from_entries(vec![TickerEntry::new("NVDA", "NVIDIA Corp")]);
    assert_eq!(catalog.len(), 1);
    assert!(catalog.fetched_at().is_none());
}
