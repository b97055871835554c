//! catalog
//!
//! The set of known tickers the search box matches against.
//!
//! - `Catalog` is an immutable, symbol-unique snapshot.
//! - `cache::CatalogCache` owns the single process-wide snapshot and the
//!   single-flight load guard around it.
//! - `http::HttpTickerSource` fetches the listing from the backend.

pub mod cache;
pub mod http;

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::types::TickerEntry;

pub use cache::{CatalogCache, CatalogStatus, TickerSource};
pub use http::HttpTickerSource;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<TickerEntry>,
    fetched_at: Option<DateTime<Utc>>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from raw listing records.
    ///
    /// Symbols are trimmed and ASCII-uppercased, records without a symbol are
    /// dropped, and the first record wins when a symbol repeats. Order is kept.
    pub fn from_entries(raw: impl IntoIterator<Item = TickerEntry>) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for e in raw {
            let symbol = e.symbol.trim().to_ascii_uppercase();
            if symbol.is_empty() {
                continue;
            }
            if !seen.insert(symbol.clone()) {
                continue;
            }
            entries.push(TickerEntry {
                symbol,
                description: e.description.trim().to_string(),
            });
        }

        Self {
            entries,
            fetched_at: None,
        }
    }

    /// Stamp the snapshot with the time it was fetched.
    pub fn fetched(mut self, at: DateTime<Utc>) -> Self {
        self.fetched_at = Some(at);
        self
    }

    pub fn entries(&self) -> &[TickerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}
