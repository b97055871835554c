use futures_util::future::{BoxFuture, FutureExt};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::catalog::{Catalog, TickerSource};
use crate::config::Config;
use crate::errors::CatalogError;
use crate::types::TickerEntry;

/// Body of `GET /api/tickers`.
///
/// The backend wraps the records as `{"tickers": [...], "count": n}`; a bare
/// array of records is accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TickerListing {
    Wrapped {
        tickers: Vec<TickerEntry>,
        #[serde(default)]
        count: Option<u64>,
    },
    Bare(Vec<TickerEntry>),
}

impl TickerListing {
    pub fn into_entries(self) -> Vec<TickerEntry> {
        match self {
            TickerListing::Wrapped { tickers, .. } => tickers,
            TickerListing::Bare(tickers) => tickers,
        }
    }
}

/// Decode a listing body into a normalized catalog.
pub fn parse_listing(body: &str) -> Result<Catalog, CatalogError> {
    let listing: TickerListing = serde_json::from_str(body)?;
    Ok(Catalog::from_entries(listing.into_entries()))
}

/// Fetches the ticker listing from the news/stock backend.
#[derive(Debug, Clone)]
pub struct HttpTickerSource {
    http_client: Client,
    url: String,
}

impl HttpTickerSource {
    pub fn new(cfg: &Config) -> Result<Self, CatalogError> {
        let http_client = Client::builder()
            .timeout(Duration::from_millis(cfg.request_timeout_ms))
            .build()?;
        Ok(Self::with_client(http_client, cfg.tickers_url()))
    }

    /// Use a preconfigured client (proxy, TLS, headers) against `url`.
    pub fn with_client(http_client: Client, url: impl Into<String>) -> Self {
        Self {
            http_client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get_listing(&self) -> Result<Catalog, CatalogError> {
        debug!(url = %self.url, "GET ticker listing");
        let resp = self.http_client.get(&self.url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16(), body));
        }
        parse_listing(&body)
    }
}

impl TickerSource for HttpTickerSource {
    fn fetch(&self) -> BoxFuture<'_, Result<Catalog, CatalogError>> {
        self.get_listing().boxed()
    }
}
