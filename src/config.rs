use std::env;

use anyhow::{Context, Result};
use tracing::warn;

use crate::types::MAX_CANDIDATES;

/// Search widget + catalog loader settings.
///
/// Defaults match the local backend the frontend talks to during development.
/// Anything here can be overridden from the environment (or a `.env` file),
/// see [`Config::from_env`].
#[derive(Debug, Clone)]
pub struct Config {
    // Base URL of the news/stock API (no trailing slash needed).
    pub api_base_url: String,

    // Path of the ticker listing endpoint, appended to api_base_url.
    pub tickers_path: String,

    // Transport timeout for the listing request. The loader adds no timeout
    // of its own on top of this.
    pub request_timeout_ms: u64,

    // How many suggestions the panel shows at most. Never above MAX_CANDIDATES.
    pub max_candidates: usize,

    // Capacity of each widget's event channel and of the navigation channel.
    pub event_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            tickers_path: "/api/tickers".to_string(),
            request_timeout_ms: 10_000,
            max_candidates: MAX_CANDIDATES,
            event_buffer: 64,
        }
    }
}

impl Config {
    /// Defaults, overridden by `TICKER_API_URL`, `TICKER_API_TIMEOUT_MS` and
    /// `TICKER_MAX_CANDIDATES` when they are set.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut cfg = Self::default();

        if let Ok(url) = env::var("TICKER_API_URL") {
            cfg.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Ok(ms) = env::var("TICKER_API_TIMEOUT_MS") {
            cfg.request_timeout_ms = ms
                .trim()
                .parse()
                .with_context(|| format!("TICKER_API_TIMEOUT_MS is not a number: {ms:?}"))?;
        }
        if let Ok(n) = env::var("TICKER_MAX_CANDIDATES") {
            let requested: usize = n
                .trim()
                .parse()
                .with_context(|| format!("TICKER_MAX_CANDIDATES is not a number: {n:?}"))?;
            if requested > MAX_CANDIDATES {
                warn!(requested, max = MAX_CANDIDATES, "TICKER_MAX_CANDIDATES clamped");
            }
            cfg.max_candidates = requested.min(MAX_CANDIDATES);
        }

        Ok(cfg)
    }

    pub fn tickers_url(&self) -> String {
        format!(
            "{}{}",
            self.api_base_url.trim_end_matches('/'),
            self.tickers_path
        )
    }
}
