//! cache.rs
//!
//! Process-wide ticker catalog with a single-flight load guard.
//!
//! - The first `ensure_loaded` spawns the one and only fetch and memoizes it as
//!   a shared future; callers arriving while it runs await that same future.
//! - A successful load is stored forever (no refresh). A failed load is NOT
//!   stored: the phase drops back to `Absent` so the next call retries.
//! - Status changes are published on a watch channel so widgets can re-match
//!   when the catalog arrives instead of waiting for the next keystroke.

use chrono::Utc;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use std::fmt;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::errors::CatalogError;

/// Outcome every waiter of one load attempt receives.
pub type LoadResult = Result<Arc<Catalog>, Arc<CatalogError>>;

type InFlight = Shared<BoxFuture<'static, LoadResult>>;

/// Anything that can produce the full ticker listing.
pub trait TickerSource: Send + Sync + 'static {
    fn fetch(&self) -> BoxFuture<'_, Result<Catalog, CatalogError>>;
}

/// What widgets observe about the cache.
#[derive(Debug, Clone)]
pub enum CatalogStatus {
    Absent,
    Loading,
    Populated(Arc<Catalog>),
}

impl CatalogStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogStatus::Loading)
    }

    pub fn populated(&self) -> Option<&Arc<Catalog>> {
        match self {
            CatalogStatus::Populated(c) => Some(c),
            _ => None,
        }
    }
}

enum Phase {
    Absent,
    Loading(InFlight),
    Populated(Arc<Catalog>),
}

struct Inner {
    source: Arc<dyn TickerSource>,
    phase: Mutex<Phase>,
    status: watch::Sender<CatalogStatus>,
}

impl Inner {
    /// Store the result of the current load attempt and wake observers.
    async fn settle(&self, res: Result<Catalog, CatalogError>) -> LoadResult {
        let mut phase = self.phase.lock().await;
        match res {
            Ok(catalog) => {
                let catalog = Arc::new(catalog.fetched(Utc::now()));
                info!(tickers = catalog.len(), "ticker catalog loaded");
                *phase = Phase::Populated(catalog.clone());
                self.status
                    .send_replace(CatalogStatus::Populated(catalog.clone()));
                Ok(catalog)
            }
            Err(e) => {
                warn!("ticker catalog load failed (will retry on next request): {e}");
                *phase = Phase::Absent;
                self.status.send_replace(CatalogStatus::Absent);
                Err(Arc::new(e))
            }
        }
    }
}

/// Cheap-to-clone handle on the shared catalog. Clone it into every widget.
#[derive(Clone)]
pub struct CatalogCache {
    inner: Arc<Inner>,
}

impl fmt::Debug for CatalogCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogCache")
            .field("status", &*self.inner.status.borrow())
            .finish()
    }
}

impl CatalogCache {
    pub fn new(source: impl TickerSource) -> Self {
        Self::with_source(Arc::new(source))
    }

    pub fn with_source(source: Arc<dyn TickerSource>) -> Self {
        let (status, _) = watch::channel(CatalogStatus::Absent);
        Self {
            inner: Arc::new(Inner {
                source,
                phase: Mutex::new(Phase::Absent),
                status,
            }),
        }
    }

    /// Return the catalog, fetching it if nobody has yet.
    ///
    /// At most one fetch is ever in flight; concurrent callers share its
    /// result, failure included.
    pub async fn ensure_loaded(&self) -> LoadResult {
        let in_flight = {
            let mut phase = self.inner.phase.lock().await;
            let joined = match &*phase {
                Phase::Populated(c) => return Ok(c.clone()),
                Phase::Loading(f) => Some(f.clone()),
                Phase::Absent => None,
            };
            match joined {
                Some(f) => {
                    debug!("ticker catalog load already in flight, joining");
                    f
                }
                None => {
                    let f = self.start_load();
                    *phase = Phase::Loading(f.clone());
                    self.inner.status.send_replace(CatalogStatus::Loading);
                    f
                }
            }
        };

        in_flight.await
    }

    /// Like [`ensure_loaded`](Self::ensure_loaded) but falls back to an empty
    /// catalog. The failure has already been logged by the load itself.
    pub async fn load_or_empty(&self) -> Arc<Catalog> {
        self.ensure_loaded()
            .await
            .unwrap_or_else(|_| Arc::new(Catalog::empty()))
    }

    // Caller must hold the phase lock and set Phase::Loading with the result.
    fn start_load(&self) -> InFlight {
        info!("fetching ticker catalog");

        let task_inner = self.inner.clone();
        let handle = tokio::spawn(async move {
            let res = task_inner.source.fetch().await;
            task_inner.settle(res).await
        });

        let inner = self.inner.clone();
        async move {
            match handle.await {
                Ok(res) => res,
                // The fetch task died before settling; settle on its behalf.
                Err(e) => {
                    inner
                        .settle(Err(CatalogError::Other(format!(
                            "catalog load task failed: {e}"
                        ))))
                        .await
                }
            }
        }
        .boxed()
        .shared()
    }

    /// Current status, without waiting.
    pub fn status(&self) -> CatalogStatus {
        self.inner.status.borrow().clone()
    }

    /// Whatever catalog is usable right now: the loaded one, or empty.
    pub fn snapshot(&self) -> Arc<Catalog> {
        match &*self.inner.status.borrow() {
            CatalogStatus::Populated(c) => c.clone(),
            _ => Arc::new(Catalog::empty()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.inner.status.borrow().is_loading()
    }

    /// Observe status transitions (absent → loading → populated).
    pub fn subscribe(&self) -> watch::Receiver<CatalogStatus> {
        self.inner.status.subscribe()
    }
}
