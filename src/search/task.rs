use anyhow::Result;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::CatalogCache;
use crate::config::Config;
use crate::interaction::{InteractionHub, ListenerGuard, Region};
use crate::search::typeahead::{RenderState, Typeahead};
use crate::types::{Navigation, WidgetEvent};

/// Handles the view layer keeps for one mounted search box.
#[derive(Debug)]
pub struct MountedWidget {
    pub id: Uuid,
    pub events: mpsc::Sender<WidgetEvent>,
    pub render: watch::Receiver<RenderState>,
    handle: JoinHandle<Result<()>>,
}

impl MountedWidget {
    /// Close the event channel and wait for the widget task to finish.
    /// Its outside-interaction listener is gone once this returns.
    pub async fn unmount(self) -> Result<()> {
        drop(self.events);
        self.handle.await?
    }
}

/// Mount a search box: register its outside-interaction listener and spawn
/// the task that drives its state machine.
pub fn mount(
    cfg: &Config,
    cache: &CatalogCache,
    hub: &InteractionHub,
    region: Region,
    nav_tx: mpsc::Sender<Navigation>,
) -> MountedWidget {
    let id = Uuid::new_v4();
    let (events_tx, events_rx) = mpsc::channel(cfg.event_buffer);
    let (render_tx, render_rx) = watch::channel(Typeahead::new(cfg.max_candidates).render());

    let guard = hub.register(id, region, &events_tx);

    let handle = {
        let cfg = cfg.clone();
        let cache = cache.clone();
        tokio::spawn(async move {
            run_widget(cfg, cache, events_rx, nav_tx, render_tx, guard).await
        })
    };

    info!(widget = %id, "search widget mounted");

    MountedWidget {
        id,
        events: events_tx,
        render: render_rx,
        handle,
    }
}

/// Event loop of one search box.
///
/// Runs until every sender of `events` is gone. Each event is handled to
/// completion before the next one; catalog arrival re-matches the current
/// query between events.
pub async fn run_widget(
    cfg: Config,
    cache: CatalogCache,
    mut events: mpsc::Receiver<WidgetEvent>,
    nav_tx: mpsc::Sender<Navigation>,
    render_tx: watch::Sender<RenderState>,
    guard: ListenerGuard,
) -> Result<()> {
    let id = guard.id();
    let mut catalog_rx = cache.subscribe();
    let mut ta = Typeahead::new(cfg.max_candidates);

    let status = catalog_rx.borrow_and_update().clone();
    ta.on_catalog(&status);

    // Start (or join) the catalog load without holding up keystrokes.
    {
        let cache = cache.clone();
        tokio::spawn(async move {
            let _ = cache.ensure_loaded().await;
        });
    }

    render_tx.send_replace(ta.render());

    loop {
        tokio::select! {
            ev = events.recv() => {
                let Some(ev) = ev else { break; };
                debug!(widget = %id, ?ev, "widget event");

                if let Some(nav) = ta.handle(ev) {
                    info!(widget = %id, symbol = %nav.symbol, path = %nav.path(), "navigate to ticker");
                    if nav_tx.send(nav).await.is_err() {
                        warn!(widget = %id, "navigation receiver dropped");
                    }
                }
            }
            Ok(()) = catalog_rx.changed() => {
                let status = catalog_rx.borrow_and_update().clone();
                debug!(widget = %id, loading = status.is_loading(), "catalog status changed");
                ta.on_catalog(&status);
            }
        }

        render_tx.send_replace(ta.render());
    }

    drop(guard);
    info!(widget = %id, "search widget unmounted");
    Ok(())
}
