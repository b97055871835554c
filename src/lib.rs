//! Ticker search
//!
//! Typeahead search box core for the stock news client: the shared ticker
//! catalog, the keystroke matcher and the selection state machine.
//!
//! # Quick Start
//!
//! ```no_run
//! use ticker_search::{CatalogCache, Config, HttpTickerSource, InteractionHub};
//! use ticker_search::interaction::Region;
//! use ticker_search::types::WidgetEvent;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let cfg = Config::from_env()?;
//! let cache = CatalogCache::new(HttpTickerSource::new(&cfg)?);
//! let hub = InteractionHub::new();
//! let (nav_tx, mut nav_rx) = tokio::sync::mpsc::channel(cfg.event_buffer);
//!
//! let widget = ticker_search::search::mount(&cfg, &cache, &hub, Region::new(0.0, 0.0, 480.0, 320.0), nav_tx);
//! widget.events.send(WidgetEvent::Input("aapl".into())).await?;
//! widget.events.send(WidgetEvent::Submit).await?;
//!
//! if let Some(nav) = nav_rx.recv().await {
//!     println!("go to {}", nav.path());
//! }
//! widget.unmount().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Main Components
//!
//! - [`CatalogCache`] - single-flight, observable catalog shared by all widgets
//! - [`search::matcher`] - prefix/substring matching against the catalog
//! - [`search::Typeahead`] - query, candidates, highlight and panel state
//! - [`search::task`] - per-widget event loop
//! - [`InteractionHub`] - outside-click detection

pub mod catalog;        // Catalog, cache and HTTP source
pub mod config;         // Settings (env + defaults)
pub mod errors;         // Error types
pub mod interaction;    // Outside-interaction detection
pub mod report;         // Render snapshot logging
pub mod search;         // Matcher, state machine, widget task
pub mod types;          // Shared value types

pub use catalog::{Catalog, CatalogCache, CatalogStatus, HttpTickerSource, TickerSource};
pub use config::Config;
pub use errors::CatalogError;
pub use interaction::InteractionHub;
pub use types::{Navigation, TickerEntry, WidgetEvent};
