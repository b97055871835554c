use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ticker_search::interaction::{Point, Region};
use ticker_search::search::{self, RenderState};
use ticker_search::types::{Navigation, WidgetEvent};
use ticker_search::{CatalogCache, Config, HttpTickerSource, InteractionHub, report};

// Where the demo pretends the search box sits on screen.
const WIDGET_REGION: Region = Region {
    x: 0.0,
    y: 0.0,
    width: 480.0,
    height: 320.0,
};
const OUTSIDE_POINT: Point = Point { x: 900.0, y: 900.0 };

enum ScriptLine {
    Event(WidgetEvent),
    PointerOutside,
    Quit,
}

/// One stdin line -> one action. Plain text is typed into the box.
fn parse_line(line: &str, render: &RenderState) -> Option<ScriptLine> {
    let cmd = line.trim_end_matches(['\r', '\n']);
    let ev = match cmd {
        ":down" => WidgetEvent::ArrowDown,
        ":up" => WidgetEvent::ArrowUp,
        ":enter" => WidgetEvent::Enter,
        ":esc" => WidgetEvent::Escape,
        ":focus" => WidgetEvent::Focus,
        ":submit" => WidgetEvent::Submit,
        ":outside" => return Some(ScriptLine::PointerOutside),
        ":quit" => return Some(ScriptLine::Quit),
        _ => {
            if let Some(n) = cmd.strip_prefix(":click ") {
                let idx: usize = n.trim().parse().ok()?;
                let entry = render.candidates.get(idx)?.clone();
                WidgetEvent::CandidateClick(entry)
            } else {
                WidgetEvent::Input(cmd.to_string())
            }
        }
    };
    Some(ScriptLine::Event(ev))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Basic logging: set RUST_LOG=info (or debug) to see output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = Config::from_env()?;

    let source = HttpTickerSource::new(&cfg).context("building HTTP client")?;
    info!(url = %source.url(), "ticker listing endpoint");

    let cache = CatalogCache::new(source);
    let hub = InteractionHub::new();

    // Router stand-in: the page loader would resolve these paths.
    let (nav_tx, mut nav_rx) = mpsc::channel::<Navigation>(cfg.event_buffer);
    tokio::spawn(async move {
        while let Some(nav) = nav_rx.recv().await {
            info!(symbol = %nav.symbol, path = %nav.path(), "router: navigate");
        }
    });

    let widget = search::mount(&cfg, &cache, &hub, WIDGET_REGION, nav_tx);

    // View stand-in: log every render snapshot.
    {
        let mut render = widget.render.clone();
        let name = widget.id.to_string();
        tokio::spawn(async move {
            while render.changed().await.is_ok() {
                let state = render.borrow_and_update().clone();
                report::log_render(&name, &state);
            }
        });
    }

    info!("type a query, or :down :up :enter :esc :focus :submit :click N :outside :quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let render = widget.render.borrow().clone();
        match parse_line(&line, &render) {
            Some(ScriptLine::Event(ev)) => {
                widget
                    .events
                    .send(ev)
                    .await
                    .context("search widget stopped")?;
            }
            Some(ScriptLine::PointerOutside) => {
                hub.pointer_down(OUTSIDE_POINT);
            }
            Some(ScriptLine::Quit) => break,
            None => warn!("ignored line: {line:?}"),
        }
    }

    widget.unmount().await?;
    info!(listeners = hub.len(), "bye");
    Ok(())
}
