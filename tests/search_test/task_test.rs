use crate::common::{MockSource, aapl_amzn, wait_for_render};
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::sync::mpsc;

use ticker_search::interaction::{Point, Region};
use ticker_search::search;
use ticker_search::types::WidgetEvent;
use ticker_search::{CatalogCache, Config, InteractionHub, Navigation};

const REGION: Region = Region {
    x: 0.0,
    y: 0.0,
    width: 100.0,
    height: 40.0,
};

#[tokio::test]
async fn test_widget_rematches_when_catalog_arrives() {
    let (source, gate) = MockSource::new(aapl_amzn()).gated();
    let cache = CatalogCache::new(source);
    let hub = InteractionHub::new();
    let (nav_tx, mut nav_rx) = mpsc::channel(8);

    let mut widget = search::mount(&Config::default(), &cache, &hub, REGION, nav_tx);
    wait_for_render(&mut widget.render, |s| s.catalog_loading).await;

    // Typing while the catalog is still loading never waits for it.
    widget.events.send(WidgetEvent::Input("A".into())).await.unwrap();
    let r = wait_for_render(&mut widget.render, |s| s.raw_query == "A").await;
    assert!(r.candidates.is_empty());
    assert!(r.panel_visible);

    gate.notify_one();
    let r = wait_for_render(&mut widget.render, |s| !s.catalog_loading && s.candidates.len() == 2).await;
    assert_eq!(r.raw_query, "A");

    widget.events.send(WidgetEvent::ArrowDown).await.unwrap();
    widget.events.send(WidgetEvent::Enter).await.unwrap();

    let nav = tokio::time::timeout(Duration::from_secs(2), nav_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(nav, Navigation::new("AAPL"));

    let r = wait_for_render(&mut widget.render, |s| !s.panel_visible).await;
    assert_eq!(r.raw_query, "");

    widget.unmount().await.unwrap();
}

#[tokio::test]
async fn test_two_widgets_share_one_fetch() {
    let source = MockSource::new(aapl_amzn());
    let calls = source.call_counter();
    let cache = CatalogCache::new(source);
    let hub = InteractionHub::new();
    let (nav_tx, _nav_rx) = mpsc::channel(8);

    let mut first = search::mount(&Config::default(), &cache, &hub, REGION, nav_tx.clone());
    let mut second = search::mount(&Config::default(), &cache, &hub, REGION, nav_tx);

    first.events.send(WidgetEvent::Input("am".into())).await.unwrap();
    second.events.send(WidgetEvent::Input("aa".into())).await.unwrap();

    let r1 = wait_for_render(&mut first.render, |s| s.candidates.len() == 1).await;
    let r2 = wait_for_render(&mut second.render, |s| s.candidates.len() == 1).await;
    assert_eq!(r1.candidates[0].symbol, "AMZN");
    assert_eq!(r2.candidates[0].symbol, "AAPL");
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    first.unmount().await.unwrap();
    second.unmount().await.unwrap();
}

#[tokio::test]
async fn test_outside_pointer_hides_panel_and_unmount_deregisters() {
    let cache = CatalogCache::new(MockSource::new(aapl_amzn()));
    let hub = InteractionHub::new();
    let (nav_tx, _nav_rx) = mpsc::channel(8);

    let mut widget = search::mount(&Config::default(), &cache, &hub, REGION, nav_tx);
    let id = widget.id;
    assert!(hub.is_registered(id));

    widget.events.send(WidgetEvent::Focus).await.unwrap();
    wait_for_render(&mut widget.render, |s| s.panel_visible).await;

    // Inside the widget: nobody is told.
    assert_eq!(hub.pointer_down(Point { x: 10.0, y: 10.0 }), 0);

    assert_eq!(hub.pointer_down(Point { x: 500.0, y: 500.0 }), 1);
    let r = wait_for_render(&mut widget.render, |s| !s.panel_visible).await;
    assert_eq!(r.raw_query, "");

    widget.unmount().await.unwrap();
    assert!(!hub.is_registered(id));
    assert!(hub.is_empty());
}

#[tokio::test]
async fn test_submit_unknown_symbol_through_widget() {
    let cache = CatalogCache::new(MockSource::new(Vec::new()));
    let hub = InteractionHub::new();
    let (nav_tx, mut nav_rx) = mpsc::channel(8);

    let widget = search::mount(&Config::default(), &cache, &hub, REGION, nav_tx);
    widget.events.send(WidgetEvent::Input("tsla".into())).await.unwrap();
    widget.events.send(WidgetEvent::Submit).await.unwrap();

    let nav = tokio::time::timeout(Duration::from_secs(2), nav_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(nav.symbol, "TSLA");
    assert_eq!(nav.path(), "/stock/TSLA");

    widget.unmount().await.unwrap();
}
