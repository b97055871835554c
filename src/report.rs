// src/report.rs
use tracing::info;

use crate::search::RenderState;

/// Symbols in the panel, with the highlighted one bracketed: `AAPL [AMZN] AMD`.
pub fn candidate_line(state: &RenderState) -> String {
    state
        .candidates
        .iter()
        .enumerate()
        .map(|(i, e)| {
            if state.highlighted == Some(i) {
                format!("[{}]", e.symbol)
            } else {
                e.symbol.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn log_render(widget: &str, state: &RenderState) {
    info!(
        widget = %widget,
        query = %state.raw_query,
        panel_visible = state.panel_visible,
        highlighted = ?state.highlighted,
        catalog_loading = state.catalog_loading,
        candidates = %candidate_line(state),
        "render snapshot"
    );
}
