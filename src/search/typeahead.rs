use std::sync::Arc;

use crate::catalog::{Catalog, CatalogStatus};
use crate::search::matcher;
use crate::types::{MAX_CANDIDATES, Navigation, TickerEntry, WidgetEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Panel hidden.
    Idle,
    /// Panel shown, nothing highlighted (candidates may be empty).
    Editing,
    /// Panel shown with a keyboard highlight.
    Navigating,
}

/// Everything the view needs to draw the box and the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub raw_query: String,
    pub candidates: Vec<TickerEntry>,
    pub highlighted: Option<usize>,
    pub panel_visible: bool,
    pub catalog_loading: bool,
}

/// Selection state of one search box.
///
/// Every handler runs to completion synchronously. `highlighted` is either
/// `None` or a valid index into `candidates`.
#[derive(Debug, Clone)]
pub struct Typeahead {
    raw_query: String,
    candidates: Vec<TickerEntry>,
    highlighted: Option<usize>,
    panel_visible: bool,

    catalog: Arc<Catalog>,
    catalog_loading: bool,
    max_candidates: usize,
}

impl Default for Typeahead {
    fn default() -> Self {
        Self::new(MAX_CANDIDATES)
    }
}

impl Typeahead {
    /// `max_candidates` is clamped to [`MAX_CANDIDATES`].
    pub fn new(max_candidates: usize) -> Self {
        Self {
            raw_query: String::new(),
            candidates: Vec::new(),
            highlighted: None,
            panel_visible: false,
            catalog: Arc::new(Catalog::empty()),
            catalog_loading: false,
            max_candidates: max_candidates.min(MAX_CANDIDATES),
        }
    }

    /// Start from a known catalog (e.g. one already in the cache at mount).
    pub fn with_catalog(max_candidates: usize, catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            ..Self::new(max_candidates)
        }
    }

    pub fn mode(&self) -> Mode {
        if !self.panel_visible {
            Mode::Idle
        } else if self.highlighted.is_some() {
            Mode::Navigating
        } else {
            Mode::Editing
        }
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    pub fn candidates(&self) -> &[TickerEntry] {
        &self.candidates
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_entry(&self) -> Option<&TickerEntry> {
        self.highlighted.and_then(|i| self.candidates.get(i))
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn render(&self) -> RenderState {
        RenderState {
            raw_query: self.raw_query.clone(),
            candidates: self.candidates.clone(),
            highlighted: self.highlighted,
            panel_visible: self.panel_visible,
            catalog_loading: self.catalog_loading,
        }
    }

    /// Dispatch one widget event. Returns the navigation it produced, if any.
    ///
    /// Enter with nothing highlighted falls through to form submission.
    pub fn handle(&mut self, event: WidgetEvent) -> Option<Navigation> {
        match event {
            WidgetEvent::Input(text) => {
                self.on_input(text);
                None
            }
            WidgetEvent::Focus => {
                self.on_focus();
                None
            }
            WidgetEvent::ArrowDown => {
                self.on_arrow_down();
                None
            }
            WidgetEvent::ArrowUp => {
                self.on_arrow_up();
                None
            }
            WidgetEvent::Enter => self.on_enter().or_else(|| self.on_submit()),
            WidgetEvent::Escape => {
                self.on_escape();
                None
            }
            WidgetEvent::OutsideInteraction => {
                self.on_outside_interaction();
                None
            }
            WidgetEvent::Submit => self.on_submit(),
            WidgetEvent::CandidateClick(entry) => Some(self.on_candidate_click(&entry)),
        }
    }

    pub fn on_input(&mut self, text: impl Into<String>) {
        self.raw_query = text.into();
        self.candidates =
            matcher::find_matches_limited(&self.catalog, &self.raw_query, self.max_candidates);
        self.panel_visible = true;
        self.highlighted = None;
    }

    pub fn on_focus(&mut self) {
        self.panel_visible = true;
    }

    pub fn on_arrow_down(&mut self) {
        if !self.panel_visible || self.candidates.is_empty() {
            return;
        }
        let last = self.candidates.len() - 1;
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    pub fn on_arrow_up(&mut self) {
        // 0 steps back to "nothing highlighted"; no wraparound.
        self.highlighted = match self.highlighted {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Confirm the highlighted candidate. `None` when nothing is highlighted.
    pub fn on_enter(&mut self) -> Option<Navigation> {
        let symbol = self.highlighted_entry()?.symbol.clone();
        Some(self.confirm(symbol))
    }

    // Hiding the panel drops the highlight, so a later Enter submits the text.
    pub fn on_escape(&mut self) {
        self.hide_panel();
    }

    pub fn on_outside_interaction(&mut self) {
        self.hide_panel();
    }

    /// Submit whatever is typed, catalog member or not.
    pub fn on_submit(&mut self) -> Option<Navigation> {
        let symbol = matcher::normalize_query(&self.raw_query)?;
        Some(self.confirm(symbol))
    }

    pub fn on_candidate_click(&mut self, entry: &TickerEntry) -> Navigation {
        self.confirm(entry.symbol.trim().to_ascii_uppercase())
    }

    /// Take a new cache status into account.
    ///
    /// When the catalog changes the current query is matched again; the
    /// highlight follows its entry if it is still listed, else it is cleared.
    pub fn on_catalog(&mut self, status: &CatalogStatus) {
        self.catalog_loading = status.is_loading();

        let Some(catalog) = status.populated() else {
            return;
        };
        if Arc::ptr_eq(catalog, &self.catalog) {
            return;
        }
        self.catalog = catalog.clone();

        let fresh =
            matcher::find_matches_limited(&self.catalog, &self.raw_query, self.max_candidates);
        self.highlighted = self
            .highlighted_entry()
            .and_then(|prev| fresh.iter().position(|e| e == prev));
        self.candidates = fresh;
    }

    fn hide_panel(&mut self) {
        self.panel_visible = false;
        self.highlighted = None;
    }

    // Back to an idle box after a confirmation.
    fn confirm(&mut self, symbol: String) -> Navigation {
        self.raw_query.clear();
        self.candidates.clear();
        self.highlighted = None;
        self.panel_visible = false;
        Navigation::new(symbol)
    }
}
