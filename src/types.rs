use serde::{Deserialize, Serialize};

/// Maximum number of suggestions shown under the search box.
pub const MAX_CANDIDATES: usize = 8;

/// Route prefix the router uses for a ticker page.
pub const STOCK_ROUTE: &str = "/stock";

/// One known ticker as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickerEntry {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub description: String,
}

impl TickerEntry {
    pub fn new(symbol: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            description: description.into(),
        }
    }
}

/// Events a mounted search widget reacts to.
///
/// The platform layer translates raw key/pointer input into these and pushes
/// them through the widget's event channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    Input(String),
    Focus,
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    OutsideInteraction,
    Submit,
    CandidateClick(TickerEntry),
}

/// "Navigate to ticker" effect emitted when the user confirms a symbol.
///
/// The symbol is uppercased but never checked against the catalog; the
/// destination page owns the "not found" case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub symbol: String,
}

impl Navigation {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self { symbol: symbol.into() }
    }

    /// Router path for the destination page, e.g. `/stock/AAPL`.
    pub fn path(&self) -> String {
        format!("{}/{}", STOCK_ROUTE, self.symbol)
    }
}
