use std::fmt;

/// Failure while loading the ticker catalog.
///
/// Every variant is recoverable: callers fall back to an empty catalog and the
/// next `ensure_loaded` retries.
#[derive(Debug)]
pub enum CatalogError {
    RequestError(reqwest::Error),
    ParseError(serde_json::Error),
    Status(u16, String),
    Other(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::RequestError(e) => write!(f, "Request error: {}", e),
            CatalogError::ParseError(e) => write!(f, "Parse error: {}", e),
            CatalogError::Status(code, body) => write!(f, "HTTP {}: {}", code, body),
            CatalogError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::RequestError(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::ParseError(err)
    }
}
