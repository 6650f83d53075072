/// Errors raised while scraping a league's source page.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{league} stadium table not found on the page")]
    TableNotFound { league: &'static str },

    #[error("row {row}: {reason}")]
    RowExtraction { row: usize, reason: String },
}

/// Errors from a single geocoding lookup. Always absorbed by the resolver.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("geocoder request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("geocoder returned HTTP {0}")]
    Status(u16),

    #[error("invalid coordinate {field}={value:?}")]
    Coordinate { field: &'static str, value: String },
}
