pub mod corrections;
pub mod normalize;
pub mod table;

use scraper::Html;
use tracing::{debug, error, info};

use crate::error::ScrapeError;
use table::{Row, RowLayout, TableSelection};

/// Rows read from a league page's venue table.
#[derive(Debug, Default)]
pub struct ExtractedRows {
    /// Data rows in the table, header excluded.
    pub total: usize,
    /// Rows that failed to read (missing cells).
    pub errors: usize,
    pub venues: Vec<table::RawVenue>,
}

/// Two passes over one page: pick the venue table, then read its rows.
/// Row failures are logged and skipped; only a missing table is an error.
pub fn extract_venues(
    league: &'static str,
    markup: &str,
    selection: TableSelection,
    layout: &RowLayout,
) -> Result<ExtractedRows, ScrapeError> {
    let doc = Html::parse_document(markup);
    let table = table::select_table(&doc, selection).ok_or(ScrapeError::TableNotFound { league })?;

    let rows = table::data_rows(table, layout.text);
    let mut out = ExtractedRows {
        total: rows.len(),
        ..Default::default()
    };
    info!("Found {} {} stadium rows", out.total, league.to_uppercase());

    for (idx, cells) in rows.iter().enumerate() {
        match table::read_row(idx + 1, cells, layout) {
            Ok(Row::Venue(v)) => {
                info!(
                    "Processing: Stadium={}, Team={}, Location={}",
                    v.name,
                    v.team,
                    v.location
                );
                out.venues.push(v);
            }
            Ok(Row::Short) | Ok(Row::Incomplete) => {
                debug!(row = idx + 1, cells = cells.len(), "Skipping row");
            }
            Err(e) => {
                error!("Error processing row {}: {}", idx + 1, e);
                out.errors += 1;
            }
        }
    }

    Ok(out)
}
