use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

static TABLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table.wikitable").unwrap());
static ROW_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th, td").unwrap());

/// How the venue table is picked among the page's `wikitable`s.
#[derive(Debug, Clone, Copy)]
pub enum TableSelection {
    /// First table whose markup contains every keyword as a substring.
    Keywords(&'static [&'static str]),
    /// First table in document order, no checks.
    First,
}

/// Positional columns of a venue row.
#[derive(Debug, Clone, Copy)]
pub enum Columns {
    NameTeamLocation {
        name: usize,
        team: usize,
        location: usize,
    },
    /// Location is assembled as "{city}, {state}".
    CityState {
        name: usize,
        city: usize,
        state: usize,
        team: usize,
    },
}

/// How a cell's text is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellText {
    /// Full text content, trimmed once.
    Trimmed,
    /// Each text node trimmed, empties dropped, concatenated without separator.
    Stripped,
}

#[derive(Debug, Clone, Copy)]
pub struct RowLayout {
    pub columns: Columns,
    /// Rows with fewer cells are ignored without complaint.
    pub min_cells: usize,
    pub text: CellText,
}

/// One venue as read from the table, before any cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct RawVenue {
    pub row: usize,
    pub name: String,
    pub team: String,
    pub location: String,
}

/// Outcome of reading one data row.
#[derive(Debug, PartialEq)]
pub enum Row {
    Venue(RawVenue),
    /// Fewer cells than the layout's minimum (spacer or sub-header rows).
    Short,
    /// Name, team or location is blank.
    Incomplete,
}

pub fn select_table<'a>(doc: &'a Html, selection: TableSelection) -> Option<ElementRef<'a>> {
    let mut tables = doc.select(&TABLE_SEL);
    match selection {
        TableSelection::First => tables.next(),
        TableSelection::Keywords(keywords) => tables.find(|t| {
            let markup = t.html();
            keywords.iter().all(|kw| markup.contains(kw))
        }),
    }
}

/// Cell texts of every row after the header row.
pub fn data_rows(table: ElementRef<'_>, text: CellText) -> Vec<Vec<String>> {
    table
        .select(&ROW_SEL)
        .skip(1)
        .map(|row| row.select(&CELL_SEL).map(|c| cell_text(c, text)).collect())
        .collect()
}

fn cell_text(cell: ElementRef<'_>, mode: CellText) -> String {
    match mode {
        CellText::Trimmed => cell.text().collect::<String>().trim().to_string(),
        CellText::Stripped => cell
            .text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect(),
    }
}

/// Read a venue out of one row's cells. `row` is 1-based and only used for
/// reporting.
pub fn read_row(row: usize, cells: &[String], layout: &RowLayout) -> Result<Row, ScrapeError> {
    if cells.len() < layout.min_cells {
        return Ok(Row::Short);
    }

    let cell = |idx: usize| cell_at(cells, row, idx);

    let (name, team, location) = match layout.columns {
        Columns::NameTeamLocation {
            name,
            team,
            location,
        } => (cell(name)?, cell(team)?, cell(location)?.to_string()),
        Columns::CityState {
            name,
            city,
            state,
            team,
        } => (
            cell(name)?,
            cell(team)?,
            format!("{}, {}", cell(city)?, cell(state)?),
        ),
    };

    if name.is_empty() || team.is_empty() || location.trim().is_empty() {
        return Ok(Row::Incomplete);
    }

    Ok(Row::Venue(RawVenue {
        row,
        name: name.to_string(),
        team: team.to_string(),
        location,
    }))
}

fn cell_at(cells: &[String], row: usize, idx: usize) -> Result<&str, ScrapeError> {
    cells
        .get(idx)
        .map(|c| c.trim())
        .ok_or_else(|| ScrapeError::RowExtraction {
            row,
            reason: format!("expected cell {} but row has {} cells", idx, cells.len()),
        })
}
