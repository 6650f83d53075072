use crate::parser::corrections::NCAA_LOCATION_FIXES;
use crate::parser::normalize::Footnotes;
use crate::parser::table::{CellText, Columns, RowLayout, TableSelection};

/// What a failure to fetch the page or find its table does to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Stop the run; leagues already scraped are kept.
    Fatal,
    /// Leave this league empty and move on.
    Skip,
}

/// Everything that differs between leagues. The pipeline itself is shared.
#[derive(Debug, Clone, Copy)]
pub struct LeagueConfig {
    /// Key of the league's mapping in the output dataset.
    pub key: &'static str,
    pub url: &'static str,
    pub selection: TableSelection,
    pub layout: RowLayout,
    pub footnotes: Footnotes,
    pub corrections: &'static [(&'static str, &'static str)],
    pub on_failure: FailureMode,
}

pub const NFL: LeagueConfig = LeagueConfig {
    key: "nfl",
    url: "https://en.wikipedia.org/wiki/List_of_current_National_Football_League_stadiums",
    selection: TableSelection::Keywords(&["Stadium"]),
    layout: RowLayout {
        columns: Columns::NameTeamLocation {
            name: 1,
            team: 2,
            location: 3,
        },
        // Three cells pass the check even though cell 3 is read.
        min_cells: 3,
        text: CellText::Trimmed,
    },
    footnotes: Footnotes::Alphanumeric,
    corrections: &[],
    on_failure: FailureMode::Fatal,
};

pub const NCAA: LeagueConfig = LeagueConfig {
    key: "ncaa",
    url: "https://en.wikipedia.org/wiki/List_of_NCAA_Division_I_FBS_football_stadiums",
    selection: TableSelection::First,
    layout: RowLayout {
        columns: Columns::CityState {
            name: 1,
            city: 2,
            state: 3,
            team: 4,
        },
        min_cells: 5,
        text: CellText::Trimmed,
    },
    footnotes: Footnotes::Alphanumeric,
    corrections: NCAA_LOCATION_FIXES,
    on_failure: FailureMode::Fatal,
};

pub const MLB: LeagueConfig = LeagueConfig {
    key: "mlb",
    url: "https://en.wikipedia.org/wiki/List_of_current_Major_League_Baseball_stadiums",
    selection: TableSelection::Keywords(&["Name", "Team"]),
    layout: RowLayout {
        // 0 image, 1 name, 2 capacity, 3 location, 4 surface, 5 team
        columns: Columns::NameTeamLocation {
            name: 1,
            team: 5,
            location: 3,
        },
        min_cells: 6,
        text: CellText::Stripped,
    },
    footnotes: Footnotes::Any,
    corrections: &[],
    on_failure: FailureMode::Fatal,
};

pub const MLS: LeagueConfig = LeagueConfig {
    key: "mls",
    url: "https://en.wikipedia.org/wiki/List_of_Major_League_Soccer_stadiums",
    selection: TableSelection::Keywords(&["Stadium", "Team", "Location"]),
    layout: RowLayout {
        columns: Columns::NameTeamLocation {
            name: 1,
            team: 2,
            location: 3,
        },
        min_cells: 4,
        text: CellText::Stripped,
    },
    footnotes: Footnotes::Any,
    corrections: &[],
    on_failure: FailureMode::Skip,
};

/// A dataset written by one run: its leagues and default file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// NFL and NCAA football.
    Stadiums,
    /// MLB and MLS.
    MoreStadiums,
}

impl Variant {
    pub fn leagues(self) -> &'static [LeagueConfig] {
        match self {
            Variant::Stadiums => &[NFL, NCAA],
            Variant::MoreStadiums => &[MLB, MLS],
        }
    }

    pub fn output_file(self) -> &'static str {
        match self {
            Variant::Stadiums => "stadium_coordinates.json",
            Variant::MoreStadiums => "more_stadium_coordinates.json",
        }
    }

    pub fn log_file(self) -> &'static str {
        match self {
            Variant::Stadiums => "stadium_scraper.log",
            Variant::MoreStadiums => "more_stadium_scraper.log",
        }
    }
}
