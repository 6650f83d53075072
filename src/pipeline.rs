use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, info_span, warn};

use crate::dataset::{Dataset, LeagueVenues, VenueRecord};
use crate::error::ScrapeError;
use crate::fetch::Fetch;
use crate::geo::{Coordinates, Geocode, Resolver};
use crate::league::{FailureMode, LeagueConfig, Variant};
use crate::parser::corrections::correct_location;
use crate::parser::normalize::normalize;
use crate::parser::extract_venues;
use crate::parser::table::RawVenue;

/// Keeps successive geocoding requests at least `interval` apart.
pub struct Pacer {
    interval: Duration,
    last: Option<Instant>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Pacer {
            interval,
            last: None,
        }
    }

    pub fn wait(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                thread::sleep(self.interval - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Counts for one league, logged when it finishes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueSummary {
    pub league: &'static str,
    /// Data rows in the venue table.
    pub rows: usize,
    pub row_errors: usize,
    /// Rows handed to geocoding.
    pub accepted: usize,
    pub stored: usize,
    pub failed: usize,
}

/// Result of a run: the dataset plus what happened per league.
#[derive(Debug)]
pub struct RunOutcome {
    pub dataset: Dataset,
    pub summaries: Vec<LeagueSummary>,
    /// Set when a fatal league failure stopped the run early.
    pub aborted: Option<(&'static str, ScrapeError)>,
}

pub struct Pipeline<F, G> {
    fetcher: F,
    resolver: Resolver<G>,
    pacer: Pacer,
}

impl<F: Fetch, G: Geocode> Pipeline<F, G> {
    pub fn new(fetcher: F, geocoder: G, rate_limit: Duration) -> Self {
        Pipeline {
            fetcher,
            resolver: Resolver::new(geocoder),
            pacer: Pacer::new(rate_limit),
        }
    }

    pub fn run(&mut self, variant: Variant) -> RunOutcome {
        self.run_leagues(variant.leagues())
    }

    /// Scrape leagues in order. Each league's venues are merged into the
    /// dataset once the league completes.
    pub fn run_leagues(&mut self, leagues: &[LeagueConfig]) -> RunOutcome {
        let mut dataset = Dataset::new(leagues.iter().map(|l| l.key), Local::now());
        let mut summaries = Vec::with_capacity(leagues.len());
        let mut aborted = None;

        for league in leagues {
            let span = info_span!("league", league = league.key);
            let _enter = span.enter();
            info!("Starting {} stadium scraping...", league.key.to_uppercase());

            match self.scrape_league(league) {
                Ok((venues, summary)) => {
                    info!(
                        rows = summary.rows,
                        row_errors = summary.row_errors,
                        failed = summary.failed,
                        "Total {} stadiums collected: {}",
                        league.key.to_uppercase(),
                        summary.stored
                    );
                    dataset.merge(league.key, venues);
                    summaries.push(summary);
                }
                Err(e) => match league.on_failure {
                    FailureMode::Skip => {
                        warn!("Skipping {} stadiums: {}", league.key.to_uppercase(), e);
                        summaries.push(LeagueSummary {
                            league: league.key,
                            ..Default::default()
                        });
                    }
                    FailureMode::Fatal => {
                        error!("Error scraping {} stadiums: {}", league.key.to_uppercase(), e);
                        aborted = Some((league.key, e));
                        break;
                    }
                },
            }
        }

        RunOutcome {
            dataset,
            summaries,
            aborted,
        }
    }

    fn scrape_league(
        &mut self,
        league: &LeagueConfig,
    ) -> Result<(LeagueVenues, LeagueSummary), ScrapeError> {
        let markup = self.fetcher.fetch(league.url)?;
        let extracted = extract_venues(league.key, &markup, league.selection, &league.layout)?;

        let mut summary = LeagueSummary {
            league: league.key,
            rows: extracted.total,
            row_errors: extracted.errors,
            accepted: extracted.venues.len(),
            ..Default::default()
        };

        let pb = ProgressBar::new(extracted.venues.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );

        let mut venues = LeagueVenues::new();
        for raw in &extracted.venues {
            pb.set_message(raw.name.clone());
            match self.process_venue(league, raw) {
                Some((name, record)) => {
                    venues.insert(name, record);
                }
                None => summary.failed += 1,
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        // Duplicate names collapse into one entry.
        summary.stored = venues.len();
        Ok((venues, summary))
    }

    fn process_venue(&mut self, league: &LeagueConfig, raw: &RawVenue) -> Option<(String, VenueRecord)> {
        let name = normalize(&raw.name, league.footnotes);
        let team = normalize(&raw.team, league.footnotes);
        let mut location = normalize(&raw.location, league.footnotes);
        if !league.corrections.is_empty() {
            location = correct_location(&location, league.corrections);
        }

        if name.is_empty() || location.is_empty() {
            warn!(row = raw.row, "Nothing left of {:?} / {:?} after cleaning", raw.name, raw.location);
            return None;
        }

        info!("Geocoding {} stadium: {} in {}", league.key.to_uppercase(), name, location);
        let coords = self.geocode(&format!("{}, {}", name, location)).or_else(|| {
            info!("Retrying with just location: {}", location);
            self.geocode(&location)
        });

        let Some(coords) = coords else {
            error!("Failed to geocode {} stadium: {}", league.key.to_uppercase(), name);
            return None;
        };

        let record = VenueRecord {
            location,
            team,
            latitude: coords.lat,
            longitude: coords.lon,
            display_name: coords.display_name,
            kind: coords.kind,
            last_verified: Local::now(),
        };
        Some((name, record))
    }

    fn geocode(&mut self, query: &str) -> Option<Coordinates> {
        self.pacer.wait();
        self.resolver.resolve(query)
    }
}
