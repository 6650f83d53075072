mod dataset;
mod error;
mod fetch;
mod geo;
mod league;
mod parser;
mod pipeline;
mod settings;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::fetch::{build_client, HttpFetcher};
use crate::geo::Nominatim;
use crate::league::Variant;
use crate::pipeline::Pipeline;
use crate::settings::Settings;

#[derive(Parser)]
#[command(
    name = "stadium_coords",
    about = "Scrape stadium lists from Wikipedia and geocode them via Nominatim"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// NFL and NCAA football stadiums -> stadium_coordinates.json
    Stadiums,
    /// MLB and MLS stadiums -> more_stadium_coordinates.json
    MoreStadiums,
}

impl Commands {
    fn variant(&self) -> Variant {
        match self {
            Commands::Stadiums => Variant::Stadiums,
            Commands::MoreStadiums => Variant::MoreStadiums,
        }
    }
}

/// Console output always; a plain-text copy in `log_file` when given.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let file_layer = match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let variant = cli.command.variant();
    let settings = Settings::load()?;

    let log_path = settings.output_dir.join(variant.log_file());
    if settings.log_to_file {
        std::fs::create_dir_all(&settings.output_dir)
            .with_context(|| format!("Failed to create {:?}", settings.output_dir))?;
    }
    init_tracing(settings.log_to_file.then_some(log_path.as_path()))?;
    info!(?settings, "Starting {:?} run", variant);

    let t0 = Instant::now();
    let client = build_client(&settings.user_agent, settings.request_timeout())
        .context("Failed to build HTTP client")?;
    let mut pipeline = Pipeline::new(
        HttpFetcher::new(client.clone()),
        Nominatim::new(client, &settings.geocoder_url),
        settings.rate_limit(),
    );

    let outcome = pipeline.run(variant);
    if let Some((league, e)) = &outcome.aborted {
        error!("Run stopped at {}: {}", league.to_uppercase(), e);
    }

    let out_path = settings.output_dir.join(variant.output_file());
    if let Err(e) = dataset::save(&outcome.dataset, &out_path) {
        error!("Error saving stadium data: {:#}", e);
        return Err(e);
    }
    info!("Stadium data saved to {}", out_path.display());

    for s in &outcome.summaries {
        info!(
            "{}: {} stored of {} accepted, {} failed to geocode, {} bad rows ({} rows)",
            s.league.to_uppercase(),
            s.stored,
            s.accepted,
            s.failed,
            s.row_errors,
            s.rows
        );
    }
    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}
