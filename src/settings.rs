use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_USER_AGENT: &str = "StadiumCoordinateCollector/1.0 (Educational Purpose)";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Runtime settings: defaults, then `stadiums.toml`, then `STADIUMS_*` env vars.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub rate_limit_ms: u64,
    pub geocoder_url: String,
    pub output_dir: PathBuf,
    pub log_to_file: bool,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Config::builder()
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("request_timeout_secs", 10)?
            .set_default("rate_limit_ms", 1100)?
            .set_default("geocoder_url", DEFAULT_GEOCODER_URL)?
            .set_default("output_dir", ".")?
            .set_default("log_to_file", true)?
            .add_source(File::with_name("stadiums").required(false))
            .add_source(Environment::with_prefix("STADIUMS"))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn rate_limit(&self) -> Duration {
        Duration::from_millis(self.rate_limit_ms)
    }
}
