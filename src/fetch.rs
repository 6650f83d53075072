use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::ScrapeError;

/// Source of raw page markup.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Build the shared blocking client. Every request carries the collector's
/// User-Agent and a per-request timeout.
pub fn build_client(user_agent: &str, timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        HttpFetcher { client }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        info!("Fetching {}", url);
        let start = Instant::now();
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text()?;
        debug!(
            bytes = body.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Fetched {}",
            url
        );
        Ok(body)
    }
}
