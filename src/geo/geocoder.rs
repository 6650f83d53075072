use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, error};

use super::bounds::{is_valid_us, region_of};
use crate::error::GeocodeError;

const COUNTRY_QUALIFIER: &str = "United States";
const COUNTRY_CODES: &str = "us";

/// One search hit as returned by Nominatim. Coordinates arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Free-text place search, best match first.
pub trait Geocode {
    fn search(&self, query: &str, country_codes: &str) -> Result<Vec<Place>, GeocodeError>;
}

/// OpenStreetMap Nominatim `/search` endpoint.
pub struct Nominatim {
    client: Client,
    base_url: String,
}

impl Nominatim {
    pub fn new(client: Client, base_url: &str) -> Self {
        Nominatim {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Geocode for Nominatim {
    fn search(&self, query: &str, country_codes: &str) -> Result<Vec<Place>, GeocodeError> {
        let resp = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query), ("format", "json"), ("countrycodes", country_codes)])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }
        Ok(resp.json()?)
    }
}

/// A validated geocoding result.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
    pub kind: String,
}

/// Turns a query into US coordinates, or nothing. Never fails: lookup errors
/// and out-of-bounds hits are logged and reported as not found.
pub struct Resolver<G> {
    geocoder: G,
}

impl<G: Geocode> Resolver<G> {
    pub fn new(geocoder: G) -> Self {
        Resolver { geocoder }
    }

    pub fn resolve(&self, query: &str) -> Option<Coordinates> {
        match self.lookup(query) {
            Ok(found) => found,
            Err(e) => {
                error!("Error geocoding {}: {}", query, e);
                None
            }
        }
    }

    fn lookup(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let qualified = format!("{}, {}", query, COUNTRY_QUALIFIER);
        let places = self.geocoder.search(&qualified, COUNTRY_CODES)?;

        // Ranking is the service's job.
        let Some(first) = places.into_iter().next() else {
            debug!("No geocoding results for {}", query);
            return Ok(None);
        };

        let lat = parse_degrees("lat", &first.lat)?;
        let lon = parse_degrees("lon", &first.lon)?;

        if !is_valid_us(lat, lon) {
            error!("Invalid US coordinates for {}: {}, {}", query, lat, lon);
            return Ok(None);
        }
        debug!(
            region = region_of(lat, lon).map(|r| r.name),
            "Geocoded {} to {}, {}",
            query,
            lat,
            lon
        );

        Ok(Some(Coordinates {
            lat,
            lon,
            display_name: first.display_name.unwrap_or_default(),
            kind: first.kind.unwrap_or_default(),
        }))
    }
}

fn parse_degrees(field: &'static str, value: &str) -> Result<f64, GeocodeError> {
    value.trim().parse().map_err(|_| GeocodeError::Coordinate {
        field,
        value: value.to_string(),
    })
}
