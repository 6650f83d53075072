pub mod bounds;
pub mod geocoder;

pub use geocoder::{Coordinates, Geocode, Nominatim, Resolver};
