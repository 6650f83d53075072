/// Axis-aligned lat/lon rectangle, edges inclusive.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub name: &'static str,
    pub lat: (f64, f64),
    pub lon: (f64, f64),
}

impl Region {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat.0..=self.lat.1).contains(&lat) && (self.lon.0..=self.lon.1).contains(&lon)
    }
}

pub const US_REGIONS: [Region; 3] = [
    Region {
        name: "continental",
        lat: (24.7, 49.4),
        lon: (-125.0, -66.9),
    },
    Region {
        name: "alaska",
        lat: (51.0, 71.5),
        lon: (-180.0, -130.0),
    },
    Region {
        name: "hawaii",
        lat: (18.7, 22.5),
        lon: (-160.3, -154.5),
    },
];

/// The first US region containing the point.
pub fn region_of(lat: f64, lon: f64) -> Option<&'static Region> {
    US_REGIONS.iter().find(|r| r.contains(lat, lon))
}

/// True if the point falls inside the continental US, Alaska or Hawaii.
pub fn is_valid_us(lat: f64, lon: f64) -> bool {
    region_of(lat, lon).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continental_grid() {
        let mut lat = 24.7;
        while lat <= 49.4 {
            let mut lon = -125.0;
            while lon <= -66.9 {
                assert!(is_valid_us(lat, lon), "{} {}", lat, lon);
                lon += 2.9;
            }
            lat += 1.3;
        }
    }

    #[test]
    fn edges_are_inclusive() {
        assert!(is_valid_us(24.7, -125.0));
        assert!(is_valid_us(49.4, -66.9));
        assert!(is_valid_us(71.5, -180.0));
        assert!(is_valid_us(18.7, -154.5));
    }

    #[test]
    fn alaska_and_hawaii() {
        assert_eq!(region_of(61.2181, -149.9003).map(|r| r.name), Some("alaska"));
        assert_eq!(region_of(21.3069, -157.8583).map(|r| r.name), Some("hawaii"));
        assert_eq!(region_of(42.3467, -71.0972).map(|r| r.name), Some("continental"));
    }

    #[test]
    fn outside_regions() {
        assert!(!is_valid_us(40.0, 0.0));
        assert!(!is_valid_us(35.68, 139.69)); // Tokyo
        assert!(!is_valid_us(51.5072, -0.1276)); // London
        assert!(!is_valid_us(50.0, -100.0)); // between continental and Alaska latitudes
        assert!(!is_valid_us(f64::NAN, -100.0));
    }
}
