//! Great-circle distance and geofence checks.

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Parses a latitude/longitude pair as submitted by a browser form.
    ///
    /// Returns `None` when either side is missing, blank, non-numeric or out of range.
    pub fn parse(latitude: Option<&str>, longitude: Option<&str>) -> Option<Self> {
        let lat: f64 = latitude?.trim().parse().ok()?;
        let lon: f64 = longitude?.trim().parse().ok()?;
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return None;
        }
        Some(Self::new(lat, lon))
    }
}

/// Haversine distance between two points, in meters.
pub fn haversine_m(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Outcome of a geofence check. Carries the computed distance either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fence {
    Inside { distance_m: f64 },
    Outside { distance_m: f64 },
}

/// Checks `point` against a circle of `tolerance_m` meters around `center`.
///
/// The boundary itself counts as inside.
pub fn check_fence(center: Coordinate, point: Coordinate, tolerance_m: f64) -> Fence {
    let distance_m = haversine_m(center, point);
    if distance_m > tolerance_m {
        Fence::Outside { distance_m }
    } else {
        Fence::Inside { distance_m }
    }
}
