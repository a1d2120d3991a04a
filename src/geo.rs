//! Geographic coordinates and great-circle distance.
//!
//! `haversine_km` is deliberately a total function: it never validates its
//! inputs, and out-of-range coordinates produce a value rather than an error.
//! Validation belongs at the API boundary (`Location::is_valid`), so the
//! filtering pipeline stays pure.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees, nominally within [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, nominally within [-180, 180].
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both coordinates are finite and within geographic range.
    ///
    /// Checked at the request boundary only — `haversine_km` accepts any
    /// input and callers of the filter pipeline must not rely on it
    /// rejecting garbage.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Great-circle surface distance between two points, in kilometers.
///
/// Haversine formula over a sphere of mean Earth radius. No rounding is
/// applied; identical points yield exactly 0.
pub fn haversine_km(a: Location, b: Location) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
