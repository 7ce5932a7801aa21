//! Linear metres-to-degrees conversion around a reference site.

use geotag_core::Real;
use serde::{Deserialize, Serialize};

/// Feet-per-degree factors for a flat-Earth approximation.
///
/// The defaults were measured at the reference airfield (St. Mary's County,
/// MD). Using them elsewhere gives errors that grow with distance from that
/// latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatEarthScale {
    pub feet_per_metre: Real,
    /// Feet travelled per degree of latitude.
    pub feet_per_degree_lat: Real,
    /// Feet travelled per degree of longitude at the reference latitude.
    pub feet_per_degree_lon: Real,
}

impl Default for FlatEarthScale {
    fn default() -> Self {
        Self::REFERENCE_SITE
    }
}

impl FlatEarthScale {
    pub const REFERENCE_SITE: FlatEarthScale = FlatEarthScale {
        feet_per_metre: 3.28084,
        feet_per_degree_lat: 364_180.0,
        feet_per_degree_lon: 286_928.0,
    };

    /// Convert an (east, north) displacement in metres to (Δlat, Δlon) in degrees.
    pub fn offset_degrees(&self, east_m: Real, north_m: Real) -> (Real, Real) {
        let d_lat = north_m * self.feet_per_metre / self.feet_per_degree_lat;
        let d_lon = east_m * self.feet_per_metre / self.feet_per_degree_lon;
        (d_lat, d_lon)
    }

    /// All factors are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        [
            self.feet_per_metre,
            self.feet_per_degree_lat,
            self.feet_per_degree_lon,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0)
    }
}
