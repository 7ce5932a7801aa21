//! Validated latitude/longitude values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{median_in_place, Real};

/// Largest accepted absolute latitude, in degrees.
pub const ABS_LATITUDE_BOUND: Real = 90.0;
/// Largest accepted absolute longitude, in degrees.
pub const ABS_LONGITUDE_BOUND: Real = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(Real),
    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(Real),
}

/// A point on the Earth in decimal degrees.
///
/// Both bounds are inclusive and checked on every construction path,
/// including deserialization. NaN is rejected. Out-of-range values are an
/// error, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct GeoCoordinate {
    latitude: Real,
    longitude: Real,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: Real,
    longitude: Real,
}

impl TryFrom<RawCoordinate> for GeoCoordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        GeoCoordinate::new(raw.latitude, raw.longitude)
    }
}

fn check_latitude(latitude: Real) -> Result<Real, CoordinateError> {
    // written so that NaN fails the comparison
    if latitude.abs() <= ABS_LATITUDE_BOUND {
        Ok(latitude)
    } else {
        Err(CoordinateError::InvalidLatitude(latitude))
    }
}

fn check_longitude(longitude: Real) -> Result<Real, CoordinateError> {
    if longitude.abs() <= ABS_LONGITUDE_BOUND {
        Ok(longitude)
    } else {
        Err(CoordinateError::InvalidLongitude(longitude))
    }
}

impl GeoCoordinate {
    /// Build a coordinate, validating both axes.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] if `|latitude| > 90`, `|longitude| > 180`
    /// or either value is NaN. Latitude is checked first.
    pub fn new(latitude: Real, longitude: Real) -> Result<Self, CoordinateError> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
        })
    }

    #[inline]
    pub fn latitude(&self) -> Real {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> Real {
        self.longitude
    }

    /// Copy of this coordinate with a new latitude.
    pub fn with_latitude(self, latitude: Real) -> Result<Self, CoordinateError> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            ..self
        })
    }

    /// Copy of this coordinate with a new longitude.
    pub fn with_longitude(self, longitude: Real) -> Result<Self, CoordinateError> {
        Ok(Self {
            longitude: check_longitude(longitude)?,
            ..self
        })
    }

    /// Planar distance in degrees: `sqrt(Δlat² + Δlon²)`.
    ///
    /// This treats latitude and longitude as Cartesian axes. It is only
    /// meaningful for small separations in one region and is not a geodesic
    /// distance.
    pub fn distance_to(&self, other: &GeoCoordinate) -> Real {
        let d_lat = self.latitude - other.latitude;
        let d_lon = self.longitude - other.longitude;
        d_lat.hypot(d_lon)
    }

    /// Per-axis median of a set of coordinates.
    ///
    /// Entries with a NaN component are skipped. Latitude and longitude are
    /// medianed independently, so the result is generally not one of the
    /// inputs and is not a geometric median. An even count uses the mean of
    /// the two middle values on each axis.
    ///
    /// Returns `None` if no usable entries remain or the medianed point
    /// fails validation (logged).
    pub fn median(coordinates: &[GeoCoordinate]) -> Option<GeoCoordinate> {
        let (mut lats, mut lons): (Vec<Real>, Vec<Real>) = coordinates
            .iter()
            .filter(|c| !c.latitude.is_nan() && !c.longitude.is_nan())
            .map(|c| (c.latitude, c.longitude))
            .unzip();

        if lats.is_empty() {
            log::debug!(
                "coordinate median: none of {} inputs usable",
                coordinates.len()
            );
            return None;
        }

        let med_lat = median_in_place(&mut lats)?;
        let med_lon = median_in_place(&mut lons)?;

        match GeoCoordinate::new(med_lat, med_lon) {
            Ok(c) => Some(c),
            Err(err) => {
                log::error!(
                    "coordinate median produced an invalid point (lat {med_lat}, lon {med_lon}): {err}"
                );
                None
            }
        }
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.7}, {:.7})", self.latitude, self.longitude)
    }
}
