//! Spherical-Earth helpers.
//!
//! [`destination_point`] is a general utility for offsetting a coordinate
//! along a bearing. The pixel projector does not use it; it relies on the
//! flat-Earth scale instead.

use geotag_core::{CoordinateError, GeoCoordinate, Radians, Real};

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: Real = 6_371_000.0;

/// Great-circle distance between two coordinates, in metres.
pub fn haversine_distance_m(a: &GeoCoordinate, b: &GeoCoordinate) -> Real {
    let phi1 = a.latitude().to_radians();
    let phi2 = b.latitude().to_radians();
    let d_phi = (b.latitude() - a.latitude()).to_radians();
    let d_lambda = (b.longitude() - a.longitude()).to_radians();
    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Point reached by travelling `distance_m` from `origin` along `bearing`.
///
/// `bearing` is clockwise from north. Uses the direct haversine formula on a
/// sphere of radius [`EARTH_RADIUS_M`]. The resulting longitude is wrapped
/// into `[-180, 180]`.
///
/// # Errors
///
/// Returns [`CoordinateError`] if the inputs are non-finite or the result
/// cannot be a valid coordinate.
pub fn destination_point(
    origin: &GeoCoordinate,
    distance_m: Real,
    bearing: Radians,
) -> Result<GeoCoordinate, CoordinateError> {
    let phi1 = origin.latitude().to_radians();
    let lambda1 = origin.longitude().to_radians();
    let delta = distance_m / EARTH_RADIUS_M;
    let theta = bearing.value();

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    GeoCoordinate::new(phi2.to_degrees(), wrap_longitude(lambda2.to_degrees()))
}

fn wrap_longitude(lon: Real) -> Real {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn c(lat: Real, lon: Real) -> GeoCoordinate {
        GeoCoordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn due_north_moves_latitude_only() {
        let origin = c(38.0, -76.0);
        let dest = destination_point(&origin, 1000.0, Radians(0.0)).unwrap();
        let expected_lat = 38.0 + (1000.0 / EARTH_RADIUS_M).to_degrees();
        assert_abs_diff_eq!(dest.latitude(), expected_lat, epsilon = 1e-12);
        assert_abs_diff_eq!(dest.longitude(), -76.0, epsilon = 1e-12);
    }

    #[test]
    fn due_east_on_equator_moves_longitude_only() {
        let dest = destination_point(&c(0.0, 10.0), 5000.0, Radians(FRAC_PI_2)).unwrap();
        assert_abs_diff_eq!(dest.latitude(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            dest.longitude(),
            10.0 + (5000.0 / EARTH_RADIUS_M).to_degrees(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn distance_round_trips_through_destination() {
        let origin = c(38.1446, -76.4280);
        for bearing in [0.3, 1.7, PI, 4.4, 6.0] {
            let dest = destination_point(&origin, 2500.0, Radians(bearing)).unwrap();
            let d = haversine_distance_m(&origin, &dest);
            assert_abs_diff_eq!(d, 2500.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn crossing_the_antimeridian_wraps() {
        let dest = destination_point(&c(0.0, 179.99), 10_000.0, Radians(FRAC_PI_2)).unwrap();
        assert!(dest.longitude() < -179.0, "lon={}", dest.longitude());
    }

    #[test]
    fn nan_distance_is_an_error() {
        assert!(destination_point(&c(0.0, 0.0), f64::NAN, Radians(0.0)).is_err());
    }
}
