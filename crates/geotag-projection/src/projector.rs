//! Pixel to ground-coordinate projection.
//!
//! Frames used below:
//! - camera frame: x right, y up (image rows flipped), z out of the lens
//!   backwards, so the optical axis is `-z`;
//! - inertial frame: x east, y north, z up, origin at the aircraft.
//!
//! The camera-from-inertial rotation is `Roll · Pitch · Yaw` with yaw applied
//! with negated sign; its transpose takes camera rays into the inertial frame.

use geotag_core::math::matrix::{
    array_from_vector, multiply, scale_vector, transpose, vector_from_array,
};
use geotag_core::{
    Attitude, CoordinateError, FieldOfView, GeoCoordinate, ImageSize, MatX, MatrixError, Pt2,
    Radians, Real, Telemetry,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::FlatEarthScale;

/// Rays whose vertical component is smaller than this never reach the ground.
const MIN_VERTICAL_COMPONENT: Real = 1e-12;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("non-finite {0} in projection input")]
    NonFiniteInput(&'static str),
    #[error("view ray is parallel to the ground plane")]
    RayParallelToGround,
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    #[error("projected point is not a valid coordinate: {0}")]
    Coordinate(#[from] CoordinateError),
}

/// Projects pixels of frames with a fixed size onto the ground plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinateProjector {
    pub image: ImageSize,
    #[serde(default)]
    pub scale: FlatEarthScale,
}

/// Ground coordinates of the four corners of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageFootprint {
    pub top_left: GeoCoordinate,
    pub top_right: GeoCoordinate,
    pub bottom_left: GeoCoordinate,
    pub bottom_right: GeoCoordinate,
}

impl CoordinateProjector {
    pub fn new(image: ImageSize, scale: FlatEarthScale) -> Self {
        Self { image, scale }
    }

    /// Ground coordinate seen at `pixel`, or `None` if the projection fails.
    ///
    /// Failures (non-finite inputs, a ray that never meets the ground, an
    /// out-of-range result) are logged and swallowed.
    pub fn project(
        &self,
        telemetry: &Telemetry,
        fov: &FieldOfView,
        pixel: &Pt2,
    ) -> Option<GeoCoordinate> {
        match self.try_project(telemetry, fov, pixel) {
            Ok(coordinate) => Some(coordinate),
            Err(err) => {
                log::warn!(
                    "projection of pixel ({}, {}) failed: {err}",
                    pixel.x,
                    pixel.y
                );
                None
            }
        }
    }

    /// Same as [`project`](Self::project) but reports why it failed.
    ///
    /// Telemetry angles are converted from degrees once, here, through
    /// [`Telemetry::attitude`].
    pub fn try_project(
        &self,
        telemetry: &Telemetry,
        fov: &FieldOfView,
        pixel: &Pt2,
    ) -> Result<GeoCoordinate, ProjectionError> {
        self.project_with_attitude(
            &telemetry.position,
            telemetry.altitude_m,
            &telemetry.attitude(),
            fov,
            pixel,
        )
    }

    /// Radian-only core of the projection.
    pub fn project_with_attitude(
        &self,
        origin: &GeoCoordinate,
        altitude_m: Real,
        attitude: &Attitude,
        fov: &FieldOfView,
        pixel: &Pt2,
    ) -> Result<GeoCoordinate, ProjectionError> {
        let (east_m, north_m) = self.ground_offset_m(altitude_m, attitude, fov, pixel)?;
        let (d_lat, d_lon) = self.scale.offset_degrees(east_m, north_m);
        let coordinate =
            GeoCoordinate::new(origin.latitude() + d_lat, origin.longitude() + d_lon)?;
        Ok(coordinate)
    }

    /// Horizontal displacement `(east, north)` in metres from the point below
    /// the aircraft to the ground point seen at `pixel`.
    pub fn ground_offset_m(
        &self,
        altitude_m: Real,
        attitude: &Attitude,
        fov: &FieldOfView,
        pixel: &Pt2,
    ) -> Result<(Real, Real), ProjectionError> {
        if !altitude_m.is_finite() {
            return Err(ProjectionError::NonFiniteInput("altitude"));
        }
        let ray_inertial = self.inertial_ray(attitude, fov, pixel)?;

        let vertical = ray_inertial[2];
        if vertical.abs() < MIN_VERTICAL_COMPONENT {
            return Err(ProjectionError::RayParallelToGround);
        }
        if vertical > 0.0 {
            log::debug!("view ray points above the horizon; mirroring onto the ground plane");
        }

        let ground = scale_vector(&ray_inertial, altitude_m / vertical.abs());
        Ok((ground[0], ground[1]))
    }

    /// Unit view ray through `pixel`, in the inertial frame (x east, y north,
    /// z up).
    fn inertial_ray(
        &self,
        attitude: &Attitude,
        fov: &FieldOfView,
        pixel: &Pt2,
    ) -> Result<Vec<Real>, ProjectionError> {
        if !attitude.is_finite() {
            return Err(ProjectionError::NonFiniteInput("attitude"));
        }
        if !fov.is_finite() {
            return Err(ProjectionError::NonFiniteInput("field of view"));
        }
        if !(pixel.x.is_finite() && pixel.y.is_finite()) {
            return Err(ProjectionError::NonFiniteInput("pixel"));
        }
        if !(self.image.width.is_finite() && self.image.height.is_finite()) {
            return Err(ProjectionError::NonFiniteInput("image size"));
        }

        let ray_camera = self.unit_camera_ray(fov, pixel);
        let inertial_from_camera = inertial_from_camera(attitude)?;
        let ray = array_from_vector(&multiply(
            &inertial_from_camera,
            &vector_from_array(&ray_camera),
        )?)?;
        Ok(ray)
    }

    /// Unit view ray through `pixel`, in the camera frame.
    fn unit_camera_ray(&self, fov: &FieldOfView, pixel: &Pt2) -> Vec<Real> {
        let (cx, cy) = self.image.center();
        let dx = pixel.x - cx;
        let dy = cy - pixel.y;
        let focal_px = self.image.width / (2.0 * (fov.horizontal.value() / 2.0).tan());
        let norm = (focal_px * focal_px + dx * dx + dy * dy).sqrt();
        scale_vector(&[dx, dy, -focal_px], 1.0 / norm)
    }

    /// Ground coordinates of the frame corners.
    ///
    /// Returns `None` if any corner fails to project. Unlike
    /// [`project`](Self::project), a corner whose view ray does not point
    /// below the horizon counts as a failure instead of being mirrored.
    pub fn footprint(&self, telemetry: &Telemetry, fov: &FieldOfView) -> Option<ImageFootprint> {
        let ImageSize { width, height } = self.image;
        let corner = |x: Real, y: Real| self.project_corner(telemetry, fov, &Pt2::new(x, y));
        Some(ImageFootprint {
            top_left: corner(0.0, 0.0)?,
            top_right: corner(width, 0.0)?,
            bottom_left: corner(0.0, height)?,
            bottom_right: corner(width, height)?,
        })
    }

    fn project_corner(
        &self,
        telemetry: &Telemetry,
        fov: &FieldOfView,
        pixel: &Pt2,
    ) -> Option<GeoCoordinate> {
        match self.inertial_ray(&telemetry.attitude(), fov, pixel) {
            Ok(ray) if ray[2] < 0.0 => self.project(telemetry, fov, pixel),
            Ok(_) => {
                log::debug!(
                    "frame corner ({}, {}) is at or above the horizon",
                    pixel.x,
                    pixel.y
                );
                None
            }
            Err(err) => {
                log::warn!("projection of corner ({}, {}) failed: {err}", pixel.x, pixel.y);
                None
            }
        }
    }
}

/// Project a pixel with the reference-site scale.
///
/// Convenience wrapper for one-off calls; build a [`CoordinateProjector`] to
/// reuse an image size or a different scale.
pub fn project(
    telemetry: &Telemetry,
    fov: &FieldOfView,
    pixel_x: Real,
    pixel_y: Real,
    image_width: Real,
    image_height: Real,
) -> Option<GeoCoordinate> {
    CoordinateProjector::new(
        ImageSize::new(image_width, image_height),
        FlatEarthScale::REFERENCE_SITE,
    )
    .project(telemetry, fov, &Pt2::new(pixel_x, pixel_y))
}

fn roll_matrix(roll: Radians) -> MatX {
    let (s, c) = roll.value().sin_cos();
    MatX::from_row_slice(3, 3, &[c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c])
}

fn pitch_matrix(pitch: Radians) -> MatX {
    let (s, c) = pitch.value().sin_cos();
    MatX::from_row_slice(3, 3, &[1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c])
}

fn yaw_matrix(yaw: Radians) -> MatX {
    let (s, c) = (-yaw.value()).sin_cos();
    MatX::from_row_slice(3, 3, &[c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0])
}

/// `transpose(Roll · Pitch · Yaw)`.
fn inertial_from_camera(attitude: &Attitude) -> Result<MatX, MatrixError> {
    let camera_from_inertial = multiply(
        &multiply(&roll_matrix(attitude.roll), &pitch_matrix(attitude.pitch))?,
        &yaw_matrix(attitude.yaw),
    )?;
    transpose(&camera_from_inertial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_are_orthonormal() {
        let attitude = Attitude {
            roll: Radians(0.3),
            pitch: Radians(-0.2),
            yaw: Radians(2.1),
        };
        let r = inertial_from_camera(&attitude).unwrap();
        let should_be_identity = &r * r.transpose();
        let err = (should_be_identity - MatX::identity(3, 3)).norm();
        assert!(err < 1e-12, "err={err}");
    }

    #[test]
    fn zero_attitude_is_identity() {
        let r = inertial_from_camera(&Attitude::default()).unwrap();
        assert_eq!(r, MatX::identity(3, 3));
    }

    #[test]
    fn camera_ray_is_unit_and_points_down_at_centre() {
        let projector = CoordinateProjector::default();
        let fov = FieldOfView::new(Radians(1.0), Radians(0.7));
        let (cx, cy) = projector.image.center();
        let ray = projector.unit_camera_ray(&fov, &Pt2::new(cx, cy));
        assert_eq!(ray[0], 0.0);
        assert_eq!(ray[1], 0.0);
        assert!((ray[2] + 1.0).abs() < 1e-15, "ray={ray:?}");

        let ray = projector.unit_camera_ray(&fov, &Pt2::new(10.0, 20.0));
        let norm: Real = ray.iter().map(|v| v * v).sum::<Real>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
        assert!(ray[0] < 0.0 && ray[1] > 0.0, "top-left pixel: left and up");
    }

    #[test]
    fn scale_defaults_to_reference_site_in_json() {
        let projector: CoordinateProjector =
            serde_json::from_str(r#"{"image": {"width": 100.0, "height": 50.0}}"#).unwrap();
        assert_eq!(projector.image, ImageSize::new(100.0, 50.0));
        assert_eq!(projector.scale, FlatEarthScale::REFERENCE_SITE);
    }

    #[test]
    fn horizontal_ray_is_rejected() {
        let projector = CoordinateProjector::default();
        let fov = FieldOfView::new(Radians(1.0), Radians(0.7));
        let attitude = Attitude {
            pitch: Radians(std::f64::consts::FRAC_PI_2),
            ..Attitude::default()
        };
        let (cx, cy) = projector.image.center();
        let err = projector
            .ground_offset_m(100.0, &attitude, &fov, &Pt2::new(cx, cy))
            .unwrap_err();
        assert_eq!(err, ProjectionError::RayParallelToGround);
    }
}
