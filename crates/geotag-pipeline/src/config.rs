//! Camera and site configuration for geotagging runs.

use anyhow::{ensure, Result};
use geotag_core::{FieldOfView, ImageSize, Real, SensorSize};
use geotag_projection::{CoordinateProjector, FlatEarthScale};
use serde::{Deserialize, Serialize};

/// Fixed configuration shared by every sighting in a run.
///
/// All fields are optional in JSON; missing ones take the reference camera
/// and reference site values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeotagConfig {
    /// Size of the frames the pixel coordinates refer to.
    pub image: ImageSize,
    /// Physical sensor size.
    pub sensor: SensorSize,
    /// Nominal focal length in millimetres. Used for captures that carry no
    /// field of view of their own.
    pub focal_length_mm: Real,
    /// Metres-to-degrees factors for the flying site.
    pub scale: FlatEarthScale,
}

impl Default for GeotagConfig {
    fn default() -> Self {
        Self {
            image: ImageSize::default(),
            sensor: SensorSize::default(),
            focal_length_mm: 35.0,
            scale: FlatEarthScale::default(),
        }
    }
}

impl GeotagConfig {
    /// Reject sizes and factors that would make every projection degenerate.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            is_positive(self.image.width) && is_positive(self.image.height),
            "image size must be positive, got {}x{}",
            self.image.width,
            self.image.height
        );
        ensure!(
            is_positive(self.sensor.width_mm) && is_positive(self.sensor.height_mm),
            "sensor size must be positive, got {}x{} mm",
            self.sensor.width_mm,
            self.sensor.height_mm
        );
        ensure!(
            is_positive(self.focal_length_mm),
            "focal length must be positive, got {} mm",
            self.focal_length_mm
        );
        ensure!(
            self.scale.is_valid(),
            "flat-Earth scale factors must be positive: {:?}",
            self.scale
        );
        Ok(())
    }

    /// Field of view implied by the nominal focal length and sensor size.
    pub fn nominal_fov(&self) -> FieldOfView {
        FieldOfView::from_focal_length(self.focal_length_mm, &self.sensor)
    }

    pub fn projector(&self) -> CoordinateProjector {
        CoordinateProjector::new(self.image, self.scale)
    }
}

fn is_positive(v: Real) -> bool {
    v.is_finite() && v > 0.0
}
