//! Camera geometry: image size, sensor size and field of view.

use serde::{Deserialize, Serialize};

use crate::{Radians, Real};

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: Real,
    pub height: Real,
}

impl Default for ImageSize {
    /// Full-resolution frames of the reference camera.
    fn default() -> Self {
        Self {
            width: 5456.0,
            height: 3632.0,
        }
    }
}

impl ImageSize {
    pub fn new(width: Real, height: Real) -> Self {
        Self { width, height }
    }

    /// Pixel at the optical centre, `(width / 2, height / 2)`.
    pub fn center(&self) -> (Real, Real) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Physical sensor dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorSize {
    pub width_mm: Real,
    pub height_mm: Real,
}

impl Default for SensorSize {
    /// APS-C sensor of the reference camera.
    fn default() -> Self {
        Self {
            width_mm: 23.2,
            height_mm: 15.4,
        }
    }
}

/// Horizontal and vertical field of view of the camera, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldOfView {
    pub horizontal: Radians,
    pub vertical: Radians,
}

impl FieldOfView {
    pub fn new(horizontal: Radians, vertical: Radians) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Field of view of a pinhole lens with the given focal length.
    ///
    /// Each axis uses `2·atan(sensor / (2·focal))` with the matching sensor
    /// dimension.
    pub fn from_focal_length(focal_length_mm: Real, sensor: &SensorSize) -> Self {
        let angle = |extent_mm: Real| Radians(2.0 * (extent_mm / (2.0 * focal_length_mm)).atan());
        Self {
            horizontal: angle(sensor.width_mm),
            vertical: angle(sensor.height_mm),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.horizontal.is_finite() && self.vertical.is_finite()
    }
}
