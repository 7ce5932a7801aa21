//! Aircraft telemetry samples.
//!
//! Telemetry arrives from the aircraft link in degrees. The projector only
//! accepts an [`Attitude`] in radians; [`Telemetry::attitude`] is the single
//! place where that conversion happens.

use serde::{Deserialize, Serialize};

use crate::{Degrees, GeoCoordinate, Radians, Real};

/// Camera gimbal attitude relative to straight down.
///
/// - `pitch`: 0 points down, positive tilts forward.
/// - `roll`: 0 points down, positive tilts to the right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GimbalOrientation {
    pub pitch: Degrees,
    pub roll: Degrees,
}

/// One telemetry sample taken at image capture time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Aircraft position.
    pub position: GeoCoordinate,
    /// Height above the ground plane in metres.
    pub altitude_m: Real,
    /// Heading; 0 is north, increasing clockwise.
    pub yaw: Degrees,
    /// Gimbal attitude.
    pub gimbal: GimbalOrientation,
}

/// Camera attitude in radians, as consumed by the projector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Attitude {
    pub roll: Radians,
    pub pitch: Radians,
    pub yaw: Radians,
}

impl Attitude {
    pub fn is_finite(&self) -> bool {
        self.roll.is_finite() && self.pitch.is_finite() && self.yaw.is_finite()
    }
}

impl Telemetry {
    pub fn new(
        position: GeoCoordinate,
        altitude_m: Real,
        yaw: Degrees,
        gimbal: GimbalOrientation,
    ) -> Self {
        Self {
            position,
            altitude_m,
            yaw,
            gimbal,
        }
    }

    /// Gimbal roll/pitch and aircraft yaw converted to radians.
    pub fn attitude(&self) -> Attitude {
        Attitude {
            roll: self.gimbal.roll.to_radians(),
            pitch: self.gimbal.pitch.to_radians(),
            yaw: self.yaw.to_radians(),
        }
    }
}
