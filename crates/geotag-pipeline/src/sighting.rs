//! Sightings and the capture chain they hang off.

use geotag_core::{FieldOfView, Geotag, Pt2, Radians, Telemetry};
use serde::{Deserialize, Serialize};

/// What was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SightingKind {
    /// A shape with a character painted on it. Off-axis detections are too
    /// oblique to locate reliably.
    Alphanumeric {
        #[serde(default)]
        off_axis: bool,
    },
    Emergent,
}

/// A frame together with the aircraft state at the moment of capture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapturedImage {
    pub telemetry: Telemetry,
    /// Field of view of the lens used for this frame, if recorded.
    #[serde(default)]
    pub fov: Option<FieldOfView>,
}

/// Link from a sighting to the frame it was found in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(default)]
    pub image: Option<CapturedImage>,
}

/// One detection of a ground feature in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    /// Pixel of the feature's centre, origin at the top-left corner.
    pub pixel: Pt2,
    /// Clockwise rotation of the feature relative to the top edge of the frame.
    #[serde(default)]
    pub radians_from_top: Radians,
    pub kind: SightingKind,
    #[serde(default)]
    pub assignment: Option<Assignment>,
    #[serde(default)]
    pub geotag: Option<Geotag>,
}

impl Sighting {
    pub fn new(pixel: Pt2, radians_from_top: Radians, kind: SightingKind) -> Self {
        Self {
            pixel,
            radians_from_top,
            kind,
            assignment: None,
            geotag: None,
        }
    }

    /// Attach the frame this sighting was found in.
    pub fn with_capture(mut self, capture: CapturedImage) -> Self {
        self.assignment = Some(Assignment {
            image: Some(capture),
        });
        self
    }

    /// The captured frame, if the sighting is assigned to one.
    pub fn capture(&self) -> Option<&CapturedImage> {
        self.assignment.as_ref()?.image.as_ref()
    }

    pub fn is_off_axis(&self) -> bool {
        matches!(self.kind, SightingKind::Alphanumeric { off_axis: true })
    }
}

/// Whether a geotag can be computed for `sighting`.
///
/// Off-axis alphanumeric sightings never qualify; every other sighting
/// qualifies once it is linked to a captured frame.
pub fn is_geotag_eligible(sighting: &Sighting) -> bool {
    !sighting.is_off_axis() && sighting.capture().is_some()
}
