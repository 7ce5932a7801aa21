//! Geotag result type.

use std::f64::consts::{FRAC_PI_4, FRAC_PI_8};

use serde::{Deserialize, Serialize};

use crate::math::angle::{normalize, same_direction};
use crate::{GeoCoordinate, Radians};

/// Ground position and facing direction of a detected feature.
///
/// Either part may be missing, e.g. when the projection failed but the
/// orientation is known. `orientation` is measured clockwise from north.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Geotag {
    #[serde(default)]
    pub position: Option<GeoCoordinate>,
    #[serde(default)]
    pub orientation: Option<Radians>,
}

impl Geotag {
    pub fn new(position: Option<GeoCoordinate>, orientation: Option<Radians>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Both position and orientation are present.
    pub fn is_complete(&self) -> bool {
        self.position.is_some() && self.orientation.is_some()
    }

    /// Compass bucket of the orientation, if any.
    pub fn cardinal_direction(&self) -> Option<CardinalDirection> {
        self.orientation.and_then(CardinalDirection::from_radians)
    }
}

/// Positions compare exactly; orientations compare after normalization.
impl PartialEq for Geotag {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && same_direction(self.orientation, other.orientation)
    }
}

/// One of the eight principal compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardinalDirection {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NW")]
    NorthWest,
}

impl CardinalDirection {
    /// Directions in clockwise order starting at north.
    pub const ALL: [CardinalDirection; 8] = [
        CardinalDirection::North,
        CardinalDirection::NorthEast,
        CardinalDirection::East,
        CardinalDirection::SouthEast,
        CardinalDirection::South,
        CardinalDirection::SouthWest,
        CardinalDirection::West,
        CardinalDirection::NorthWest,
    ];

    /// Bucket a clockwise-from-north angle into one of eight 45° sectors.
    ///
    /// Each sector is centred on its direction, so north covers
    /// `[15π/8, π/8)`. Returns `None` for non-finite input.
    pub fn from_radians(angle: Radians) -> Option<Self> {
        if !angle.is_finite() {
            return None;
        }
        let shifted = normalize(angle.value() + FRAC_PI_8).value();
        let index = ((shifted / FRAC_PI_4) as usize).min(Self::ALL.len() - 1);
        Some(Self::ALL[index])
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            CardinalDirection::North => "N",
            CardinalDirection::NorthEast => "NE",
            CardinalDirection::East => "E",
            CardinalDirection::SouthEast => "SE",
            CardinalDirection::South => "S",
            CardinalDirection::SouthWest => "SW",
            CardinalDirection::West => "W",
            CardinalDirection::NorthWest => "NW",
        }
    }
}

impl std::fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn sector_centres_map_to_their_direction() {
        for (i, dir) in CardinalDirection::ALL.iter().enumerate() {
            let centre = Radians(i as f64 * FRAC_PI_4);
            assert_eq!(CardinalDirection::from_radians(centre), Some(*dir), "i={i}");
        }
    }

    #[test]
    fn north_sector_wraps_around_zero() {
        assert_eq!(
            CardinalDirection::from_radians(Radians(TAU - 0.1)),
            Some(CardinalDirection::North)
        );
        assert_eq!(
            CardinalDirection::from_radians(Radians(FRAC_PI_8 - 1e-9)),
            Some(CardinalDirection::North)
        );
        assert_eq!(
            CardinalDirection::from_radians(Radians(FRAC_PI_8 + 1e-9)),
            Some(CardinalDirection::NorthEast)
        );
        assert_eq!(
            CardinalDirection::from_radians(Radians(-PI / 2.0)),
            Some(CardinalDirection::West)
        );
    }

    #[test]
    fn non_finite_has_no_direction() {
        assert_eq!(CardinalDirection::from_radians(Radians(f64::NAN)), None);
    }

    #[test]
    fn geotag_equality_normalizes_orientation() {
        let p = GeoCoordinate::new(1.0, 2.0).unwrap();
        let a = Geotag::new(Some(p), Some(Radians(-PI / 2.0)));
        let b = Geotag::new(Some(p), Some(Radians(1.5 * PI)));
        assert_eq!(a, b);

        let c = Geotag::new(Some(p), Some(Radians(0.0)));
        assert_ne!(a, c);
        assert_ne!(a, Geotag::new(None, Some(Radians(1.5 * PI))));
    }

    #[test]
    fn cardinal_serializes_as_abbreviation() {
        let json = serde_json::to_string(&CardinalDirection::SouthWest).unwrap();
        assert_eq!(json, "\"SW\"");
        assert_eq!(CardinalDirection::SouthWest.to_string(), "SW");
    }

    #[test]
    fn completeness() {
        let p = GeoCoordinate::new(1.0, 2.0).unwrap();
        assert!(Geotag::new(Some(p), Some(Radians(0.0))).is_complete());
        assert!(!Geotag::new(Some(p), None).is_complete());
        assert!(!Geotag::default().is_complete());
    }
}
