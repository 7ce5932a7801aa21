//! Core value types and math for `geotag-rs`.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Pt2`, `MatX`) and the
//!   dimension-checked matrix helpers used by the projector,
//! - angle newtypes ([`Radians`], [`Degrees`]) with normalization and median,
//! - validated geographic coordinates ([`GeoCoordinate`]),
//! - camera field of view and aircraft telemetry,
//! - the [`Geotag`] result type and its [`CardinalDirection`] bucketing.
//!
//! Pipeline from the caller's point of view:
//! `pixel + FieldOfView + Telemetry -> GeoCoordinate (+ orientation) = Geotag`

/// Linear algebra aliases, matrix helpers and angle math.
pub mod math;

/// Validated latitude/longitude values.
pub mod geo;

/// Field of view, sensor and image dimensions.
pub mod camera;

/// Aircraft position and attitude samples.
pub mod telemetry;

/// Geotag result type and compass bucketing.
pub mod geotag;

pub use camera::*;
pub use geo::*;
pub use geotag::*;
pub use math::*;
pub use telemetry::*;
