//! Pixel-to-ground projection for `geotag-rs`.
//!
//! The main entry point is [`CoordinateProjector`], which turns a pixel in a
//! captured frame into a ground coordinate using the camera field of view and
//! the aircraft telemetry at capture time:
//!
//! `pixel -> camera ray -> rotate by attitude -> intersect ground -> metres -> degrees`
//!
//! The metres-to-degrees step is a linear approximation ([`FlatEarthScale`])
//! calibrated for a single reference airfield. It is not valid far from that
//! site.

pub mod flat_earth;
pub mod haversine;
pub mod orientation;
pub mod projector;

pub use flat_earth::FlatEarthScale;
pub use haversine::{destination_point, haversine_distance_m, EARTH_RADIUS_M};
pub use orientation::calculate_clockwise_radians_from_north;
pub use projector::{project, CoordinateProjector, ImageFootprint, ProjectionError};
