//! Geotag assignment and fusion for `geotag-rs`.
//!
//! This crate sits on top of the projector and works with sightings: one
//! detection of a ground feature in one captured frame.
//!
//! - [`attempt_assign_geotag`] projects a sighting onto the ground when its
//!   capture chain is complete and overwrites its geotag;
//! - [`fuse`] reduces the geotags of several sightings of the same feature to
//!   one consensus geotag using per-axis medians;
//! - [`run_geotagging`] does both for a batch of targets and returns a
//!   serializable report.
//!
//! ```no_run
//! use geotag_pipeline::{run_geotagging, GeotagConfig, GeotagInput};
//!
//! # fn main() -> anyhow::Result<()> {
//! let input: GeotagInput = serde_json::from_str(&std::fs::read_to_string("sightings.json")?)?;
//! let report = run_geotagging(&input, &GeotagConfig::default())?;
//! for target in &report.targets {
//!     println!("{}: {:?}", target.target_id, target.geotag);
//! }
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod assign;
pub mod config;
pub mod run;
pub mod sighting;

pub use aggregate::fuse;
pub use assign::{attempt_assign_geotag, compute_geotag, GeotagContext};
pub use config::GeotagConfig;
pub use run::{run_geotagging, GeotagInput, GeotagReport, TargetGeotagReport, TargetSightings};
pub use sighting::{is_geotag_eligible, Assignment, CapturedImage, Sighting, SightingKind};
