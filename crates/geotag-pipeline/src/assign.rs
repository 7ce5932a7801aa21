use geotag_core::{FieldOfView, Geotag};
use geotag_projection::{calculate_clockwise_radians_from_north, CoordinateProjector};
use log::debug;

use crate::sighting::{is_geotag_eligible, Sighting};
use crate::GeotagConfig;

/// Projector and fallback lens shared by all sightings of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeotagContext {
    pub projector: CoordinateProjector,
    /// Used for captures that carry no field of view.
    pub nominal_fov: FieldOfView,
}

impl GeotagContext {
    pub fn new(projector: CoordinateProjector, nominal_fov: FieldOfView) -> Self {
        Self {
            projector,
            nominal_fov,
        }
    }
}

impl From<&GeotagConfig> for GeotagContext {
    fn from(config: &GeotagConfig) -> Self {
        Self::new(config.projector(), config.nominal_fov())
    }
}

impl Default for GeotagContext {
    fn default() -> Self {
        Self::from(&GeotagConfig::default())
    }
}

/// Geotag for `sighting`, or `None` if it is not eligible.
///
/// The returned geotag may still lack a position when the projection fails;
/// the orientation only depends on the heading and is always set.
pub fn compute_geotag(sighting: &Sighting, ctx: &GeotagContext) -> Option<Geotag> {
    if !is_geotag_eligible(sighting) {
        debug!("sighting at {:?} is not eligible for a geotag", sighting.pixel);
        return None;
    }
    let capture = sighting.capture()?;
    let fov = capture.fov.unwrap_or(ctx.nominal_fov);

    let position = ctx
        .projector
        .project(&capture.telemetry, &fov, &sighting.pixel);
    let orientation = calculate_clockwise_radians_from_north(
        capture.telemetry.yaw.to_radians(),
        sighting.radians_from_top,
    );
    Some(Geotag::new(position, Some(orientation)))
}

/// Compute and store the geotag of `sighting`.
///
/// An eligible sighting has its geotag overwritten; the return value tells
/// whether a position was produced. Ineligible sightings are left untouched
/// and yield `false`.
pub fn attempt_assign_geotag(sighting: &mut Sighting, ctx: &GeotagContext) -> bool {
    match compute_geotag(sighting, ctx) {
        Some(geotag) => {
            let located = geotag.position.is_some();
            sighting.geotag = Some(geotag);
            located
        }
        None => false,
    }
}
