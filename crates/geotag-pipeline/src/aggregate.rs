//! Consensus geotag from many sightings of one feature.

use geotag_core::math::angle;
use geotag_core::{GeoCoordinate, Geotag};
use log::debug;

/// Fuse `geotags` into one.
///
/// Only complete geotags (position and orientation) take part. Position is the
/// per-axis median of their coordinates and orientation the median of their
/// angles. Returns `None` when no complete geotag is given.
pub fn fuse(geotags: &[Geotag]) -> Option<Geotag> {
    let (positions, orientations): (Vec<GeoCoordinate>, Vec<_>) = geotags
        .iter()
        .filter_map(|g| Some((g.position?, g.orientation?)))
        .unzip();

    let skipped = geotags.len() - positions.len();
    if skipped > 0 {
        debug!("fuse: skipped {skipped} incomplete geotag(s)");
    }
    if positions.is_empty() {
        return None;
    }

    let position = GeoCoordinate::median(&positions);
    let orientation = angle::median(orientations.into_iter().map(Some));
    Some(Geotag::new(position, orientation))
}
