//! Batch geotagging over a set of targets.

use std::collections::HashSet;

use anyhow::{ensure, Context, Result};
use geotag_core::{CardinalDirection, Geotag};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::assign::{compute_geotag, GeotagContext};
use crate::sighting::Sighting;
use crate::{fuse, GeotagConfig};

/// All sightings of one physical target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSightings {
    pub target_id: String,
    #[serde(default)]
    pub sightings: Vec<Sighting>,
}

/// Input document of a geotagging run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeotagInput {
    pub targets: Vec<TargetSightings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetGeotagReport {
    pub target_id: String,
    /// Consensus geotag; `None` when no sighting produced a complete geotag.
    pub geotag: Option<Geotag>,
    pub cardinal: Option<CardinalDirection>,
    pub sightings_total: usize,
    /// Sightings for which a ground position was computed.
    pub sightings_geotagged: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeotagReport {
    pub targets: Vec<TargetGeotagReport>,
}

/// Geotag every eligible sighting and fuse the results per target.
///
/// Fails only on an invalid configuration or duplicate target ids; sightings
/// that cannot be located are counted and skipped.
pub fn run_geotagging(input: &GeotagInput, config: &GeotagConfig) -> Result<GeotagReport> {
    config.validate().context("invalid geotag configuration")?;

    let mut seen = HashSet::new();
    for target in &input.targets {
        ensure!(
            seen.insert(target.target_id.as_str()),
            "duplicate target id '{}'",
            target.target_id
        );
    }

    let ctx = GeotagContext::from(config);
    let targets = input
        .targets
        .iter()
        .map(|target| geotag_target(target, &ctx))
        .collect();
    Ok(GeotagReport { targets })
}

fn geotag_target(target: &TargetSightings, ctx: &GeotagContext) -> TargetGeotagReport {
    // geotags carried in the input are ignored; only this run's results count
    let computed: Vec<Geotag> = target
        .sightings
        .iter()
        .filter_map(|s| compute_geotag(s, ctx))
        .collect();
    let sightings_geotagged = computed.iter().filter(|g| g.position.is_some()).count();

    let geotag = fuse(&computed);
    if geotag.is_none() {
        warn!(
            "target '{}': no complete geotag among {} sighting(s)",
            target.target_id,
            target.sightings.len()
        );
    } else {
        debug!(
            "target '{}': fused {} geotag(s)",
            target.target_id, sightings_geotagged
        );
    }

    TargetGeotagReport {
        target_id: target.target_id.clone(),
        cardinal: geotag.and_then(|g| g.cardinal_direction()),
        geotag,
        sightings_total: target.sightings.len(),
        sightings_geotagged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_empty_report() {
        let report = run_geotagging(&GeotagInput::default(), &GeotagConfig::default()).unwrap();
        assert!(report.targets.is_empty());
    }

    #[test]
    fn duplicate_target_ids_are_rejected() {
        let target = TargetSightings {
            target_id: "t1".into(),
            sightings: Vec::new(),
        };
        let input = GeotagInput {
            targets: vec![target.clone(), target],
        };
        let err = run_geotagging(&input, &GeotagConfig::default()).unwrap_err();
        assert!(err.to_string().contains("duplicate target id"), "{err}");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GeotagConfig {
            focal_length_mm: -1.0,
            ..GeotagConfig::default()
        };
        let err = run_geotagging(&GeotagInput::default(), &config).unwrap_err();
        assert!(format!("{err:#}").contains("focal length"), "{err:#}");
    }

    #[test]
    fn target_without_sightings_has_no_geotag() {
        let input = GeotagInput {
            targets: vec![TargetSightings {
                target_id: "empty".into(),
                sightings: Vec::new(),
            }],
        };
        let report = run_geotagging(&input, &GeotagConfig::default()).unwrap();
        let t = &report.targets[0];
        assert_eq!(t.geotag, None);
        assert_eq!(t.cardinal, None);
        assert_eq!((t.sightings_total, t.sightings_geotagged), (0, 0));
    }
}
