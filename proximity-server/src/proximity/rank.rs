//! Station ranking by distance from the latest fix.

use crate::domain::{PositionFix, Station};
use crate::geo;

/// A station paired with its distance from the latest position fix.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStation {
    /// The catalog station.
    pub station: Station,

    /// Great-circle distance from the fix, in meters.
    pub distance_meters: f64,
}

/// Rank every catalog station by distance from the fix, nearest first.
///
/// Returns an empty sequence (not an error) when there is no fix or the
/// catalog is empty. The sort is stable, so stations at equal distance
/// keep their catalog order. Pure: safe to call on every fix at any rate.
pub fn rank_stations(fix: Option<&PositionFix>, catalog: &[Station]) -> Vec<RankedStation> {
    let Some(fix) = fix else {
        return Vec::new();
    };

    let origin = fix.point();
    let mut ranked: Vec<RankedStation> = catalog
        .iter()
        .map(|station| RankedStation {
            station: station.clone(),
            distance_meters: geo::distance_meters(origin, station.position()),
        })
        .collect();

    // total_cmp keeps the sort panic-free when a degraded fix produces
    // NaN distances; NaN sorts after every real distance.
    ranked.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));

    ranked
}
