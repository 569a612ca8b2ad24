//! Engine driver: ranking plus the alert state machine, per fix.

use tracing::debug;

use crate::domain::{PositionFix, Station};

use super::alerts::{AlertTracker, ArriveAlert};
use super::config::{ProximityBand, ProximityConfig};
use super::rank::{RankedStation, rank_stations};

/// Result of one engine cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSnapshot {
    /// Every catalog station, nearest first.
    pub ranked: Vec<RankedStation>,

    /// The nearest station, if the catalog and fix allowed ranking.
    pub nearest: Option<RankedStation>,

    /// Display band for the nearest distance.
    pub band: Option<ProximityBand>,

    /// Alerts emitted this cycle. At most one, since only the nearest
    /// station is evaluated per cycle; almost always empty.
    pub alerts: Vec<ArriveAlert>,
}

impl EngineSnapshot {
    /// The snapshot for the no-fix / empty-catalog steady state.
    fn empty() -> Self {
        Self {
            ranked: Vec::new(),
            nearest: None,
            band: None,
            alerts: Vec::new(),
        }
    }
}

/// Drives the proximity state machine from incoming position fixes.
///
/// Owns the catalog, the latest fix, and the per-station alert state;
/// `on_fix` and `set_catalog` are its only mutators. One instance per
/// tracked session, invoked synchronously; callers that share an instance
/// across tasks must serialize calls themselves.
pub struct ProximityEngine {
    catalog: Vec<Station>,
    config: ProximityConfig,
    tracker: AlertTracker,
    last_fix: Option<PositionFix>,
}

impl ProximityEngine {
    /// Create an engine over the given catalog.
    pub fn new(catalog: Vec<Station>, config: ProximityConfig) -> Self {
        let tracker = AlertTracker::new(config.clone());
        Self {
            catalog,
            config,
            tracker,
            last_fix: None,
        }
    }

    /// Process one position fix and return the resulting snapshot.
    pub fn on_fix(&mut self, fix: PositionFix) -> EngineSnapshot {
        self.last_fix = Some(fix);

        let ranked = rank_stations(Some(&fix), &self.catalog);
        let nearest = ranked.first().cloned();

        let mut alerts = Vec::new();
        let mut band = None;
        if let Some(nearest) = &nearest {
            band = Some(self.config.classify(nearest.distance_meters));
            debug!(
                station = %nearest.station.name,
                distance_m = nearest.distance_meters,
                "nearest station"
            );

            if let Some(alert) = self.tracker.observe_nearest(nearest) {
                debug!(station = %alert.station_name, "arrival alert emitted");
                alerts.push(alert);
            }
        }

        EngineSnapshot {
            ranked,
            nearest,
            band,
            alerts,
        }
    }

    /// The position source reported itself unavailable.
    ///
    /// Clears the held fix; ranking degrades to empty until fixes resume.
    /// Alert state is untouched, so no alert is lost across an outage.
    pub fn on_signal_lost(&mut self) -> EngineSnapshot {
        self.last_fix = None;
        EngineSnapshot::empty()
    }

    /// Replace the held catalog.
    ///
    /// Alert state is keyed by station id and ids persist across catalog
    /// refreshes, so it is deliberately not reset.
    pub fn set_catalog(&mut self, catalog: Vec<Station>) {
        self.catalog = catalog;
    }

    /// The held catalog.
    pub fn catalog(&self) -> &[Station] {
        &self.catalog
    }

    /// The most recent fix, if any.
    pub fn last_fix(&self) -> Option<&PositionFix> {
        self.last_fix.as_ref()
    }
}
