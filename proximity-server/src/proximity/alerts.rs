//! Per-station arrival alert state with hysteresis.

use std::collections::HashMap;

use crate::domain::StationId;

use super::config::ProximityConfig;
use super::rank::RankedStation;

/// Notification state of a single station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertState {
    /// Armed: entering the proximity zone will alert.
    #[default]
    Idle,

    /// Already alerted; re-arms only beyond the reset threshold.
    Notified,
}

/// Intent to notify the user that they have arrived at a station.
///
/// The engine only ever *returns* these; delivering them (and gating on
/// user consent) belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArriveAlert {
    /// Id of the station entered.
    pub station_id: StationId,

    /// Display name of the station entered.
    pub station_name: String,
}

/// Tracks which stations have already alerted.
///
/// Only the station currently evaluated as nearest is ever transitioned;
/// every other station retains its last state. A station with no entry in
/// the map is implicitly `Idle`. A station that stops being nearest keeps
/// its state and resumes from it if it becomes nearest again, so hopping
/// briefly toward a different station does not produce a second alert for
/// one the user never actually left.
#[derive(Debug, Clone)]
pub struct AlertTracker {
    config: ProximityConfig,
    states: HashMap<StationId, AlertState>,
}

impl AlertTracker {
    /// Create a tracker with every station idle.
    pub fn new(config: ProximityConfig) -> Self {
        Self {
            config,
            states: HashMap::new(),
        }
    }

    /// Current state of a station; `Idle` if it has never been evaluated.
    pub fn state(&self, id: StationId) -> AlertState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    /// Advance the state machine for the current nearest station.
    ///
    /// Returns an alert exactly once, at the edge where the station goes
    /// from `Idle` to within the enter threshold. Distances inside the
    /// dead band between the two thresholds hold the current state, as do
    /// NaN distances (they satisfy neither comparison).
    pub fn observe_nearest(&mut self, nearest: &RankedStation) -> Option<ArriveAlert> {
        let id = nearest.station.id;
        let distance = nearest.distance_meters;

        match self.state(id) {
            AlertState::Idle if distance <= self.config.enter_m => {
                self.states.insert(id, AlertState::Notified);
                Some(ArriveAlert {
                    station_id: id,
                    station_name: nearest.station.name.clone(),
                })
            }
            AlertState::Notified if distance > self.config.reset_m => {
                self.states.insert(id, AlertState::Idle);
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;

    fn tracker() -> AlertTracker {
        AlertTracker::new(ProximityConfig::default())
    }

    fn ranked(id: i32, name: &str, distance: f64) -> RankedStation {
        RankedStation {
            station: Station::new(StationId(id), name, "1", 43.6456, -79.3807),
            distance_meters: distance,
        }
    }

    #[test]
    fn never_evaluated_is_idle() {
        let t = tracker();
        assert_eq!(t.state(StationId(99)), AlertState::Idle);
    }

    #[test]
    fn alert_fires_once_at_the_entry_edge() {
        let mut t = tracker();

        let alert = t.observe_nearest(&ranked(1, "Union Station", 40.0));
        assert_eq!(
            alert,
            Some(ArriveAlert {
                station_id: StationId(1),
                station_name: "Union Station".to_string(),
            })
        );
        assert_eq!(t.state(StationId(1)), AlertState::Notified);

        // Staying inside the zone does not re-emit.
        assert_eq!(t.observe_nearest(&ranked(1, "Union Station", 10.0)), None);
        assert_eq!(t.observe_nearest(&ranked(1, "Union Station", 49.0)), None);
    }

    #[test]
    fn exactly_enter_threshold_fires() {
        let mut t = tracker();
        assert!(t.observe_nearest(&ranked(1, "Union Station", 50.0)).is_some());
    }

    #[test]
    fn dead_band_holds_idle() {
        let mut t = tracker();
        // Between the thresholds, an idle station stays idle and silent.
        assert_eq!(t.observe_nearest(&ranked(1, "Union Station", 75.0)), None);
        assert_eq!(t.state(StationId(1)), AlertState::Idle);
    }

    #[test]
    fn dead_band_holds_notified() {
        let mut t = tracker();
        t.observe_nearest(&ranked(1, "Union Station", 10.0));

        // 50 < d <= 100: no reset, no alert.
        assert_eq!(t.observe_nearest(&ranked(1, "Union Station", 80.0)), None);
        assert_eq!(t.state(StationId(1)), AlertState::Notified);

        // Exactly the reset threshold still holds.
        assert_eq!(t.observe_nearest(&ranked(1, "Union Station", 100.0)), None);
        assert_eq!(t.state(StationId(1)), AlertState::Notified);

        // Coming back in without ever resetting stays silent.
        assert_eq!(t.observe_nearest(&ranked(1, "Union Station", 30.0)), None);
    }

    #[test]
    fn beyond_reset_re_arms_silently() {
        let mut t = tracker();
        t.observe_nearest(&ranked(1, "Union Station", 10.0));

        assert_eq!(t.observe_nearest(&ranked(1, "Union Station", 120.0)), None);
        assert_eq!(t.state(StationId(1)), AlertState::Idle);

        // Re-entry after a reset alerts again.
        assert!(t.observe_nearest(&ranked(1, "Union Station", 30.0)).is_some());
    }

    #[test]
    fn nearest_switch_retains_old_state() {
        let mut t = tracker();
        t.observe_nearest(&ranked(1, "Union Station", 10.0));
        assert_eq!(t.state(StationId(1)), AlertState::Notified);

        // A different station becomes nearest; station 1 is not evaluated.
        assert!(t.observe_nearest(&ranked(2, "Bloor-Yonge", 40.0)).is_some());
        assert_eq!(t.state(StationId(1)), AlertState::Notified);

        // Station 1 becomes nearest again inside its reset ring: no new alert.
        assert_eq!(t.observe_nearest(&ranked(1, "Union Station", 30.0)), None);
    }

    #[test]
    fn independent_stations() {
        let mut t = tracker();
        assert!(t.observe_nearest(&ranked(1, "Union Station", 20.0)).is_some());
        assert!(t.observe_nearest(&ranked(2, "Bloor-Yonge", 20.0)).is_some());
        assert_eq!(t.state(StationId(1)), AlertState::Notified);
        assert_eq!(t.state(StationId(2)), AlertState::Notified);
    }

    #[test]
    fn nan_distance_never_transitions() {
        let mut t = tracker();

        assert_eq!(t.observe_nearest(&ranked(1, "Union Station", f64::NAN)), None);
        assert_eq!(t.state(StationId(1)), AlertState::Idle);

        t.observe_nearest(&ranked(1, "Union Station", 10.0));
        assert_eq!(t.observe_nearest(&ranked(1, "Union Station", f64::NAN)), None);
        assert_eq!(t.state(StationId(1)), AlertState::Notified);
    }
}
