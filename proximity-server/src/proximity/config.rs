//! Proximity engine configuration.

/// Error returned when constructing an invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid proximity config: {reason}")]
pub struct InvalidConfig {
    reason: &'static str,
}

/// Distance thresholds for the notification state machine.
///
/// The gap between `enter_m` and `reset_m` is the hysteresis band: once a
/// station has alerted, it does not re-arm until the user moves beyond
/// `reset_m`, so GPS jitter around the entry boundary cannot produce
/// repeated alerts.
#[derive(Debug, Clone)]
pub struct ProximityConfig {
    /// Entering within this distance of the nearest station fires the alert.
    pub enter_m: f64,

    /// Moving beyond this distance re-arms an alerted station.
    /// Strictly greater than `enter_m`.
    pub reset_m: f64,

    /// Display-only boundary between "approaching" and "en route".
    pub approach_m: f64,
}

impl ProximityConfig {
    /// Create a configuration, validating the threshold relationship.
    pub fn new(enter_m: f64, reset_m: f64, approach_m: f64) -> Result<Self, InvalidConfig> {
        if !enter_m.is_finite() || !reset_m.is_finite() || !approach_m.is_finite() {
            return Err(InvalidConfig {
                reason: "thresholds must be finite",
            });
        }
        if enter_m <= 0.0 || approach_m <= 0.0 {
            return Err(InvalidConfig {
                reason: "thresholds must be positive",
            });
        }
        if reset_m <= enter_m {
            return Err(InvalidConfig {
                reason: "reset threshold must be strictly greater than enter threshold",
            });
        }

        Ok(Self {
            enter_m,
            reset_m,
            approach_m,
        })
    }

    /// Classify a nearest-station distance for display.
    ///
    /// NaN distances fall through to `EnRoute`.
    pub fn classify(&self, distance_m: f64) -> ProximityBand {
        if distance_m < self.enter_m {
            ProximityBand::Arrived
        } else if distance_m < self.approach_m {
            ProximityBand::Approaching
        } else {
            ProximityBand::EnRoute
        }
    }
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            enter_m: 50.0,
            reset_m: 100.0,
            approach_m: 500.0,
        }
    }
}

/// Coarse display classification of the distance to the nearest station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityBand {
    /// Within the alert zone.
    Arrived,

    /// Close, but not yet inside the alert zone.
    Approaching,

    /// Nowhere near a station.
    EnRoute,
}

impl ProximityBand {
    /// Stable lowercase label for serialization and CSS classes.
    pub fn label(&self) -> &'static str {
        match self {
            ProximityBand::Arrived => "arrived",
            ProximityBand::Approaching => "approaching",
            ProximityBand::EnRoute => "en_route",
        }
    }
}
