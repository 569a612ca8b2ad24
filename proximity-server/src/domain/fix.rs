//! Position fixes from the location source.

use chrono::{DateTime, Utc};

use crate::geo::Point;

/// A single position fix.
///
/// Fixes arrive at whatever cadence the location source produces them,
/// including not at all; the engine holds at most the latest one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionFix {
    /// WGS-84 latitude in degrees.
    pub latitude: f64,

    /// WGS-84 longitude in degrees.
    pub longitude: f64,

    /// Reported accuracy radius in meters, if the source provides one.
    pub accuracy_m: Option<f64>,

    /// When the fix was taken.
    pub timestamp: DateTime<Utc>,
}

impl PositionFix {
    /// Create a fix without accuracy information.
    pub fn new(latitude: f64, longitude: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_m: None,
            timestamp,
        }
    }

    /// Attach a reported accuracy radius.
    pub fn with_accuracy(mut self, meters: f64) -> Self {
        self.accuracy_m = Some(meters);
        self
    }

    /// The fix position as a geo point.
    pub fn point(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }
}
