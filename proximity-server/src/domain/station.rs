//! Station catalog records.

use std::fmt;

use crate::geo::Point;

/// Stable unique identifier for a station.
///
/// Ids are assigned by the catalog source and persist across catalog
/// refreshes, so per-station state keyed by id survives a `set_catalog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub i32);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transit station.
///
/// Created once at catalog load and never mutated during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Stable unique id.
    pub id: StationId,

    /// Display name, e.g. "Union Station".
    pub name: String,

    /// Display line label, e.g. "1" or "1/2".
    pub line: String,

    /// WGS-84 latitude in degrees.
    pub latitude: f64,

    /// WGS-84 longitude in degrees.
    pub longitude: f64,
}

impl Station {
    /// Create a new station record.
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        line: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            line: line.into(),
            latitude,
            longitude,
        }
    }

    /// The station's position as a geo point.
    pub fn position(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }
}
