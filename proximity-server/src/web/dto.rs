//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::proximity::{ArriveAlert, EngineSnapshot, RankedStation};

/// A position report from the client's geolocation watch.
#[derive(Debug, Deserialize)]
pub struct PositionReport {
    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,

    /// Reported accuracy radius in meters
    pub accuracy_m: Option<f64>,

    /// When the fix was taken (defaults to receipt time)
    pub timestamp: Option<DateTime<Utc>>,
}

/// Report that the client's position source is unavailable.
#[derive(Debug, Deserialize)]
pub struct SignalLostReport {
    /// Reason string from the source, if any
    pub reason: Option<String>,
}

/// A station in catalog responses.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: i32,
    pub name: String,
    pub line: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.0,
            name: station.name.clone(),
            line: station.line.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
        }
    }
}

/// Response for the station catalog listing.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

/// A ranked station in snapshot responses.
#[derive(Debug, Serialize)]
pub struct RankedStationResult {
    pub id: i32,
    pub name: String,
    pub line: String,

    /// Distance from the reported position, in meters
    pub distance_meters: f64,
}

impl RankedStationResult {
    /// Create from a ranked engine entry.
    pub fn from_ranked(ranked: &RankedStation) -> Self {
        Self {
            id: ranked.station.id.0,
            name: ranked.station.name.clone(),
            line: ranked.station.line.clone(),
            distance_meters: ranked.distance_meters,
        }
    }
}

/// An emitted arrival alert.
#[derive(Debug, Serialize)]
pub struct AlertResult {
    pub station_id: i32,
    pub station_name: String,
}

impl AlertResult {
    /// Create from an engine alert intent.
    pub fn from_alert(alert: &ArriveAlert) -> Self {
        Self {
            station_id: alert.station_id.0,
            station_name: alert.station_name.clone(),
        }
    }
}

/// Response for a position report: the engine snapshot.
#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    /// Every station, nearest first
    pub ranked: Vec<RankedStationResult>,

    /// The nearest station, if any
    pub nearest: Option<RankedStationResult>,

    /// Display band for the nearest distance
    pub band: Option<&'static str>,

    /// Alerts to deliver (at most one per report)
    pub alerts: Vec<AlertResult>,
}

impl SnapshotResponse {
    /// Create from an engine snapshot.
    pub fn from_snapshot(snapshot: &EngineSnapshot) -> Self {
        Self {
            ranked: snapshot
                .ranked
                .iter()
                .map(RankedStationResult::from_ranked)
                .collect(),
            nearest: snapshot
                .nearest
                .as_ref()
                .map(RankedStationResult::from_ranked),
            band: snapshot.band.map(|b| b.label()),
            alerts: snapshot.alerts.iter().map(AlertResult::from_alert).collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PositionFix, StationId};
    use crate::proximity::{ProximityConfig, ProximityEngine};
    use chrono::TimeZone;

    #[test]
    fn snapshot_response_maps_all_fields() {
        let station = Station::new(StationId(1), "Union", "1", 43.6456, -79.3807);
        let mut engine = ProximityEngine::new(vec![station], ProximityConfig::default());

        let fix = PositionFix::new(
            43.6456,
            -79.3807,
            Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
        );
        let snapshot = engine.on_fix(fix);
        let response = SnapshotResponse::from_snapshot(&snapshot);

        assert_eq!(response.ranked.len(), 1);
        assert_eq!(response.nearest.as_ref().unwrap().id, 1);
        assert_eq!(response.band, Some("arrived"));
        assert_eq!(response.alerts.len(), 1);
        assert_eq!(response.alerts[0].station_name, "Union");
    }

    #[test]
    fn empty_snapshot_serializes_cleanly() {
        let mut engine = ProximityEngine::new(Vec::new(), ProximityConfig::default());
        let snapshot = engine.on_signal_lost();
        let response = SnapshotResponse::from_snapshot(&snapshot);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["ranked"], serde_json::json!([]));
        assert_eq!(json["nearest"], serde_json::Value::Null);
        assert_eq!(json["band"], serde_json::Value::Null);
        assert_eq!(json["alerts"], serde_json::json!([]));
    }

    #[test]
    fn position_report_parses_minimal_body() {
        let report: PositionReport =
            serde_json::from_str(r#"{"latitude": 43.6, "longitude": -79.4}"#).unwrap();
        assert_eq!(report.latitude, 43.6);
        assert_eq!(report.accuracy_m, None);
        assert_eq!(report.timestamp, None);
    }
}
