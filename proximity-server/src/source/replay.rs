//! Replay position source backed by JSON trace files.
//!
//! A trace is a JSON array of records, each either a fix:
//!
//! ```json
//! {"latitude": 43.6456, "longitude": -79.3807,
//!  "accuracy_m": 12.0, "timestamp": "2024-03-15T12:00:00Z"}
//! ```
//!
//! or an outage:
//!
//! ```json
//! {"error": "signal lost"}
//! ```
//!
//! Useful for replaying a recorded walk through the engine without a
//! real device.

use std::collections::VecDeque;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::PositionFix;

use super::PositionUpdate;

/// Errors from loading a replay trace.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// Failed to read the trace file
    #[error("failed to read trace file: {0}")]
    Io(#[from] std::io::Error),

    /// Trace file is not valid JSON in the expected shape
    #[error("failed to parse trace: {0}")]
    Json(#[from] serde_json::Error),
}

/// One record of a trace file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TraceRecord {
    Unavailable {
        error: String,
    },
    Fix {
        latitude: f64,
        longitude: f64,
        accuracy_m: Option<f64>,
        timestamp: DateTime<Utc>,
    },
}

/// A position source that replays a recorded trace in order.
#[derive(Debug)]
pub struct ReplayPositionSource {
    updates: VecDeque<PositionUpdate>,
}

impl ReplayPositionSource {
    /// Load a trace from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse a trace from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        let records: Vec<TraceRecord> = serde_json::from_str(json)?;

        let updates = records
            .into_iter()
            .map(|record| match record {
                TraceRecord::Unavailable { error } => PositionUpdate::Unavailable { reason: error },
                TraceRecord::Fix {
                    latitude,
                    longitude,
                    accuracy_m,
                    timestamp,
                } => {
                    let mut fix = PositionFix::new(latitude, longitude, timestamp);
                    if let Some(accuracy) = accuracy_m {
                        fix = fix.with_accuracy(accuracy);
                    }
                    PositionUpdate::Fix(fix)
                }
            })
            .collect();

        Ok(Self { updates })
    }

    /// Number of updates remaining.
    pub fn len(&self) -> usize {
        self.updates.len()
    }

    /// Whether the trace is exhausted.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

impl Iterator for ReplayPositionSource {
    type Item = PositionUpdate;

    fn next(&mut self) -> Option<PositionUpdate> {
        self.updates.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TRACE: &str = r#"[
        {"latitude": 43.6456, "longitude": -79.3807,
         "accuracy_m": 12.0, "timestamp": "2024-03-15T12:00:00Z"},
        {"error": "signal lost"},
        {"latitude": 43.6460, "longitude": -79.3807,
         "timestamp": "2024-03-15T12:00:10Z"}
    ]"#;

    #[test]
    fn parses_fixes_and_outages_in_order() {
        let mut source = ReplayPositionSource::from_json(TRACE).unwrap();
        assert_eq!(source.len(), 3);

        match source.next().unwrap() {
            PositionUpdate::Fix(fix) => {
                assert_eq!(fix.latitude, 43.6456);
                assert_eq!(fix.accuracy_m, Some(12.0));
            }
            other => panic!("expected fix, got {other:?}"),
        }

        match source.next().unwrap() {
            PositionUpdate::Unavailable { reason } => assert_eq!(reason, "signal lost"),
            other => panic!("expected outage, got {other:?}"),
        }

        match source.next().unwrap() {
            PositionUpdate::Fix(fix) => assert_eq!(fix.accuracy_m, None),
            other => panic!("expected fix, got {other:?}"),
        }

        assert!(source.next().is_none());
        assert!(source.is_empty());
    }

    #[test]
    fn empty_trace_is_valid() {
        let source = ReplayPositionSource::from_json("[]").unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn rejects_malformed_records() {
        assert!(ReplayPositionSource::from_json(r#"[{"latitude": 1.0}]"#).is_err());
        assert!(ReplayPositionSource::from_json("not json").is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TRACE.as_bytes()).unwrap();

        let source = ReplayPositionSource::from_file(file.path()).unwrap();
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ReplayPositionSource::from_file("/nonexistent/trace.json").unwrap_err();
        assert!(matches!(err, ReplayError::Io(_)));
    }

    #[test]
    fn replayed_trace_drives_the_engine() {
        use crate::catalog::seed_stations;
        use crate::proximity::{ProximityConfig, ProximityEngine};

        let mut engine = ProximityEngine::new(seed_stations(), ProximityConfig::default());
        let source = ReplayPositionSource::from_json(TRACE).unwrap();

        for update in source {
            let snapshot = match update {
                PositionUpdate::Fix(fix) => engine.on_fix(fix),
                PositionUpdate::Unavailable { .. } => engine.on_signal_lost(),
            };
            assert!(snapshot.alerts.len() <= 1);
        }
    }
}
