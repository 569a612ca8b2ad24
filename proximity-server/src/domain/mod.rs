//! Domain types for the proximity tracker.
//!
//! This module contains the records the engine operates on: the immutable
//! station catalog entries and the position fixes supplied by the location
//! source. Both are plain data; all behavior lives in the engine.

mod fix;
mod station;

pub use fix::PositionFix;
pub use station::{Station, StationId};
