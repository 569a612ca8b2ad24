//! Position source collaborators.
//!
//! The live position source in this system is the browser geolocation
//! watch on the client, which reports over HTTP. This module defines the
//! vocabulary those reports arrive in, plus a file-backed replay source
//! for driving the engine deterministically in tests and development.

mod replay;

pub use replay::{ReplayError, ReplayPositionSource};

use crate::domain::PositionFix;

/// One report from a position source.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionUpdate {
    /// A position fix.
    Fix(PositionFix),

    /// The source cannot currently produce a fix (permission denied,
    /// signal lost, hardware unsupported).
    Unavailable {
        /// Human-readable reason from the source.
        reason: String,
    },
}
