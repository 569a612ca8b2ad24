//! Web layer for the proximity tracker.
//!
//! Serves the station list, accepts position reports from the client's
//! geolocation watch, and returns engine snapshots including any alert
//! intents. Actual notification delivery (and its permission prompt)
//! happens in the browser.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
