//! Station catalog source.
//!
//! The catalog is session-lifetime data: fetched once from a read-only
//! endpoint (or taken from the built-in seed list), held behind a lock,
//! and refreshed rarely. The engine consumes plain `Vec<Station>`
//! snapshots of it.

mod client;
mod error;
mod seed;
mod store;

pub use client::{CatalogClient, CatalogClientConfig, StationDto};
pub use error::CatalogError;
pub use seed::seed_stations;
pub use store::StationCatalog;
