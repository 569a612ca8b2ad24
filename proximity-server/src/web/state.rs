//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::catalog::StationCatalog;
use crate::proximity::ProximityEngine;

/// Shared application state.
///
/// The engine is synchronous and single-owner; the mutex is the dispatch
/// queue that serializes position reports into it.
#[derive(Clone)]
pub struct AppState {
    /// The proximity engine for this session.
    pub engine: Arc<Mutex<ProximityEngine>>,

    /// The shared station catalog.
    pub catalog: StationCatalog,
}

impl AppState {
    /// Create a new app state.
    pub fn new(engine: ProximityEngine, catalog: StationCatalog) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            catalog,
        }
    }
}
