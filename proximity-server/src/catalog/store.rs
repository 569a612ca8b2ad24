//! Shared station catalog with background refresh.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Station, StationId};

use super::client::{CatalogClient, StationDto};
use super::error::CatalogError;
use super::seed::seed_stations;

/// Thread-safe station catalog.
///
/// Holds the current station list for the lifetime of the process and
/// supports replacing it wholesale on refresh. Readers take cheap
/// snapshots; the engine never sees the lock.
#[derive(Clone)]
pub struct StationCatalog {
    inner: Arc<RwLock<Vec<Station>>>,
    client: Option<CatalogClient>,
}

impl StationCatalog {
    /// Create a catalog by fetching from the upstream endpoint.
    pub async fn fetch(client: CatalogClient) -> Result<Self, CatalogError> {
        let stations = build_stations(client.fetch_all().await?);

        Ok(Self {
            inner: Arc::new(RwLock::new(stations)),
            client: Some(client),
        })
    }

    /// Create a catalog from the built-in seed list.
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(RwLock::new(seed_stations())),
            client: None,
        }
    }

    /// Create a catalog from an explicit station list (for tests).
    pub fn from_stations(stations: Vec<Station>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(stations)),
            client: None,
        }
    }

    /// A copy of the current station list.
    pub async fn snapshot(&self) -> Vec<Station> {
        let guard = self.inner.read().await;
        guard.clone()
    }

    /// Number of stations currently held.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Whether the catalog is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Re-fetch the station list from the upstream endpoint.
    ///
    /// On success the held list is replaced and the new count returned.
    /// On failure the existing list is preserved and the error returned.
    /// Seed-backed catalogs have no upstream and return their current
    /// count unchanged.
    pub async fn refresh(&self) -> Result<usize, CatalogError> {
        let Some(client) = &self.client else {
            return Ok(self.len().await);
        };

        let stations = build_stations(client.fetch_all().await?);
        let count = stations.len();

        let mut guard = self.inner.write().await;
        *guard = stations;

        Ok(count)
    }
}

/// Convert wire records to domain stations.
///
/// Records with non-finite coordinates are dropped here, at the boundary;
/// the engine downstream assumes the caller has filtered its input.
fn build_stations(dtos: Vec<StationDto>) -> Vec<Station> {
    dtos.into_iter()
        .filter(|dto| dto.latitude.is_finite() && dto.longitude.is_finite())
        .map(|dto| {
            Station::new(
                StationId(dto.id),
                dto.name,
                dto.line,
                dto.latitude,
                dto.longitude,
            )
        })
        .collect()
}
