use std::net::SocketAddr;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use proximity_server::catalog::{CatalogClient, CatalogClientConfig, StationCatalog};
use proximity_server::proximity::{ProximityConfig, ProximityEngine};
use proximity_server::web::{AppState, create_router};

/// How often to refresh the station catalog (24 hours).
const CATALOG_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load the catalog: upstream if configured, built-in seed otherwise.
    let catalog = match std::env::var("STATIONS_URL") {
        Ok(url) => {
            let client = CatalogClient::new(CatalogClientConfig::new(&url))
                .expect("Failed to create catalog client");
            match StationCatalog::fetch(client).await {
                Ok(catalog) => {
                    println!("Loaded {} stations from {}", catalog.len().await, url);
                    catalog
                }
                Err(e) => {
                    eprintln!("Warning: failed to fetch stations ({e}); using seed list");
                    StationCatalog::seeded()
                }
            }
        }
        Err(_) => {
            println!("STATIONS_URL not set; using built-in seed list");
            StationCatalog::seeded()
        }
    };

    // One engine per server: this is a single-user tracker.
    let engine = ProximityEngine::new(catalog.snapshot().await, ProximityConfig::default());
    let state = AppState::new(engine, catalog);

    // Spawn background task to refresh the catalog daily.
    let refresh_engine = state.engine.clone();
    let refresh_catalog = state.catalog.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CATALOG_REFRESH_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match refresh_catalog.refresh().await {
                Ok(count) => {
                    let stations = refresh_catalog.snapshot().await;
                    refresh_engine.lock().await.set_catalog(stations);
                    println!("Refreshed station catalog: {} stations", count);
                }
                Err(e) => eprintln!("Failed to refresh station catalog: {}", e),
            }
        }
    });

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let app = create_router(state, &static_dir);

    // Bind and serve
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()
        .expect("BIND_ADDR must be a socket address");
    println!("Station Proximity listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the tracker interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health             - Health check");
    println!("  GET  /api/stations       - Station catalog");
    println!("  POST /api/position       - Report a position fix");
    println!("  POST /api/position/lost  - Report a position outage");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
