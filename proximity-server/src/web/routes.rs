//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use chrono::Utc;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::domain::PositionFix;

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/position", post(report_position))
        .route("/api/position/lost", post(report_signal_lost))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page: the tracker shell, populated by `static/app.js`.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// List the station catalog.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .catalog
        .snapshot()
        .await
        .iter()
        .map(StationResult::from_station)
        .collect();

    Json(StationsResponse { stations })
}

/// Ingest one position fix and return the engine snapshot.
async fn report_position(
    State(state): State<AppState>,
    Json(report): Json<PositionReport>,
) -> Result<Json<SnapshotResponse>, AppError> {
    // The engine tolerates NaN by degrading, but malformed client input
    // is filtered here at the boundary.
    if !report.latitude.is_finite() || !report.longitude.is_finite() {
        return Err(AppError::BadRequest {
            message: "latitude and longitude must be finite numbers".to_string(),
        });
    }

    let mut fix = PositionFix::new(
        report.latitude,
        report.longitude,
        report.timestamp.unwrap_or_else(Utc::now),
    );
    if let Some(accuracy) = report.accuracy_m {
        fix = fix.with_accuracy(accuracy);
    }

    let snapshot = {
        let mut engine = state.engine.lock().await;
        engine.on_fix(fix)
    };

    for alert in &snapshot.alerts {
        info!(
            station_id = %alert.station_id,
            station = %alert.station_name,
            "arrival alert"
        );
    }

    Ok(Json(SnapshotResponse::from_snapshot(&snapshot)))
}

/// The client's position source went away; clear the held fix.
async fn report_signal_lost(
    State(state): State<AppState>,
    Json(report): Json<SignalLostReport>,
) -> Json<SnapshotResponse> {
    warn!(
        reason = report.reason.as_deref().unwrap_or("unknown"),
        "position source unavailable"
    );

    let snapshot = {
        let mut engine = state.engine.lock().await;
        engine.on_signal_lost()
    };

    Json(SnapshotResponse::from_snapshot(&snapshot))
}

/// Application-level error.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_status_codes() {
        let bad = AppError::BadRequest {
            message: "nope".into(),
        };
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);

        let internal = AppError::Internal {
            message: "boom".into(),
        };
        assert_eq!(
            internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
