//! Route table of the climate API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::handlers::{
    heartbeat_handler, index_handler, precipitation_handler, start_end_handler, start_handler,
    stations_handler, tobs_handler,
};
use crate::logging::create_http_trace_layer;
use crate::state::AppState;

/// Build the application router.
///
/// The static `/api/v1.0/...` routes take priority over the `:start`
/// capture, so `/api/v1.0/tobs` never reaches the summary handler.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/:start", get(start_handler))
        .route("/api/v1.0/:start/:end", get(start_end_handler))
        .route("/heartbeat", get(heartbeat_handler))
        .layer(CorsLayer::permissive())
        .layer(create_http_trace_layer())
        .with_state(state)
}
