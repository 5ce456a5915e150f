//! Stations endpoint handler.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::error::Result;
use crate::logging::{generate_request_id, log_request_error};
use crate::state::AppState;
use crate::store::ClimateStore;

const ENDPOINT: &str = "/api/v1.0/stations";

/// Handle GET /api/v1.0/stations requests
///
/// Responds with a flat JSON array of station names in storage order.
pub async fn stations_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        route = ENDPOINT,
        request_id = %request_id,
        "Processing stations request"
    );

    match query_station_names(&state.store).await {
        Ok(names) => {
            info!(
                route = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                rows = names.len(),
                "Stations request successful"
            );
            Json(names).into_response()
        }
        Err(error) => {
            log_request_error(&error, ENDPOINT, &request_id, None);
            error.into_response_with_id(&request_id)
        }
    }
}

async fn query_station_names(store: &ClimateStore) -> Result<Vec<String>> {
    let mut session = store.session().await?;
    session.all_station_names().await
}
