//! Precipitation endpoint handler.
//!
//! Returns every measurement's date and precipitation, unfiltered.

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
use crate::response::{records, PrecipitationRecord};
use crate::state::AppState;
use crate::store::ClimateStore;

const ENDPOINT: &str = "/api/v1.0/precipitation";

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        route = ENDPOINT,
        request_id = %request_id,
        "Processing precipitation request"
    );

    match query_precipitation(&state.store).await {
        Ok(rows) => {
            info!(
                route = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                rows = rows.len(),
                "Precipitation request successful"
            );
            Json(rows).into_response()
        }
        Err(error) => {
            log_request_error(&error, ENDPOINT, &request_id, None);
            error.into_response_with_id(&request_id)
        }
    }
}

async fn query_precipitation(store: &ClimateStore) -> Result<Vec<PrecipitationRecord>> {
    let mut session = store.session().await?;
    let rows = session.all_measurement_dates_and_precipitation().await?;
    Ok(records(rows))
}
