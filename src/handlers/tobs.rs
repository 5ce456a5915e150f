//! Temperature observations endpoint handler.
//!
//! Returns the observations of the trailing 365 days, ending at the most
//! recent date in the store.

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
use crate::response::{records, TemperatureRecord};
use crate::state::AppState;
use crate::store::ClimateStore;
use crate::window::window_start_for;

const ENDPOINT: &str = "/api/v1.0/tobs";

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        route = ENDPOINT,
        request_id = %request_id,
        "Processing temperature observations request"
    );

    match query_recent_temperatures(&state.store).await {
        Ok(rows) => {
            info!(
                route = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                rows = rows.len(),
                "Temperature observations request successful"
            );
            Json(rows).into_response()
        }
        Err(error) => {
            log_request_error(&error, ENDPOINT, &request_id, None);
            error.into_response_with_id(&request_id)
        }
    }
}

async fn query_recent_temperatures(store: &ClimateStore) -> Result<Vec<TemperatureRecord>> {
    let mut session = store.session().await?;

    // An empty store has no window to report
    let Some(last_date) = session.last_measurement_date().await? else {
        return Ok(Vec::new());
    };
    let since = window_start_for(&last_date)?;
    debug!(last_date = %last_date, since = %since, "Computed observation window");

    let rows = session.temperatures_since(&since).await?;
    Ok(records(rows))
}
