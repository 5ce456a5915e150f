//! Temperature summary endpoint handlers.
//!
//! `start` and `end` are taken verbatim and compared as strings against the
//! stored `YYYY-MM-DD` dates. Values that are not dates simply match nothing
//! and produce a record of nulls.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::error::Result;
use crate::logging::{generate_request_id, log_request_error};
use crate::response::TemperatureStatsRecord;
use crate::state::AppState;
use crate::store::ClimateStore;

const START_ENDPOINT: &str = "/api/v1.0/{start}";
const RANGE_ENDPOINT: &str = "/api/v1.0/{start}/{end}";

/// Handle GET /api/v1.0/{start} requests
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        route = START_ENDPOINT,
        request_id = %request_id,
        start = %start,
        "Processing temperature summary request"
    );

    match query_stats_since(&state.store, &start).await {
        Ok(summary) => {
            info!(
                route = START_ENDPOINT,
                request_id = %request_id,
                start = %start,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Temperature summary request successful"
            );
            Json(summary).into_response()
        }
        Err(error) => {
            let params = format!("start={start}");
            log_request_error(&error, START_ENDPOINT, &request_id, Some(&params));
            error.into_response_with_id(&request_id)
        }
    }
}

/// Handle GET /api/v1.0/{start}/{end} requests
pub async fn start_end_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        route = RANGE_ENDPOINT,
        request_id = %request_id,
        start = %start,
        end = %end,
        "Processing temperature summary request"
    );

    match query_stats_between(&state.store, &start, &end).await {
        Ok(summary) => {
            info!(
                route = RANGE_ENDPOINT,
                request_id = %request_id,
                start = %start,
                end = %end,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Temperature summary request successful"
            );
            Json(summary).into_response()
        }
        Err(error) => {
            let params = format!("start={start}, end={end}");
            log_request_error(&error, RANGE_ENDPOINT, &request_id, Some(&params));
            error.into_response_with_id(&request_id)
        }
    }
}

async fn query_stats_since(
    store: &ClimateStore,
    start: &str,
) -> Result<Vec<TemperatureStatsRecord>> {
    let mut session = store.session().await?;
    let stats = session.temperature_stats_since(start).await?;
    Ok(vec![stats.into()])
}

async fn query_stats_between(
    store: &ClimateStore,
    start: &str,
    end: &str,
) -> Result<Vec<TemperatureStatsRecord>> {
    let mut session = store.session().await?;
    let stats = session.temperature_stats_between(start, end).await?;
    Ok(vec![stats.into()])
}
