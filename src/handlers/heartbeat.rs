//! Heartbeat endpoint handler.
//!
//! Returns server status information: uptime and what the climate store
//! currently holds.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::warn;
use uuid::Uuid;

use crate::error::Result;
use crate::state::AppState;
use crate::store::ClimateStore;

/// Random per-process server ID
static SERVER_ID: once_cell::sync::Lazy<String> =
    once_cell::sync::Lazy::new(|| Uuid::new_v4().to_string());

/// Server start time
static START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

/// Heartbeat response structure
#[derive(Debug, Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Store information
    pub store: StoreInfo,
    /// `healthy`, or `degraded` when the store could not be read
    pub status: String,
}

/// Store information structure; the store location is never echoed
#[derive(Debug, Serialize)]
pub struct StoreInfo {
    pub measurement_count: Option<i64>,
    pub station_count: Option<i64>,
    /// Why the counts are missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Mark the process start; call once at startup so uptime is measured from there
pub fn init_start_time() {
    once_cell::sync::Lazy::force(&START_TIME);
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Json<HeartbeatResponse> {
    let now = SystemTime::now();
    let timestamp = chrono::DateTime::<chrono::Utc>::from(now)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

    let uptime = now
        .duration_since(*START_TIME)
        .unwrap_or(Duration::from_secs(0));

    let (store, status) = match count_rows(&state.store).await {
        Ok((measurement_count, station_count)) => (
            StoreInfo {
                measurement_count: Some(measurement_count),
                station_count: Some(station_count),
                error: None,
            },
            "healthy",
        ),
        Err(error) => {
            warn!(route = "/heartbeat", error = %error, "Climate store unavailable");
            (
                StoreInfo {
                        measurement_count: None,
                    station_count: None,
                    error: Some(error.to_string()),
                },
                "degraded",
            )
        }
    };

    Json(HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: uptime.as_secs(),
        store,
        status: status.to_string(),
    })
}

async fn count_rows(store: &ClimateStore) -> Result<(i64, i64)> {
    let mut session = store.session().await?;
    let measurements = session.measurement_count().await?;
    let stations = session.station_count().await?;
    Ok((measurements, stations))
}
