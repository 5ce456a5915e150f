//! Logging for the climate API server.
//!
//! Two kinds of events are emitted: the startup check against the climate
//! store, and per-request failures. Both carry structured fields (`store`,
//! `route`, `request_id`) so a single request or store can be followed
//! through the logs.

use std::time::Instant;
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use uuid::Uuid;

use crate::error::ClimateError;

/// HTTP span layer. Spans open at info; request and response events are
/// debug only since handlers already log their outcome.
pub fn create_http_trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::DEBUG)
                .latency_unit(LatencyUnit::Micros),
        )
}

/// Install the global subscriber. `RUST_LOG`, when set, replaces `log_level`
/// entirely, so per-target filters like `sqlx=warn` can be given there.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .init();
}

/// Startup check is about to open a session on `store`
pub fn log_store_check_start(store: &str) {
    info!(store = store, "Checking climate store");
}

/// Startup check read the table sizes
pub fn log_store_stats(store: &str, measurement_count: i64, station_count: i64, started: Instant) {
    info!(
        store = store,
        measurement_count = measurement_count,
        station_count = station_count,
        duration_ms = elapsed_ms(started),
        "Climate store reachable"
    );
}

/// Startup check failed. Not fatal: the server keeps running and each
/// request reports the store error itself.
pub fn log_store_unavailable(error: &ClimateError, store: &str, started: Instant) {
    warn!(
        store = store,
        error = %error,
        error_kind = error.kind(),
        duration_ms = elapsed_ms(started),
        "Climate store unavailable, serving anyway"
    );
}

/// A request on `route` failed and is being answered with an error body.
///
/// `query_params` is the path parameters as `name=value` pairs, if the route
/// has any.
pub fn log_request_error(
    error: &ClimateError,
    route: &str,
    request_id: &str,
    query_params: Option<&str>,
) {
    error!(
        route = route,
        request_id = request_id,
        query_params = query_params.unwrap_or("-"),
        status = error.status_code().as_u16(),
        error_kind = error.kind(),
        error = %error,
        "Request failed"
    );
}

/// New request id, returned to clients in error bodies
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
