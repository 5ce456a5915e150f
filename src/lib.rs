//! # climate-api
//!
//! A small read-only HTTP API over weather station observations.
//!
//! The service reads a SQLite store holding daily precipitation and
//! temperature measurements plus the list of reporting stations, and answers
//! a handful of fixed queries as JSON.
//!
//! ## Architecture
//!
//! - **Data Layer**: [`store::ClimateStore`] hands out per-request sessions
//!   over a read-only connection pool
//! - **API Layer**: [`router::build_router`] maps routes to the handlers in
//!   [`handlers`]
//! - **Serialization**: [`response`] turns query rows into the JSON records
//!   clients consume

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod response;
pub mod router;
pub mod schema;
pub mod state;
pub mod store;
pub mod window;

pub use config::Config;
pub use error::{ClimateError, Result};
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_request_error,
    log_store_check_start, log_store_stats, log_store_unavailable,
};
pub use router::build_router;
pub use state::AppState;
pub use store::{ClimateStore, Session};
