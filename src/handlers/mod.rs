//! HTTP request handlers for the climate API.
//!
//! This module contains all the endpoint handlers for the web server.

pub mod heartbeat;
pub mod index;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use heartbeat::heartbeat_handler;
pub use index::index_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use temperature::{start_end_handler, start_handler};
pub use tobs::tobs_handler;
