//! climate-api - a read-only HTTP API over weather station observations
//!
//! This is the main entry point for the climate-api server.

use std::net::SocketAddr;
use std::time::Instant;
use tokio::signal;
use tracing::{error, info, warn};

use climate_api::handlers::heartbeat::init_start_time;
use climate_api::{
    build_router, init_tracing, log_store_check_start, log_store_stats, log_store_unavailable,
    AppState, ClimateError, ClimateStore, Config, Result,
};

fn main() -> Result<()> {
    let config = Config::load()?;

    init_tracing(&config.log_level);

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(workers) = config.server.workers {
        builder.worker_threads(workers);
    }
    let runtime = builder.build()?;

    runtime.block_on(serve(config))
}

async fn serve(config: Config) -> Result<()> {
    init_start_time();
    info!("Starting climate-api v{}", env!("CARGO_PKG_VERSION"));

    let store = ClimateStore::open(&config.database).map_err(|e| {
        error!("Failed to open climate store: {}", e);
        e
    })?;

    // An unreachable store is not fatal: requests report it as a server error
    verify_store(&store, &config.database.url).await;

    let state = AppState::new_shared(config.clone(), store.clone());
    let app = build_router(state);

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| ClimateError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Server error: {}", e),
        })?;

    store.close().await;
    info!("Server has been gracefully shut down");
    Ok(())
}

/// Check the store once at startup and log what it holds
async fn verify_store(store: &ClimateStore, database_url: &str) {
    let started = Instant::now();
    log_store_check_start(database_url);

    let counts = async {
        let mut session = store.session().await?;
        let measurements = session.measurement_count().await?;
        let stations = session.station_count().await?;
        Ok::<_, ClimateError>((measurements, stations))
    }
    .await;

    match counts {
        Ok((measurements, stations)) => {
            log_store_stats(database_url, measurements, stations, started)
        }
        Err(e) => log_store_unavailable(&e, database_url, started),
    }
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
