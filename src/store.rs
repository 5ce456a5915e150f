//! Read-only access to the SQLite climate store.
//!
//! [`ClimateStore`] lives for the whole process and owns the connection pool.
//! Each request derives a [`Session`] from it; the session holds one pooled
//! connection and hands it back when dropped, on success and error paths
//! alike.

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use std::str::FromStr;
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::error::{ClimateError, Result};
use crate::models::{PrecipitationRow, TemperatureRow, TemperatureStats};

const SELECT_PRECIPITATION: &str = "SELECT date, prcp FROM measurement";

const SELECT_STATION_NAMES: &str = "SELECT name FROM station";

const SELECT_LAST_DATE: &str = "SELECT date FROM measurement ORDER BY date DESC LIMIT 1";

const SELECT_TEMPERATURES_SINCE: &str = "SELECT date, tobs FROM measurement WHERE date >= ?";

const SELECT_STATS_SINCE: &str = "SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax \
     FROM measurement WHERE date >= ?";

const SELECT_STATS_BETWEEN: &str = "SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax \
     FROM measurement WHERE date >= ? AND date <= ?";

const COUNT_MEASUREMENTS: &str = "SELECT COUNT(*) FROM measurement";

const COUNT_STATIONS: &str = "SELECT COUNT(*) FROM station";

/// Handle to the climate store shared by all requests
#[derive(Debug, Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    /// Prepare a store for the configured database.
    ///
    /// No connection is made here. The database is opened read-only and a
    /// missing file is never created, so an unreachable store shows up as a
    /// [`ClimateError::Connection`] when a session is requested.
    ///
    /// Must be called from within a tokio runtime.
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| ClimateError::Config {
                message: format!("Invalid database URL {}: {}", config.url, e),
            })?
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(options);

        Ok(Self { pool })
    }

    /// Acquire a session scoped to the caller
    pub async fn session(&self) -> Result<Session> {
        let conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| ClimateError::Connection {
                message: e.to_string(),
            })?;
        Ok(Session { conn })
    }

    /// Close the pool, waiting for checked out sessions to be returned
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// One pooled connection, held for the duration of a request.
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    /// All `(date, prcp)` pairs, unfiltered, in storage order
    pub async fn all_measurement_dates_and_precipitation(
        &mut self,
    ) -> Result<Vec<PrecipitationRow>> {
        let rows = sqlx::query_as::<_, PrecipitationRow>(SELECT_PRECIPITATION)
            .fetch_all(&mut *self.conn)
            .await?;
        debug!(rows = rows.len(), "Fetched precipitation rows");
        Ok(rows)
    }

    /// All station names, in storage order
    pub async fn all_station_names(&mut self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(SELECT_STATION_NAMES)
            .fetch_all(&mut *self.conn)
            .await?;
        debug!(rows = names.len(), "Fetched station names");
        Ok(names)
    }

    /// Most recent measurement date, `None` if there are no measurements
    pub async fn last_measurement_date(&mut self) -> Result<Option<String>> {
        let date = sqlx::query_scalar::<_, String>(SELECT_LAST_DATE)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(date)
    }

    /// `(date, tobs)` pairs with `date >= since`
    pub async fn temperatures_since(&mut self, since: &str) -> Result<Vec<TemperatureRow>> {
        let rows = sqlx::query_as::<_, TemperatureRow>(SELECT_TEMPERATURES_SINCE)
            .bind(since)
            .fetch_all(&mut *self.conn)
            .await?;
        debug!(since = since, rows = rows.len(), "Fetched temperature rows");
        Ok(rows)
    }

    /// Min, average and max of `tobs` with `date >= start`
    pub async fn temperature_stats_since(&mut self, start: &str) -> Result<TemperatureStats> {
        let stats = sqlx::query_as::<_, TemperatureStats>(SELECT_STATS_SINCE)
            .bind(start)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(stats)
    }

    /// Min, average and max of `tobs` with `start <= date <= end`
    pub async fn temperature_stats_between(
        &mut self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureStats> {
        let stats = sqlx::query_as::<_, TemperatureStats>(SELECT_STATS_BETWEEN)
            .bind(start)
            .bind(end)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(stats)
    }

    /// Number of rows in the measurement table
    pub async fn measurement_count(&mut self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(COUNT_MEASUREMENTS)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(count)
    }

    /// Number of rows in the station table
    pub async fn station_count(&mut self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(COUNT_STATIONS)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(count)
    }
}
