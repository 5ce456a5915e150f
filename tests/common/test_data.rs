//! Test data generation utilities.
//!
//! Builds SQLite climate stores with known contents for the integration
//! tests.

#![allow(dead_code)]

use chrono::{Datelike, NaiveDate};
use climate_api::models::{Measurement, Station};
use climate_api::schema::SCHEMA;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool};
use std::path::Path;

type Result<T> = std::result::Result<T, sqlx::Error>;

/// Earliest generated measurement, outside the trailing year
pub const STRAY_DATE: &str = "2015-08-22";

/// First day of the generated daily series
pub const SERIES_START: &str = "2016-08-23";

/// Last day of the generated daily series, the most recent date in the store
pub const SERIES_END: &str = "2017-08-23";

/// Stations in storage order
pub fn hawaii_stations() -> Vec<Station> {
    vec![
        Station {
            id: 1,
            station: "USC00519397".to_string(),
            name: "WAIKIKI 717.2, HI US".to_string(),
            latitude: Some(21.2716),
            longitude: Some(-157.8168),
            elevation: Some(3.0),
        },
        Station {
            id: 2,
            station: "USC00513117".to_string(),
            name: "KANEOHE 838.1, HI US".to_string(),
            latitude: Some(21.4234),
            longitude: Some(-157.8015),
            elevation: Some(14.6),
        },
    ]
}

/// Daily observations from [`SERIES_START`] to [`SERIES_END`], skipping
/// January 2017, preceded by one stray observation on [`STRAY_DATE`].
///
/// Every seventh day has no precipitation reading.
pub fn hawaii_measurements() -> Vec<Measurement> {
    let mut measurements = vec![Measurement {
        id: 1,
        station: "USC00519397".to_string(),
        date: STRAY_DATE.to_string(),
        prcp: Some(0.3),
        tobs: 55.0,
    }];

    let start = NaiveDate::parse_from_str(SERIES_START, "%Y-%m-%d").unwrap();
    let end = NaiveDate::parse_from_str(SERIES_END, "%Y-%m-%d").unwrap();

    let mut day = start;
    let mut index: i64 = 0;
    while day <= end {
        if !(day.year() == 2017 && day.month() == 1) {
            let station = if index % 2 == 0 {
                "USC00519397"
            } else {
                "USC00513117"
            };
            measurements.push(Measurement {
                id: index + 2,
                station: station.to_string(),
                date: day.format("%Y-%m-%d").to_string(),
                prcp: if index % 7 == 0 {
                    None
                } else {
                    Some((index % 5) as f64 * 0.1)
                },
                tobs: 60.0 + (index % 25) as f64,
            });
        }
        day = day.succ_opt().unwrap();
        index += 1;
    }

    measurements
}

/// Create a store at `path` holding the given rows
pub async fn create_store(
    path: &Path,
    measurements: &[Measurement],
    stations: &[Station],
) -> Result<()> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .journal_mode(SqliteJournalMode::Delete)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    sqlx::raw_sql(SCHEMA).execute(&pool).await?;

    let mut tx = pool.begin().await?;
    for m in measurements {
        sqlx::query(
            "INSERT INTO measurement (id, station, date, prcp, tobs) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(m.id)
        .bind(&m.station)
        .bind(&m.date)
        .bind(m.prcp)
        .bind(m.tobs)
        .execute(&mut *tx)
        .await?;
    }
    for s in stations {
        sqlx::query(
            "INSERT INTO station (id, station, name, latitude, longitude, elevation) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(s.id)
        .bind(&s.station)
        .bind(&s.name)
        .bind(s.latitude)
        .bind(s.longitude)
        .bind(s.elevation)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    pool.close().await;
    Ok(())
}

/// Create the standard Hawaii-like store used by most tests
pub async fn create_hawaii_store(path: &Path) -> Result<()> {
    create_store(path, &hawaii_measurements(), &hawaii_stations()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_series_skips_january() {
        let measurements = hawaii_measurements();
        assert_eq!(measurements[0].date, STRAY_DATE);
        assert_eq!(measurements.last().unwrap().date, SERIES_END);
        assert!(measurements.iter().all(|m| !m.date.starts_with("2017-01")));
        // 366 days in the series minus the 31 days of January
        assert_eq!(measurements.len(), 1 + 366 - 31);
    }
}
