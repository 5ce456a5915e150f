//! JSON records returned by the data endpoints.
//!
//! Field names are part of the public API, including the embedded spaces in
//! the temperature summary keys.

use serde::Serialize;

use crate::models::{PrecipitationRow, TemperatureRow, TemperatureStats};

/// `{"Date": ..., "Precipitation": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipitationRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Precipitation")]
    pub precipitation: Option<f64>,
}

/// `{"Date": ..., "Temperature": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
}

/// Aggregate record; `null` fields when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureStatsRecord {
    #[serde(rename = "Temperature Min")]
    pub min: Option<f64>,
    #[serde(rename = "Temperature Avg")]
    pub avg: Option<f64>,
    #[serde(rename = "Temperature Max")]
    pub max: Option<f64>,
}

impl From<PrecipitationRow> for PrecipitationRecord {
    fn from(row: PrecipitationRow) -> Self {
        Self {
            date: row.date,
            precipitation: row.prcp,
        }
    }
}

impl From<TemperatureRow> for TemperatureRecord {
    fn from(row: TemperatureRow) -> Self {
        Self {
            date: row.date,
            temperature: row.tobs,
        }
    }
}

impl From<TemperatureStats> for TemperatureStatsRecord {
    fn from(stats: TemperatureStats) -> Self {
        Self {
            min: stats.tmin,
            avg: stats.tavg,
            max: stats.tmax,
        }
    }
}

/// Convert rows into records, preserving order
pub fn records<R, T>(rows: Vec<R>) -> Vec<T>
where
    T: From<R>,
{
    rows.into_iter().map(T::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_precipitation_record_keys() {
        let records: Vec<PrecipitationRecord> = records(vec![
            PrecipitationRow {
                date: "2010-01-01".to_string(),
                prcp: Some(0.08),
            },
            PrecipitationRow {
                date: "2010-01-02".to_string(),
                prcp: None,
            },
        ]);

        assert_eq!(
            serde_json::to_value(&records).unwrap(),
            json!([
                {"Date": "2010-01-01", "Precipitation": 0.08},
                {"Date": "2010-01-02", "Precipitation": null}
            ])
        );
    }

    #[test]
    fn test_temperature_record_keys() {
        let record = TemperatureRecord::from(TemperatureRow {
            date: "2016-08-23".to_string(),
            tobs: 81.0,
        });
        assert_eq!(
            serde_json::to_value(record).unwrap(),
            json!({"Date": "2016-08-23", "Temperature": 81.0})
        );
    }

    #[test]
    fn test_empty_stats_serialize_as_nulls() {
        let record = TemperatureStatsRecord::from(TemperatureStats::default());
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"Temperature Min":null,"Temperature Avg":null,"Temperature Max":null}"#
        );
    }
}
