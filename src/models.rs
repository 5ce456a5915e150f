//! Record types of the climate store and the row shapes the queries return.

use sqlx::FromRow;

/// One weather observation.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Measurement {
    pub id: i64,
    /// Identifier of the reporting station
    pub station: String,
    /// Observation date, `YYYY-MM-DD`
    pub date: String,
    /// Precipitation in inches, missing for some observations
    pub prcp: Option<f64>,
    /// Temperature observation in degrees
    pub tobs: f64,
}

/// A weather reporting site.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Station {
    pub id: i64,
    /// Unique station identifier, e.g. `USC00519397`
    pub station: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// `(date, prcp)` projection of a measurement
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// `(date, tobs)` projection of a measurement
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TemperatureRow {
    pub date: String,
    pub tobs: f64,
}

/// Aggregate temperature row. All fields are `None` when no measurement
/// matched the filter.
#[derive(Debug, Clone, Copy, PartialEq, Default, FromRow)]
pub struct TemperatureStats {
    pub tmin: Option<f64>,
    pub tavg: Option<f64>,
    pub tmax: Option<f64>,
}

impl TemperatureStats {
    /// True when the filter matched no measurement
    pub fn is_empty(&self) -> bool {
        self.tmin.is_none() && self.tavg.is_none() && self.tmax.is_none()
    }
}
