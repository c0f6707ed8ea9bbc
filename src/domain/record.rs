// ============================================================
// Layer 3 — DailyRecord Domain Type
// ============================================================
// Represents one dated row of the historical dataset:
// the PM2.5 index plus the auxiliary pollutant and weather
// measurements recorded for the same day.
//
// The column registry lives here too. Every layer that needs
// the feature width (CSV parsing, window assembly, scalers,
// the model input dimension) reads it from this one constant,
// so the 13-column shape has a single source of truth.
//
// Reference: Rust Book §5 (Structs and Methods)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Names of the numeric feature columns, in model input order.
///
/// The first six are the ISPU pollutant measurements; the rest
/// are the daily weather observations merged into the dataset.
pub const FEATURE_COLUMNS: [&str; 13] = [
    "pm25",      // fine particulate matter — the prediction target
    "pm10",      // coarse particulate matter
    "so2",       // sulphur dioxide
    "co",        // carbon monoxide
    "o3",        // ozone
    "no2",       // nitrogen dioxide
    "tmin",      // minimum temperature (°C)
    "tmax",      // maximum temperature (°C)
    "tavg",      // average temperature (°C)
    "humidity",  // average relative humidity (%)
    "rainfall",  // daily rainfall (mm)
    "sunshine",  // sunshine duration (hours)
    "wind",      // average wind speed (m/s)
];

/// Number of feature columns per daily row.
pub const NUM_FEATURES: usize = FEATURE_COLUMNS.len();

/// Index of the PM2.5 column within [`FEATURE_COLUMNS`].
/// This is the column the user readings overwrite.
pub const PM25_COLUMN: usize = 0;

/// Name of the date column in the historical CSV.
pub const DATE_COLUMN: &str = "date";

/// One day of historical measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar day the measurements were taken on
    pub date: NaiveDate,

    /// The 13 numeric features in [`FEATURE_COLUMNS`] order
    pub features: [f64; NUM_FEATURES],
}

impl DailyRecord {
    pub fn new(date: NaiveDate, features: [f64; NUM_FEATURES]) -> Self {
        Self { date, features }
    }

    /// The historical PM2.5 value of this row.
    pub fn pm25(&self) -> f64 {
        self.features[PM25_COLUMN]
    }
}
