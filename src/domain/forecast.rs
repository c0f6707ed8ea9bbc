// ============================================================
// Layer 3 — Forecast Domain Types
// ============================================================
// The output side of the system: seven predicted PM2.5 values,
// each paired with the calendar day it applies to and its
// severity category.
//
// Date pairing is a pure function here (start date + offset)
// so the application layer can inject "today" at the boundary
// and tests can pass a fixed date instead.
//
// Reference: Rust Book §5 (Structs)
//            chrono crate documentation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::category::AirQualityCategory;

/// How many days ahead the model predicts.
pub const FORECAST_DAYS: usize = 7;

/// One predicted day: date, rounded PM2.5 index, severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub value: i64,
    pub category: AirQualityCategory,
}

/// The full seven-day forecast, in date order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReport {
    days: Vec<DailyForecast>,
}

impl ForecastReport {
    /// Pair raw denormalized model outputs with consecutive
    /// calendar dates starting at `start`, rounding each value
    /// to the nearest integer and classifying it.
    ///
    /// The first output is the forecast for `start` itself
    /// (offset 0), the last for six days later.
    pub fn from_values(start: NaiveDate, values: &[f64]) -> Self {
        let days = values
            .iter()
            .enumerate()
            .map(|(offset, &raw)| {
                let value = raw.round() as i64;
                DailyForecast {
                    date: start + chrono::Duration::days(offset as i64),
                    value,
                    category: AirQualityCategory::from_value(value),
                }
            })
            .collect();
        Self { days }
    }

    pub fn days(&self) -> &[DailyForecast] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::AirQualityCategory;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dates_are_consecutive_from_start() {
        let start = day(2026, 8, 6);
        let report = ForecastReport::from_values(
            start,
            &[40.0, 55.0, 60.0, 70.0, 80.0, 90.0, 101.0],
        );

        assert_eq!(report.len(), 7);
        for (i, df) in report.days().iter().enumerate() {
            assert_eq!(df.date, start + chrono::Duration::days(i as i64));
        }
        // All dates distinct
        for pair in report.days().windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_month_rollover() {
        let report = ForecastReport::from_values(
            day(2026, 1, 28),
            &[1.0; 7],
        );
        assert_eq!(report.days()[6].date, day(2026, 2, 3));
    }

    #[test]
    fn test_values_round_to_nearest_integer() {
        let report = ForecastReport::from_values(
            day(2026, 8, 6),
            &[49.4, 50.5, 100.49, 199.5, 299.9, 500.4, 500.5],
        );
        let values: Vec<i64> = report.days().iter().map(|d| d.value).collect();
        assert_eq!(values, vec![49, 51, 100, 200, 300, 500, 501]);
    }

    #[test]
    fn test_categories_follow_rounded_value() {
        let report = ForecastReport::from_values(day(2026, 8, 6), &[50.4]);
        assert_eq!(report.days()[0].category, AirQualityCategory::Good);

        let report = ForecastReport::from_values(day(2026, 8, 6), &[50.6]);
        assert_eq!(report.days()[0].category, AirQualityCategory::Moderate);
    }
}
