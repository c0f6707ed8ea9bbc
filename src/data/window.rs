// ============================================================
// Layer 4 — Context Window Assembly
// ============================================================
// Builds the 7×13 numeric table the sequence model consumes.
//
// The window is the 7 most recent rows of the historical
// dataset — anchored at the latest date present in the file,
// so a dataset that lags real time still yields a window —
// with the PM2.5 column replaced by the user's readings:
//
//   row 0 (oldest)  →  reading no. 1 (7 days ago)
//   ...
//   row 6 (newest)  →  reading no. 7 (yesterday)
//
// The other 12 columns keep their historical values: the model
// was trained on the joint pollutant + weather signal, and the
// user only re-measures PM2.5.
//
// Invariants:
//   - exactly PAST_DAYS rows × NUM_FEATURES columns
//   - window dates are consecutive calendar days
//
// Reference: Rust Book §4 (Slices), §8 (Collections)

use anyhow::{bail, Result};
use chrono::NaiveDate;

use crate::domain::reading::{ReadingWindow, PAST_DAYS};
use crate::domain::record::{DailyRecord, NUM_FEATURES, PM25_COLUMN};

/// The assembled model input: 7 consecutive dated rows of 13
/// features each, with the PM2.5 column already overwritten.
#[derive(Debug, Clone)]
pub struct ContextWindow {
    dates: [NaiveDate; PAST_DAYS],
    rows: [[f64; NUM_FEATURES]; PAST_DAYS],
}

impl ContextWindow {
    /// Assemble the window from date-sorted history and the
    /// user's readings.
    ///
    /// Fails if fewer than [`PAST_DAYS`] rows exist or if the
    /// trailing rows are not consecutive calendar days (a gap
    /// would silently misalign readings and history).
    pub fn assemble(history: &[DailyRecord], readings: &ReadingWindow) -> Result<Self> {
        if history.len() < PAST_DAYS {
            bail!(
                "History has {} rows but the model needs the last {} days",
                history.len(),
                PAST_DAYS
            );
        }

        let tail = &history[history.len() - PAST_DAYS..];

        for pair in tail.windows(2) {
            if pair[0].date + chrono::Duration::days(1) != pair[1].date {
                bail!(
                    "History is not daily-continuous: {} is followed by {}",
                    pair[0].date,
                    pair[1].date
                );
            }
        }

        let mut dates = [NaiveDate::MIN; PAST_DAYS];
        let mut rows = [[0.0f64; NUM_FEATURES]; PAST_DAYS];
        let user_pm25 = readings.as_f64();

        for (i, record) in tail.iter().enumerate() {
            dates[i] = record.date;
            rows[i] = record.features;
            rows[i][PM25_COLUMN] = user_pm25[i];
        }

        tracing::debug!(
            "Context window assembled for {} .. {}",
            dates[0],
            dates[PAST_DAYS - 1]
        );

        Ok(Self { dates, rows })
    }

    pub fn dates(&self) -> &[NaiveDate; PAST_DAYS] {
        &self.dates
    }

    pub fn rows(&self) -> &[[f64; NUM_FEATURES]; PAST_DAYS] {
        &self.rows
    }

    /// The window flattened row-major, the layout both the
    /// scaler and the tensor constructor expect.
    pub fn flat(&self) -> Vec<f64> {
        self.rows.iter().flatten().copied().collect()
    }

    /// The PM2.5 column, oldest first.
    pub fn pm25_column(&self) -> [f64; PAST_DAYS] {
        let mut out = [0.0; PAST_DAYS];
        for (slot, row) in out.iter_mut().zip(self.rows.iter()) {
            *slot = row[PM25_COLUMN];
        }
        out
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    /// Ten consecutive days where every feature encodes its
    /// (day, column) position, so overwrites are easy to spot.
    fn history() -> Vec<DailyRecord> {
        (1..=10)
            .map(|d| {
                let mut features = [0.0; NUM_FEATURES];
                for (c, slot) in features.iter_mut().enumerate() {
                    *slot = (d * 100 + c) as f64;
                }
                DailyRecord::new(day(d as u32), features)
            })
            .collect()
    }

    fn readings() -> ReadingWindow {
        ReadingWindow::new(&[11, 22, 33, 44, 55, 66, 77]).unwrap()
    }

    #[test]
    fn test_window_shape_and_pm25_overwrite() {
        let window = ContextWindow::assemble(&history(), &readings()).unwrap();

        assert_eq!(window.rows().len(), PAST_DAYS);
        assert_eq!(window.rows()[0].len(), NUM_FEATURES);
        assert_eq!(window.flat().len(), PAST_DAYS * NUM_FEATURES);

        // PM2.5 column equals the readings, in order
        assert_eq!(
            window.pm25_column(),
            [11.0, 22.0, 33.0, 44.0, 55.0, 66.0, 77.0]
        );
    }

    #[test]
    fn test_other_columns_keep_historical_values() {
        let window = ContextWindow::assemble(&history(), &readings()).unwrap();
        // Window covers days 4..=10; row 0 is day 4, column 1 encodes 401
        assert_eq!(window.rows()[0][1], 401.0);
        assert_eq!(window.rows()[6][NUM_FEATURES - 1], (1000 + NUM_FEATURES - 1) as f64);
    }

    #[test]
    fn test_window_uses_most_recent_days() {
        let window = ContextWindow::assemble(&history(), &readings()).unwrap();
        assert_eq!(window.dates()[0], day(4));
        assert_eq!(window.dates()[6], day(10));
    }

    #[test]
    fn test_too_few_rows_fails() {
        let h = history();
        assert!(ContextWindow::assemble(&h[..5], &readings()).is_err());
    }

    #[test]
    fn test_gap_in_recent_days_fails() {
        let mut h = history();
        h.remove(8); // drop day 9 — the tail is no longer continuous
        let err = ContextWindow::assemble(&h, &readings()).unwrap_err();
        assert!(err.to_string().contains("continuous"));
    }

    #[test]
    fn test_gap_outside_window_is_fine() {
        let mut h = history();
        h.remove(0); // day 1 is older than the window cares about
        assert!(ContextWindow::assemble(&h, &readings()).is_ok());
    }
}
