// ============================================================
// Layer 4 — History Loader
// ============================================================
// Loads the historical daily dataset from a CSV file.
//
// Expected file shape: a header row naming the date column and
// the 13 feature columns (any order, case-insensitive), then
// one row per day:
//
//   date,pm25,pm10,so2,co,o3,no2,tmin,tmax,tavg,humidity,rainfall,sunshine,wind
//   2024-01-01,58,71,24,9,31,12,24.2,31.0,27.1,82,4.5,5.2,1.8
//   ...
//
// Parsing is strict: a missing column, an unparseable number,
// or an unparseable date is a hard error carrying the row
// number, because a silently dropped day would shift the
// model's input window by one day without anyone noticing.
//
// Reference: Rust Book §8 (Collections)
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::fs;

use crate::domain::record::{DailyRecord, DATE_COLUMN, FEATURE_COLUMNS, NUM_FEATURES};
use crate::domain::traits::HistorySource;

/// Date format used by the dataset export.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Loads daily records from a CSV file on disk.
/// Implements the HistorySource trait from Layer 3.
pub struct CsvHistoryLoader {
    /// Path to the CSV file
    path: String,
}

impl CsvHistoryLoader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl HistorySource for CsvHistoryLoader {
    fn load_all(&self) -> Result<Vec<DailyRecord>> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read history CSV '{}'", self.path))?;

        let mut records = parse_history_csv(&contents)
            .with_context(|| format!("Malformed history CSV '{}'", self.path))?;

        // Sort by date so the newest rows are always at the tail,
        // regardless of how the export was ordered.
        records.sort_by_key(|r| r.date);

        tracing::info!("Loaded {} daily records from '{}'", records.len(), self.path);
        Ok(records)
    }
}

/// Parse CSV text into daily records.
///
/// Separated from file I/O so the parsing rules are testable
/// on plain strings.
pub fn parse_history_csv(contents: &str) -> Result<Vec<DailyRecord>> {
    let mut lines = contents.lines().enumerate();

    let (_, header) = lines
        .next()
        .context("CSV is empty — expected a header row")?;

    // Map header names (trimmed, lowercased) to their position
    let names: Vec<String> = header
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();

    let column_index = |name: &str| -> Result<usize> {
        names
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV header is missing the '{name}' column"))
    };

    let date_idx = column_index(DATE_COLUMN)?;
    let mut feature_idx = [0usize; NUM_FEATURES];
    for (slot, name) in feature_idx.iter_mut().zip(FEATURE_COLUMNS.iter()) {
        *slot = column_index(name)?;
    }

    let mut records = Vec::new();

    for (line_no, line) in lines {
        // Allow trailing blank lines in hand-edited exports
        if line.trim().is_empty() {
            continue;
        }

        let row = line_no + 1; // 1-based, matching what editors display
        let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();

        if fields.len() != names.len() {
            bail!(
                "Row {}: expected {} fields, found {}",
                row,
                names.len(),
                fields.len()
            );
        }

        let date = NaiveDate::parse_from_str(fields[date_idx], DATE_FORMAT)
            .with_context(|| {
                format!("Row {}: invalid date '{}'", row, fields[date_idx])
            })?;

        let mut features = [0.0f64; NUM_FEATURES];
        for (col, (slot, &idx)) in features
            .iter_mut()
            .zip(feature_idx.iter())
            .enumerate()
        {
            *slot = fields[idx].parse::<f64>().with_context(|| {
                format!(
                    "Row {}: column '{}' has non-numeric value '{}'",
                    row, FEATURE_COLUMNS[col], fields[idx]
                )
            })?;
        }

        records.push(DailyRecord::new(date, features));
    }

    Ok(records)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "date,pm25,pm10,so2,co,o3,no2,tmin,tmax,tavg,humidity,rainfall,sunshine,wind";

    fn row(date: &str, pm25: f64) -> String {
        format!("{date},{pm25},70,20,8,30,10,24,31,27,80,0,6,2")
    }

    #[test]
    fn test_parses_rows_in_order() {
        let csv = format!(
            "{HEADER}\n{}\n{}\n",
            row("2024-01-01", 55.0),
            row("2024-01-02", 60.0)
        );
        let records = parse_history_csv(&csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].pm25(), 55.0);
        assert_eq!(
            records[1].date,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_header_order_does_not_matter() {
        // pm25 is last here; the loader must follow the header, not position
        let csv = "pm10,so2,co,o3,no2,tmin,tmax,tavg,humidity,rainfall,sunshine,wind,date,pm25\n\
                   70,20,8,30,10,24,31,27,80,0,6,2,2024-01-01,42\n";
        let records = parse_history_csv(csv).unwrap();
        assert_eq!(records[0].pm25(), 42.0);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let csv = "date,pm25,pm10\n2024-01-01,55,70\n";
        let err = parse_history_csv(csv).unwrap_err();
        assert!(err.to_string().contains("so2"));
    }

    #[test]
    fn test_bad_number_reports_row_and_column() {
        let csv = format!("{HEADER}\n{}\n", row("2024-01-01", 55.0))
            .replace("55", "n/a");
        let err = parse_history_csv(&csv).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Row 2"), "got: {msg}");
        assert!(msg.contains("pm25"), "got: {msg}");
    }

    #[test]
    fn test_bad_date_is_an_error() {
        let csv = format!("{HEADER}\n{}\n", row("01/02/2024", 55.0));
        assert!(parse_history_csv(&csv).is_err());
    }

    #[test]
    fn test_short_row_is_an_error() {
        let csv = format!("{HEADER}\n2024-01-01,55\n");
        assert!(parse_history_csv(&csv).is_err());
    }

    #[test]
    fn test_trailing_blank_lines_are_ignored() {
        let csv = format!("{HEADER}\n{}\n\n\n", row("2024-01-01", 55.0));
        assert_eq!(parse_history_csv(&csv).unwrap().len(), 1);
    }
}
