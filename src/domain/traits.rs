// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - CsvHistoryLoader implements HistorySource
//   - A future ApiHistoryLoader could also implement it
//   - The application layer only sees HistorySource
//     and works with both without any changes
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::forecast::ForecastReport;
use crate::domain::reading::ReadingWindow;
use crate::domain::record::DailyRecord;

// ─── HistorySource ────────────────────────────────────────────────────────────
/// Any component that can supply the historical daily dataset.
///
/// Implementations:
///   - CsvHistoryLoader → reads the static CSV export
///   - (future) ApiHistoryLoader → pulls from a monitoring API
pub trait HistorySource {
    /// Load every available daily record, sorted by date ascending.
    fn load_all(&self) -> Result<Vec<DailyRecord>>;
}

// ─── Pm25Forecaster ───────────────────────────────────────────────────────────
/// Any component that can turn seven past readings into a
/// seven-day forecast.
///
/// Implementations:
///   - ForecastUseCase → scalers + pre-trained sequence model
pub trait Pm25Forecaster {
    /// Produce the seven-day forecast for the given readings.
    fn forecast(&self, readings: &ReadingWindow) -> Result<ForecastReport>;
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved and restored from disk.
///
/// Implementations:
///   - MinMaxScaler → pre-fitted normalization parameters
pub trait Persistable: Sized {
    /// Save this component's state to the given path
    fn save(&self, path: &str) -> Result<()>;

    /// Load a component's state from the given path.
    /// Returns Self so callers can use the loaded instance directly.
    fn load(path: &str) -> Result<Self>;
}
