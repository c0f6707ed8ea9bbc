// ============================================================
// Layer 2 — Forecast Use Case
// ============================================================
// Runs the full pipeline for one prediction request:
//
//   Step 1: Load the historical dataset   (Layer 4 - data)
//   Step 2: Assemble the 7×13 window      (Layer 4 - data)
//   Step 3: Scale into model space        (Layer 4 - data)
//   Step 4: Run the sequence model        (Layer 5 - ml)
//   Step 5: Inverse-scale the outputs     (Layer 4 - data)
//   Step 6: Round, date, and categorize   (Layer 3 - domain)
//
// The artifacts (model + scalers) are loaded once when the use
// case is constructed and reused read-only for every request;
// inference itself is a pure function call.
//
// Reference: Rust Book §7 (Module System)

use anyhow::Result;
use chrono::NaiveDate;

use crate::data::{loader::CsvHistoryLoader, scaler::MinMaxScaler, window::ContextWindow};
use crate::domain::forecast::ForecastReport;
use crate::domain::reading::ReadingWindow;
use crate::domain::traits::{HistorySource, Pm25Forecaster};
use crate::infra::artifacts::ArtifactStore;
use crate::ml::inferencer::Inferencer;

pub struct ForecastUseCase {
    data_path:     String,
    input_scaler:  MinMaxScaler,
    output_scaler: MinMaxScaler,
    inferencer:    Inferencer,
}

impl ForecastUseCase {
    /// Load the pre-trained artifacts and keep them for the
    /// lifetime of the use case.
    pub fn new(artifacts_dir: String, data_path: String) -> Result<Self> {
        let store         = ArtifactStore::new(artifacts_dir);
        let input_scaler  = store.load_input_scaler()?;
        let output_scaler = store.load_output_scaler()?;
        let inferencer    = Inferencer::from_artifacts(&store)?;
        Ok(Self { data_path, input_scaler, output_scaler, inferencer })
    }

    /// Forecast the seven days starting today (local date).
    pub fn forecast_today(&self, readings: &ReadingWindow) -> Result<ForecastReport> {
        self.forecast_from(readings, chrono::Local::now().date_naive())
    }

    /// Forecast with an explicit start date. The date only
    /// labels the output — the model input is unaffected — so
    /// tests can pin it.
    pub fn forecast_from(
        &self,
        readings: &ReadingWindow,
        start:    NaiveDate,
    ) -> Result<ForecastReport> {
        // ── Step 1: Load the historical dataset ───────────────────────────────
        let loader  = CsvHistoryLoader::new(&self.data_path);
        let history = loader.load_all()?;

        // ── Step 2: Assemble the context window ───────────────────────────────
        // The 7 most recent consecutive days, PM2.5 column
        // replaced by the user's readings
        let window = ContextWindow::assemble(&history, readings)?;

        // ── Step 3: Scale into model space ────────────────────────────────────
        let scaled = self.input_scaler.transform(&window.flat())?;

        // ── Step 4: Run the sequence model ────────────────────────────────────
        let outputs = self.inferencer.predict(&scaled)?;

        // ── Step 5: Back to raw PM2.5 units ───────────────────────────────────
        let raw = self.output_scaler.inverse_transform(&outputs)?;

        // ── Step 6: Round, date, and categorize ───────────────────────────────
        let report = ForecastReport::from_values(start, &raw);
        tracing::info!(
            "Forecast ready: {} days from {}",
            report.len(),
            start
        );
        Ok(report)
    }
}

/// The trait the CLI layer programs against.
impl Pm25Forecaster for ForecastUseCase {
    fn forecast(&self, readings: &ReadingWindow) -> Result<ForecastReport> {
        self.forecast_today(readings)
    }
}
