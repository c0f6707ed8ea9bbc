// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Loads the pre-trained artifacts from their export directory.
//
// What lives in the directory:
//   1. model.json         — architecture spec (layer sizes)
//   2. model.mpk.gz       — weights, Burn CompactRecorder format
//   3. input_scaler.json  — min-max state for the 13 input columns
//   4. output_scaler.json — min-max state for the PM2.5 output
//
// Why save the spec separately from the weights?
//   When loading for inference we must rebuild the exact
//   architecture (hidden size, layer count) before the weights
//   can be restored into it. Without the spec, the weights are
//   just an opaque blob.
//
// Burn's CompactRecorder:
//   - Serialises model parameters to MessagePack format
//   - Compresses with gzip for smaller file size
//   - Type-safe: loading fails if the architecture doesn't match
//
// Every load validates shapes against the feature registry, so
// a mismatched export fails here — before any inference — with
// a message naming the file.
//
// Reference: Burn Book §5 (Records and Checkpointing)
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::data::scaler::MinMaxScaler;
use crate::domain::forecast::FORECAST_DAYS;
use crate::domain::reading::PAST_DAYS;
use crate::domain::record::NUM_FEATURES;
use crate::domain::traits::Persistable;
use crate::ml::model::Pm25ForecastModel;

/// The architecture the external training run exported,
/// read back so the model can be rebuilt identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSpec {
    pub num_features: usize,
    pub past_days:    usize,
    pub horizon:      usize,
    pub d_hidden:     usize,
    pub num_layers:   usize,
    pub dropout:      f64,
}

/// Read-only access to one directory of exported artifacts.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: PathBuf::from(dir.into()) }
    }

    /// Load and validate the architecture spec.
    pub fn load_model_spec(&self) -> Result<ModelSpec> {
        let path = self.dir.join("model.json");

        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read model spec '{}'. Is the artifact export complete?",
                path.display()
            )
        })?;

        let spec: ModelSpec = serde_json::from_str(&json)
            .with_context(|| format!("Malformed model spec in '{}'", path.display()))?;

        // The exported shapes must match what this build assembles
        if spec.num_features != NUM_FEATURES {
            bail!(
                "Model spec expects {} features but the dataset registry has {}",
                spec.num_features,
                NUM_FEATURES
            );
        }
        if spec.past_days != PAST_DAYS || spec.horizon != FORECAST_DAYS {
            bail!(
                "Model spec window is {}→{} days, this application assembles {}→{}",
                spec.past_days,
                spec.horizon,
                PAST_DAYS,
                FORECAST_DAYS
            );
        }

        Ok(spec)
    }

    /// Load the pre-trained weights into a freshly built model.
    ///
    /// The model must have been built from the same spec or the
    /// recorder rejects the record.
    pub fn load_weights<B: Backend>(
        &self,
        model:  Pm25ForecastModel<B>,
        device: &B::Device,
    ) -> Result<Pm25ForecastModel<B>> {
        // CompactRecorder appends the .mpk.gz extension itself
        let path = self.dir.join("model");

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!(
                    "Cannot load model weights '{}'. Was the pre-trained model exported?",
                    path.display()
                )
            })?;

        Ok(model.load_record(record))
    }

    /// Load the 13-column input scaler.
    pub fn load_input_scaler(&self) -> Result<MinMaxScaler> {
        let scaler = self.load_scaler("input_scaler.json")?;
        if scaler.num_features() != NUM_FEATURES {
            bail!(
                "Input scaler was fitted on {} columns, dataset registry has {}",
                scaler.num_features(),
                NUM_FEATURES
            );
        }
        Ok(scaler)
    }

    /// Load the single-column output scaler (raw PM2.5 units).
    pub fn load_output_scaler(&self) -> Result<MinMaxScaler> {
        let scaler = self.load_scaler("output_scaler.json")?;
        if scaler.num_features() != 1 {
            bail!(
                "Output scaler must be single-column, found {}",
                scaler.num_features()
            );
        }
        Ok(scaler)
    }

    fn load_scaler(&self, file: &str) -> Result<MinMaxScaler> {
        let path = self.dir.join(file);
        let path = path
            .to_str()
            .with_context(|| format!("Artifact path '{}' is not valid UTF-8", path.display()))?;
        MinMaxScaler::load(path)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_spec_json_round_trip() {
        let spec = ModelSpec {
            num_features: NUM_FEATURES,
            past_days:    PAST_DAYS,
            horizon:      FORECAST_DAYS,
            d_hidden:     64,
            num_layers:   2,
            dropout:      0.2,
        };
        let json = serde_json::to_string(&spec).unwrap();
        let back: ModelSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back.d_hidden, 64);
        assert_eq!(back.num_layers, 2);
    }

    #[test]
    fn test_missing_spec_names_the_file() {
        let store = ArtifactStore::new("does/not/exist");
        let err = store.load_model_spec().unwrap_err();
        assert!(format!("{err:#}").contains("model.json"));
    }
}
