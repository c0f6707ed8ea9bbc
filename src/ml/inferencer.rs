// ============================================================
// Layer 5 — Inferencer
// ============================================================
use anyhow::{bail, Result};
use burn::prelude::*;

use crate::domain::reading::PAST_DAYS;
use crate::domain::record::NUM_FEATURES;
use crate::infra::artifacts::ArtifactStore;
use crate::ml::model::{Pm25ForecastConfig, Pm25ForecastModel};

type InferBackend = burn::backend::Wgpu;

pub struct Inferencer {
    model:   Pm25ForecastModel<InferBackend>,
    horizon: usize,
    device:  burn::backend::wgpu::WgpuDevice,
}

impl Inferencer {
    pub fn from_artifacts(store: &ArtifactStore) -> Result<Self> {
        let device = burn::backend::wgpu::WgpuDevice::default();
        let spec   = store.load_model_spec()?;

        // Dropout zeroed: the forecast must be identical on
        // repeated calls with the same inputs.
        let model_cfg = Pm25ForecastConfig::new(
            spec.num_features, spec.d_hidden, spec.num_layers,
            spec.horizon, 0.0,
        );
        let model: Pm25ForecastModel<InferBackend> = model_cfg.init(&device);
        let model = store.load_weights(model, &device)?;
        tracing::info!("Forecast model loaded ({} LSTM layers)", spec.num_layers);
        Ok(Self { model, horizon: spec.horizon, device })
    }

    /// Run one forward pass over an already-scaled window.
    ///
    /// `scaled` is the 7×13 window row-major in model space;
    /// the return value is `horizon` outputs still in model
    /// space (the caller inverse-scales them).
    pub fn predict(&self, scaled: &[f64]) -> Result<Vec<f64>> {
        if scaled.len() != PAST_DAYS * NUM_FEATURES {
            bail!(
                "Scaled window has {} values, expected {} ({}×{})",
                scaled.len(),
                PAST_DAYS * NUM_FEATURES,
                PAST_DAYS,
                NUM_FEATURES
            );
        }

        // One sample: [1 sequence, 7 timesteps, 13 features]
        let flat: Vec<f32> = scaled.iter().map(|&x| x as f32).collect();
        let input = Tensor::<InferBackend, 1>::from_floats(
            flat.as_slice(), &self.device,
        ).reshape([1, PAST_DAYS, NUM_FEATURES]);

        let output = self.model.forward(input); // [1, horizon]

        let values: Vec<f32> = output
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow::anyhow!("Cannot read model output: {e:?}"))?;

        if values.len() != self.horizon {
            bail!(
                "Model produced {} outputs, expected {}",
                values.len(),
                self.horizon
            );
        }

        tracing::debug!("Model output (scaled): {:?}", values);
        Ok(values.into_iter().map(f64::from).collect())
    }
}
