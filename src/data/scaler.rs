// ============================================================
// Layer 4 — Min-Max Scaler
// ============================================================
// The pre-fitted normalization transform applied before
// inference and inverted after.
//
// The parameters (per-column data_min / data_max and the
// target feature range) were fitted when the model was trained
// and are loaded from JSON; this type never re-fits them.
// Two instances exist at runtime:
//   - input scaler:  13 columns, raw window → model space
//   - output scaler:  1 column, model output → raw PM2.5 units
//
// Transform (per column c):
//   scaled = (x - data_min[c]) * scale[c] + range_min
// where scale[c] = (range_max - range_min) / (data_max[c] - data_min[c]),
// and a zero-width column scales by (range_max - range_min) so
// the inverse is still exact.
//
// Reference: Rust Book §9 (Error Handling)
//            serde crate documentation

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::domain::traits::Persistable;

/// A pre-fitted per-column min-max transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    /// Target range the fitted data was mapped into, typically (0, 1)
    feature_range: (f64, f64),
    /// Per-column minimum seen during fitting
    data_min: Vec<f64>,
    /// Per-column maximum seen during fitting
    data_max: Vec<f64>,
}

impl MinMaxScaler {
    /// Build a scaler from previously fitted state.
    pub fn from_fitted(
        feature_range: (f64, f64),
        data_min: Vec<f64>,
        data_max: Vec<f64>,
    ) -> Result<Self> {
        if feature_range.1 <= feature_range.0 {
            bail!(
                "Scaler feature range ({}, {}) is empty",
                feature_range.0,
                feature_range.1
            );
        }
        if data_min.len() != data_max.len() || data_min.is_empty() {
            bail!(
                "Scaler column state is inconsistent: {} minima vs {} maxima",
                data_min.len(),
                data_max.len()
            );
        }
        Ok(Self { feature_range, data_min, data_max })
    }

    /// Number of columns this scaler was fitted on.
    pub fn num_features(&self) -> usize {
        self.data_min.len()
    }

    /// Per-column multiplier; zero-width columns scale by the
    /// bare range width so inverse_transform stays exact.
    fn scale(&self, col: usize) -> f64 {
        let width = self.data_max[col] - self.data_min[col];
        let span = self.feature_range.1 - self.feature_range.0;
        if width == 0.0 { span } else { span / width }
    }

    /// Map row-major raw values into model space.
    /// `values.len()` must be a whole number of rows.
    pub fn transform(&self, values: &[f64]) -> Result<Vec<f64>> {
        self.check_width(values.len())?;
        Ok(values
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let c = i % self.num_features();
                (x - self.data_min[c]) * self.scale(c) + self.feature_range.0
            })
            .collect())
    }

    /// Map row-major model-space values back to raw units.
    pub fn inverse_transform(&self, values: &[f64]) -> Result<Vec<f64>> {
        self.check_width(values.len())?;
        Ok(values
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let c = i % self.num_features();
                (x - self.feature_range.0) / self.scale(c) + self.data_min[c]
            })
            .collect())
    }

    fn check_width(&self, len: usize) -> Result<()> {
        if len == 0 || len % self.num_features() != 0 {
            bail!(
                "Scaler fitted on {} columns cannot process {} values",
                self.num_features(),
                len
            );
        }
        Ok(())
    }
}

/// Scaler state round-trips through JSON on disk.
impl Persistable for MinMaxScaler {
    fn save(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write scaler state to '{path}'"))?;
        Ok(())
    }

    fn load(path: &str) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read scaler state from '{path}'"))?;
        let scaler: MinMaxScaler = serde_json::from_str(&json)
            .with_context(|| format!("Malformed scaler state in '{path}'"))?;
        // Re-run the construction checks on loaded state
        Self::from_fitted(scaler.feature_range, scaler.data_min, scaler.data_max)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn scaler() -> MinMaxScaler {
        MinMaxScaler::from_fitted(
            (0.0, 1.0),
            vec![0.0, 10.0, -5.0],
            vec![100.0, 10.0, 5.0], // middle column has zero width
        )
        .unwrap()
    }

    #[test]
    fn test_maps_min_and_max_to_range_ends() {
        let s = scaler();
        let out = s.transform(&[0.0, 10.0, 5.0]).unwrap();
        assert!((out[0] - 0.0).abs() < 1e-12);
        assert!((out[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_recovers_input() {
        let s = scaler();
        let raw = [42.0, 10.0, -1.5, 87.3, 10.0, 4.0]; // two rows
        let back = s.inverse_transform(&s.transform(&raw).unwrap()).unwrap();
        for (a, b) in raw.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1e-9, "{a} round-tripped to {b}");
        }
    }

    #[test]
    fn test_round_trip_on_zero_width_column() {
        let s = scaler();
        // Column 1 was fitted on a constant — values off the constant
        // must still invert exactly
        let raw = [50.0, 12.5, 0.0];
        let back = s.inverse_transform(&s.transform(&raw).unwrap()).unwrap();
        assert!((back[1] - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_width_mismatch_is_an_error() {
        let s = scaler();
        assert!(s.transform(&[1.0, 2.0]).is_err());
        assert!(s.transform(&[]).is_err());
        assert!(s.inverse_transform(&[1.0, 2.0, 3.0, 4.0]).is_err());
    }

    #[test]
    fn test_empty_feature_range_rejected() {
        let r = MinMaxScaler::from_fitted((1.0, 1.0), vec![0.0], vec![1.0]);
        assert!(r.is_err());
    }

    #[test]
    fn test_single_column_output_scaler_shape() {
        let s = MinMaxScaler::from_fitted((0.0, 1.0), vec![0.0], vec![500.0]).unwrap();
        let out = s.inverse_transform(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(out.len(), 3);
        assert!((out[0] - 50.0).abs() < 1e-9);
    }
}
