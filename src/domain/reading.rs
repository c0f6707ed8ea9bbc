// ============================================================
// Layer 3 — ReadingWindow Domain Type
// ============================================================
// The seven PM2.5 readings the user supplies, one per past
// day, ordered oldest to newest (input no. 1 = 7 days ago,
// input no. 7 = yesterday).
//
// Validation happens once, at construction. Every layer after
// this one can rely on the count being exactly seven, so the
// 7-row window invariant never has to be re-checked downstream.
//
// Readings are non-negative integers in raw PM2.5 index units —
// the same representation the original input form collects.
//
// Reference: Rust Book §5 (Structs), §9 (Recoverable Errors)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// How many past days of readings the model consumes.
pub const PAST_DAYS: usize = 7;

/// Seven validated daily PM2.5 readings, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingWindow {
    values: [u32; PAST_DAYS],
}

impl ReadingWindow {
    /// Build a ReadingWindow from user input.
    /// Fails unless exactly [`PAST_DAYS`] values are supplied.
    pub fn new(values: &[u32]) -> Result<Self> {
        if values.len() != PAST_DAYS {
            bail!(
                "Expected {} PM2.5 readings (oldest first), got {}",
                PAST_DAYS,
                values.len()
            );
        }
        let mut fixed = [0u32; PAST_DAYS];
        fixed.copy_from_slice(values);
        Ok(Self { values: fixed })
    }

    /// The readings, oldest first.
    pub fn values(&self) -> &[u32; PAST_DAYS] {
        &self.values
    }

    /// The readings converted to the float representation the
    /// scaler and model operate on.
    pub fn as_f64(&self) -> [f64; PAST_DAYS] {
        let mut out = [0.0; PAST_DAYS];
        for (slot, &v) in out.iter_mut().zip(self.values.iter()) {
            *slot = f64::from(v);
        }
        out
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_exactly_seven() {
        let w = ReadingWindow::new(&[10, 20, 30, 40, 50, 60, 70]).unwrap();
        assert_eq!(w.values(), &[10, 20, 30, 40, 50, 60, 70]);
    }

    #[test]
    fn test_rejects_short_input() {
        assert!(ReadingWindow::new(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_rejects_long_input() {
        assert!(ReadingWindow::new(&[1, 2, 3, 4, 5, 6, 7, 8]).is_err());
    }

    #[test]
    fn test_float_conversion_preserves_order() {
        let w = ReadingWindow::new(&[7, 6, 5, 4, 3, 2, 1]).unwrap();
        assert_eq!(w.as_f64(), [7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    }
}
