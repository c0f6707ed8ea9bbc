// ============================================================
// Layer 3 — Air Quality Category
// ============================================================
// Maps a rounded PM2.5 index value onto the ISPU severity
// scale used in Indonesia. The mapping is a pure function of
// the integer value with inclusive upper bounds:
//
//   value ≤ 50   → Good
//   value ≤ 100  → Moderate
//   value ≤ 199  → Unhealthy
//   value ≤ 299  → Very Unhealthy
//   value ≤ 500  → Hazardous
//   value > 500  → Out of range (beyond the ISPU scale)
//
// The enum is closed: every integer maps to exactly one
// category, so display code never has to handle a "no label"
// case. Each category carries an English and an Indonesian
// display label.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};

/// Display language for category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Indonesian,
}

/// ISPU severity category for a PM2.5 index value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirQualityCategory {
    Good,
    Moderate,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    OutOfRange,
}

impl AirQualityCategory {
    /// Classify a rounded PM2.5 index value.
    ///
    /// Takes i64 so that a pathological negative model output
    /// still maps to a category instead of panicking; anything
    /// at or below 50 is Good.
    pub fn from_value(value: i64) -> Self {
        match value {
            v if v <= 50 => Self::Good,
            v if v <= 100 => Self::Moderate,
            v if v <= 199 => Self::Unhealthy,
            v if v <= 299 => Self::VeryUnhealthy,
            v if v <= 500 => Self::Hazardous,
            _ => Self::OutOfRange,
        }
    }

    /// Human-readable label in the requested language.
    pub fn label(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::Good => "Good",
                Self::Moderate => "Moderate",
                Self::Unhealthy => "Unhealthy",
                Self::VeryUnhealthy => "Very Unhealthy",
                Self::Hazardous => "Hazardous",
                Self::OutOfRange => "Out of range",
            },
            Language::Indonesian => match self {
                Self::Good => "Baik",
                Self::Moderate => "Sedang",
                Self::Unhealthy => "Tidak Sehat",
                Self::VeryUnhealthy => "Sangat Tidak Sehat",
                Self::Hazardous => "Berbahaya",
                Self::OutOfRange => "Di luar jangkauan",
            },
        }
    }
}
