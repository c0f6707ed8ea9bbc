// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw historical CSV
// all the way to the scaled numeric window the model consumes.
//
// The pipeline flows in this order:
//
//   history CSV
//       │
//       ▼
//   CsvHistoryLoader  → parses dated 13-feature rows
//       │
//       ▼
//   ContextWindow     → selects the 7 most recent consecutive
//       │               rows and overwrites the PM2.5 column
//       │               with the user readings
//       ▼
//   MinMaxScaler      → maps raw feature values into the
//                       range the model was trained on
//                       (and back, for the model output)
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Parses the historical pollutant + weather CSV
pub mod loader;

/// Assembles the 7×13 model input window
pub mod window;

/// Pre-fitted min-max normalization and its inverse
pub mod scaler;
