// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one
// and the artifact store in Layer 6.
//
// Why isolate Burn code here?
//   - If Burn's API changes, we only update this layer
//   - Other layers are testable without a GPU
//   - The model architecture is clearly separated from
//     data loading and application logic
//
// What's in this layer:
//
//   model.rs      — The stacked-LSTM forecaster architecture:
//                   • per-timestep input of the 13 features
//                   • recurrent layers carrying hidden state
//                     across the 7 days of the window
//                   • a linear head projecting the final
//                     hidden state to the 7 forecast values
//
//   inferencer.rs — The inference engine
//                   Rebuilds the architecture from the saved
//                   spec, loads the pre-trained weights, runs
//                   one forward pass per request
//
// The weights are an externally trained artifact; nothing in
// this repository fits or updates them.
//
// Reference: Hochreiter & Schmidhuber (1997) LSTM
//            Burn Book §3 (Building Blocks)

/// Stacked-LSTM sequence regressor architecture
pub mod model;

/// Inference engine — loads artifacts and predicts 7 values
pub mod inferencer;
