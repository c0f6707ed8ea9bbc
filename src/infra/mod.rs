// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the cross-cutting persistence concern: loading the
// pre-trained artifacts the rest of the system treats as
// opaque, read-only collaborators.
//
//   artifacts.rs — The artifact store
//                  One directory holds everything exported by
//                  the (external) training run:
//                    model.json          architecture spec
//                    model.mpk.gz        weights (CompactRecorder)
//                    input_scaler.json   13-column input scaler
//                    output_scaler.json  1-column output scaler
//                  Loading validates the shapes against the
//                  feature registry before anything runs.
//
// Why is this a separate layer?
//   The artifact files are used by the data layer (scalers)
//   and the ML layer (model) but belong to neither. Keeping
//   the file layout knowledge here means swapping the storage
//   location touches exactly one module.
//
// Reference: Rust Book §7 (Modules)
//            Burn Book §5 (Records and Checkpointing)

/// Loads the pre-trained model, spec, and scaler artifacts
pub mod artifacts;
