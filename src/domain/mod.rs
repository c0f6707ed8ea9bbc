// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and enums that define the core concepts of the system.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O or network calls
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no GPU needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// The seven user-supplied past-day PM2.5 readings
pub mod reading;

// One dated row of the historical pollutant + weather dataset
pub mod record;

// The seven-day forecast and its dated entries
pub mod forecast;

// ISPU severity categories and their display labels
pub mod category;

// Core abstractions (traits) that other layers implement
pub mod traits;
