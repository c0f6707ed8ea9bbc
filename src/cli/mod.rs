// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `info`    — renders one of the application's pages
//   2. `predict` — runs the seven-day PM2.5 forecast
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

// Page enumeration and render functions
pub mod pages;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InfoArgs, PredictArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "pm25-forecast",
    version = "0.1.0",
    about = "Predict Central Jakarta's PM2.5 index for the next 7 days."
)]
pub struct Cli {
    /// The subcommand to run (info or predict)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Info(args) => Self::run_info(args),
            Commands::Predict(args) => Self::run_predict(args),
        }
    }

    /// Handles the `info` subcommand — pure rendering, no I/O.
    fn run_info(args: InfoArgs) -> Result<()> {
        println!("{}", pages::render(args.page.into(), args.lang.into()));
        Ok(())
    }

    /// Handles the `predict` subcommand.
    /// Validates the readings, loads the artifacts, and prints
    /// the dated forecast table.
    fn run_predict(args: PredictArgs) -> Result<()> {
        use crate::application::forecast_use_case::ForecastUseCase;
        use crate::domain::reading::ReadingWindow;

        let readings = ReadingWindow::new(&args.readings)?;

        tracing::info!(
            "Forecasting from readings {:?} (data: '{}', artifacts: '{}')",
            readings.values(),
            args.data,
            args.artifacts
        );

        // Build the use case with artifact and dataset paths
        let use_case = ForecastUseCase::new(args.artifacts.clone(), args.data.clone())?;

        // Run the pipeline and render the result
        let report = use_case.forecast_today(&readings)?;
        println!("{}", pages::render_report(&report, args.lang.into()));
        Ok(())
    }
}
