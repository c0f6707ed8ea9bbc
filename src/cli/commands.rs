// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `info` and `predict`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → u32, enum variants, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::cli::pages::Page;
use crate::domain::category::Language;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one of the application's pages
    Info(InfoArgs),

    /// Predict the next 7 days of PM2.5 from the past 7 readings
    Predict(PredictArgs),
}

/// Label language selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LangArg {
    /// English labels
    En,
    /// Indonesian (ISPU) labels
    Id,
}

/// Convert the CLI language flag into the domain enum.
/// This is the boundary between Layer 1 and Layer 3 —
/// the domain layer never sees clap types.
impl From<LangArg> for Language {
    fn from(l: LangArg) -> Self {
        match l {
            LangArg::En => Language::English,
            LangArg::Id => Language::Indonesian,
        }
    }
}

/// Page selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PageArg {
    /// Landing page
    Main,
    /// Prediction instructions
    Prediction,
}

impl From<PageArg> for Page {
    fn from(p: PageArg) -> Self {
        match p {
            PageArg::Main => Page::Main,
            PageArg::Prediction => Page::Prediction,
        }
    }
}

/// All arguments for the `info` command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Which page to show
    #[arg(long, value_enum, default_value_t = PageArg::Main)]
    pub page: PageArg,

    /// Language for the page text
    #[arg(long, value_enum, default_value_t = LangArg::En)]
    pub lang: LangArg,
}

/// All arguments for the `predict` command.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// PM2.5 readings for the past 7 days, oldest first
    /// (value no. 1 = 7 days ago, value no. 7 = yesterday)
    #[arg(value_name = "READING", num_args = 7)]
    pub readings: Vec<u32>,

    /// Path to the historical pollutant + weather CSV
    #[arg(long, default_value = "data/jakarta_daily.csv")]
    pub data: String,

    /// Directory with the exported model and scaler artifacts
    #[arg(long, default_value = "artifacts")]
    pub artifacts: String,

    /// Language for headings and category labels
    #[arg(long, value_enum, default_value_t = LangArg::En)]
    pub lang: LangArg,
}
