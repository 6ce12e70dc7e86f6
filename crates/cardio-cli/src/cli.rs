//! CLI argument definitions for Cardio Risk Studio.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use cardio_model::{ChestPainType, RestingEcg, Sex, StSlope, YesNo};

#[derive(Parser)]
#[command(
    name = "cardio",
    version,
    about = "Cardio Risk Studio - Submit clinical measurements for heart-disease risk prediction",
    long_about = "Submit one patient's clinical measurements to a heart-disease\n\
                  prediction service and report the returned risk label.\n\n\
                  Categorical flags accept either a label (e.g. --sex male) or the\n\
                  integer wire code (e.g. --sex 1). Run `cardio fields` to list the\n\
                  fields, their accepted ranges and option codes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient values in log output (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Submit a clinical record and report the predicted risk label.
    Predict(PredictArgs),

    /// List the eleven clinical fields, their domains and wire codes.
    Fields,
}

#[derive(Parser)]
pub struct PredictArgs {
    /// Base URL of the prediction service.
    #[arg(long = "endpoint", value_name = "URL", default_value = cardio_client::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Validate and print the request body without submitting.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Age in years (1-120).
    #[arg(long, default_value_t = 50)]
    pub age: u32,

    /// Patient sex (female/male).
    #[arg(long, default_value = "female")]
    pub sex: Sex,

    /// Chest pain type (typical-angina, atypical-angina, non-anginal-pain,
    /// asymptomatic).
    #[arg(long = "chest-pain", default_value = "typical-angina")]
    pub chest_pain: ChestPainType,

    /// Resting blood pressure in mmHg (80-200).
    #[arg(long = "resting-bp", default_value_t = 120)]
    pub resting_bp: u32,

    /// Serum cholesterol in mg/dl (100-600).
    #[arg(long, default_value_t = 200)]
    pub cholesterol: u32,

    /// Fasting blood sugar above 120 mg/dl (no/yes).
    #[arg(long = "fasting-bs", default_value = "no")]
    pub fasting_bs: YesNo,

    /// Resting ECG result (normal, st-t-wave-abnormality,
    /// left-ventricular-hypertrophy).
    #[arg(long = "resting-ecg", default_value = "normal")]
    pub resting_ecg: RestingEcg,

    /// Maximum heart rate achieved (60-220).
    #[arg(long = "max-hr", default_value_t = 150)]
    pub max_hr: u32,

    /// Exercise-induced angina (no/yes).
    #[arg(long = "exercise-angina", default_value = "no")]
    pub exercise_angina: YesNo,

    /// ST depression induced by exercise (0.0-10.0).
    #[arg(long, default_value_t = 0.0)]
    pub oldpeak: f64,

    /// Slope of the peak exercise ST segment (up, flat, down).
    #[arg(long = "st-slope", default_value = "up")]
    pub st_slope: StSlope,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
