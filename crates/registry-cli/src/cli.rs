//! CLI argument definitions for the registry summary tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use registry_model::{AffirmativePolicy, DiseaseType};

#[derive(Parser)]
#[command(
    name = "registry-report",
    version,
    about = "Oncology registry summary - consolidate patient cohort exports",
    long_about = "Consolidate oncology registry exports into one summary table.\n\n\
                  Locates the relevant columns by name heuristics, normalizes dates,\n\
                  flags, and staging text, and counts records by sex, age bracket,\n\
                  treatment duration, stage, death, and relapse year."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the consolidated summary for one registry export.
    Report(ReportArgs),

    /// List supported disease types and their configured defaults.
    Diseases,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Registry export file (comma/UTF-8 or semicolon/Latin-1 delimited text).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Disease type variant of the export.
    #[arg(long = "disease", value_enum)]
    pub disease: DiseaseArg,

    /// Leading non-data rows before the header (default: per disease type).
    #[arg(long = "header-offset", value_name = "ROWS")]
    pub header_offset: Option<usize>,

    /// Report cutoff date bounding treatment durations (YYYY-MM-DD).
    #[arg(long = "reference-end", value_name = "DATE")]
    pub reference_end: Option<NaiveDate>,

    /// Relapse-flag interpretation (default: per disease type).
    #[arg(long = "affirmative", value_enum)]
    pub affirmative: Option<AffirmativeArg>,

    /// Attribute every relapse to this fixed reporting year.
    #[arg(long = "relapse-year", value_name = "YEAR", conflicts_with = "relapse_year_from_date")]
    pub relapse_year: Option<i32>,

    /// Derive relapse years from the relapse-date column.
    #[arg(long = "relapse-year-from-date")]
    pub relapse_year_from_date: bool,

    /// Write the summary as CSV to this path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI disease type choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DiseaseArg {
    Lymphoma,
    MultipleMyeloma,
    Lung,
    Prostate,
    Melanoma,
    Gynecologic,
    Gastric,
}

impl DiseaseArg {
    pub fn to_disease(self) -> DiseaseType {
        match self {
            DiseaseArg::Lymphoma => DiseaseType::Lymphoma,
            DiseaseArg::MultipleMyeloma => DiseaseType::MultipleMyeloma,
            DiseaseArg::Lung => DiseaseType::Lung,
            DiseaseArg::Prostate => DiseaseType::Prostate,
            DiseaseArg::Melanoma => DiseaseType::Melanoma,
            DiseaseArg::Gynecologic => DiseaseType::Gynecologic,
            DiseaseArg::Gastric => DiseaseType::Gastric,
        }
    }
}

/// CLI affirmative-token policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum AffirmativeArg {
    /// Exact match against S, SIM, YES.
    Exact,
    /// Any value starting with S.
    SPrefix,
}

impl AffirmativeArg {
    pub fn to_policy(self) -> AffirmativePolicy {
        match self {
            AffirmativeArg::Exact => AffirmativePolicy::Exact,
            AffirmativeArg::SPrefix => AffirmativePolicy::StartsWithS,
        }
    }
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
