//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Web platform baseline checker for source files.
#[derive(Debug, Parser)]
#[command(name = "baseline-check-rs")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Working directory for the scan
    #[arg(long, default_value = ".")]
    pub workspace: Utf8PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Path to baseline-check.json
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,

    /// Minimum severity threshold
    #[arg(long, value_enum, default_value = "hint")]
    pub threshold: Threshold,

    /// Watch mode
    #[arg(long)]
    pub watch: bool,

    /// Preserve watch output (don't clear screen)
    #[arg(long = "preserveWatchOutput")]
    pub preserve_watch_output: bool,

    /// Exit with error when limited-availability features are found
    #[arg(long = "fail-on-limited")]
    pub fail_on_limited: bool,

    /// Glob patterns to ignore
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Root font size used for px to rem suggestions
    #[arg(long = "rem-base")]
    pub rem_base: Option<f64>,

    /// Browser named in fallback suggestions
    #[arg(long = "reference-browser")]
    pub reference_browser: Option<String>,

    /// Delay between scanned lines, in milliseconds
    #[arg(long = "pacing-ms")]
    pub pacing_ms: Option<u64>,

    /// Print timing breakdowns
    #[arg(long)]
    pub timings: bool,

    /// Show embedded dataset version and feature count
    #[arg(long = "dataset-version")]
    pub dataset_version: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// Human-readable with code snippets
    HumanVerbose,
    /// JSON output
    Json,
    /// Machine-readable (one line per finding)
    Machine,
}

/// Severity threshold.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum Threshold {
    /// Show everything (default)
    #[default]
    Hint,
    /// Show infos and warnings
    Info,
    /// Only show warnings
    Warning,
}
