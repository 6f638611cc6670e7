//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Vigil - compliance alert triage and remediation
///
/// Reads the results of a compliance audit, raises an alert for every
/// failing control, investigates and remediates or escalates each one,
/// and writes a remediation log and summary report.
#[derive(Debug, Parser)]
#[command(name = "vigil", author, version, about)]
pub struct Cli {
    /// Path to the audit results file (JSON array of control evaluations)
    #[arg(
        short,
        long,
        env = "VIGIL_AUDIT",
        value_hint = ValueHint::FilePath
    )]
    pub audit: PathBuf,

    /// Directory for generated report artifacts (created if absent)
    #[arg(
        short,
        long,
        env = "VIGIL_OUTPUT_DIR",
        default_value = "reports",
        value_hint = ValueHint::DirPath
    )]
    pub output_dir: PathBuf,

    /// Apply remediation for real instead of the default dry-run
    #[arg(long)]
    pub live: bool,

    /// Print statistics only; skip writing report artifacts
    #[arg(long)]
    pub summary_only: bool,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}
