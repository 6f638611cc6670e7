//! Vigil CLI - compliance alert triage and remediation.
//!
//! Main entry point for the `vigil` binary.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use vigil_alert_manager::AlertManager;

mod cli;

use cli::Cli;

/// Application exit codes
#[repr(u8)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    ReportError = 3,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => Exit::Success.into(),
        Err(e) => {
            error!("{e:#}");
            if e.downcast_ref::<vigil_alert_manager::ReportError>().is_some() {
                Exit::ReportError.into()
            } else {
                Exit::GeneralError.into()
            }
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut manager = AlertManager::new(&cli.audit, &cli.output_dir, !cli.live)?;

    let collected = manager.collect_alerts();
    let stats = manager.process_all_alerts();
    let closed = manager.close_resolved_alerts();

    if !cli.summary_only {
        let log_path = manager.generate_remediation_log()?;
        let summary_path = manager.generate_summary_report()?;
        println!("Remediation log: {}", log_path.display());
        println!("Summary report:  {}", summary_path.display());
    }

    println!("Mode:            {}", if cli.live { "live" } else { "dry-run" });
    println!("Total alerts:    {collected}");
    println!("Remediated:      {}", stats.remediated);
    println!("Escalated:       {}", stats.escalated);
    println!("False positives: {}", stats.false_positives);
    println!("Closed:          {closed}");

    Ok(())
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match cli.verbose {
        0 if cli.quiet => EnvFilter::new("error"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(cli.verbose >= 2))
        .init();
}
