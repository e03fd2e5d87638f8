//! The scan command: pick a backend, run it once, print the report.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use wifi_range_scan::{
    run_scan, NetshScanner, PathLossModel, ReplayScanner, ScanOutcome, WifiScanError, WlanScanPort,
};

use crate::{Cli, OutputFormat};

/// Backend chosen by the command line: a saved listing when `--input` is
/// given, live `netsh` otherwise.
pub fn select_backend(cli: &Cli) -> Box<dyn WlanScanPort> {
    match &cli.input {
        Some(path) => Box::new(ReplayScanner::new(path)),
        None => Box::new(NetshScanner::new()),
    }
}

/// Run one scan and write the report to `out`.
///
/// Scan failures are printed, not returned; only write and serialisation
/// errors surface as `Err`.
pub fn execute(cli: &Cli, backend: &dyn WlanScanPort, out: &mut impl Write) -> Result<()> {
    let model = PathLossModel::default();
    let outcome = run_scan(backend, &model);

    match cli.format {
        OutputFormat::Table => print_table(&outcome, out),
        OutputFormat::Json => {
            let report = outcome.to_report(backend.name(), &model);
            serde_json::to_writer_pretty(&mut *out, &report).context("failed to serialise report")?;
            writeln!(out).context("failed to write report")
        }
    }
}

fn print_table(outcome: &ScanOutcome, out: &mut impl Write) -> Result<()> {
    if let ScanOutcome::Unavailable(err) = outcome {
        let tag = match err {
            WifiScanError::CommandFailed { .. } => "[WARN]".yellow().bold(),
            _ => "[ERROR]".red().bold(),
        };
        writeln!(out, "{} {}", tag, err.user_message()).context("failed to write notice")?;
    }
    writeln!(out, "{}", outcome.render_table()).context("failed to write report")
}

/// Prompt and block until a line (or EOF) arrives on `input`.
pub fn wait_for_enter(out: &mut impl Write, input: &mut impl BufRead) {
    if let Err(e) = write!(out, "\nPress Enter To Exit...").and_then(|()| out.flush()) {
        tracing::debug!(error = %e, "could not write exit prompt");
    }

    let mut line = String::new();
    if let Err(e) = input.read_line(&mut line) {
        tracing::debug!(error = %e, "could not read from stdin");
    }
}
