//! Scan mode handler: run, print, persist, map failures to exit codes.

use crate::cli::Cli;
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::reporter::{text::TextReporter, Reporter};
use crate::scanner::run_scan;
use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use tracing::{debug, info};

/// Run a normal scan.
///
/// Exit codes: 2 when the root is missing, 0 otherwise — a failed report
/// write only warns, because the report already reached stdout.
pub fn run_normal_mode(cli: &Cli) -> ExitCode {
    let config = ScanConfig::new(&cli.root, &cli.report);
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    info!(root = %config.root.display(), "scan requested");

    let result = match run_scan(&config) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), err);
            return ExitCode::from(2);
        }
    };

    let resolved_root = config
        .root
        .canonicalize()
        .unwrap_or_else(|_| config.root.clone());
    let report = TextReporter::new(timestamp, resolved_root).report(&result);
    print!("{}", report);

    match fs::write(&config.report_path, &report) {
        Ok(()) => {
            let saved = config
                .report_path
                .canonicalize()
                .unwrap_or_else(|_| config.report_path.clone());
            println!("\nSaved report to: {}", saved.display());
        }
        Err(err) => {
            let err = ScanError::WriteError {
                path: config.report_path.clone(),
                source: err,
            };
            eprintln!("{} {}", "[WARN]".yellow(), err);
        }
    }

    debug!(
        files_scanned = result.files_scanned,
        total_hits = result.total_hits(),
        "scan finished"
    );
    ExitCode::SUCCESS
}
