use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sesscan",
    version,
    about = "Locate session-storage auth references before a cookie migration",
    long_about = "sesscan walks a repository, greps every eligible text file against a fixed \
set of session-auth patterns, and writes a report of every code site the migration must touch."
)]
pub struct Cli {
    /// Root directory to scan
    #[arg(long, default_value = "./src")]
    pub root: PathBuf,

    /// Where to save the report file
    #[arg(long, default_value = "./scan_report.txt")]
    pub report: PathBuf,

    /// Verbose output (debug-level logging)
    #[arg(short, long)]
    pub verbose: bool,
}
