pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod handlers;
pub mod matcher;
pub mod reporter;
pub mod scanner;
pub mod searches;

pub use cli::Cli;
pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use reporter::{text::TextReporter, Reporter};
pub use scanner::{run_scan, FileMatches, MatchHit, ScanResult, Section};
pub use searches::SearchSpec;
