//! Process-wide scan configuration.
//!
//! Everything here is fixed at startup and never mutated: the ignored
//! directory names, the text-extension allowlist, and the tuning constants
//! inherited from the original migration tooling. The constants are plain
//! fields so callers can override them, but the defaults are the contract.

use std::path::PathBuf;

/// Directory names whose whole subtree is pruned from traversal.
const IGNORE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    ".vercel",
    "dist",
    "build",
    "out",
    ".turbo",
    "coverage",
    "tmp",
    "__pycache__",
    ".cache",
];

/// Extensions accepted as text without a size check (compared lowercase).
const TEXT_EXTENSIONS: &[&str] = &[
    "ts", "tsx", "js", "jsx", "mjs", "cjs", "json", "css", "scss", "sass", "md", "mdx", "html",
    "yml", "yaml", "env", "txt",
];

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directory to scan.
    pub root: PathBuf,
    /// Where to persist the rendered report.
    pub report_path: PathBuf,
    pub ignore_dirs: Vec<&'static str>,
    pub text_extensions: Vec<&'static str>,
    /// Files with an unlisted extension are scanned only at or below this size.
    pub max_file_size: u64,
    /// Hit lines longer than this are truncated for display.
    pub max_line_len: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./src"),
            report_path: PathBuf::from("./scan_report.txt"),
            ignore_dirs: IGNORE_DIRS.to_vec(),
            text_extensions: TEXT_EXTENSIONS.to_vec(),
            max_file_size: 1_500_000,
            max_line_len: 300,
        }
    }
}

impl ScanConfig {
    /// Build a config for the given root and report path, keeping defaults
    /// for everything else.
    pub fn new(root: impl Into<PathBuf>, report_path: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            report_path: report_path.into(),
            ..Default::default()
        }
    }

    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignore_dirs.contains(&name)
    }

    pub fn is_text_extension(&self, ext: &str) -> bool {
        let lower = ext.to_lowercase();
        self.text_extensions.contains(&lower.as_str())
    }
}
