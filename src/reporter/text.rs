//! Plain-text report rendering.
//!
//! The rendered string is what both stdout and the report file receive, so
//! it must never contain terminal escape codes. The per-hit line format
//! `<path>:<line>: <text>` is a compatibility contract.

use crate::reporter::Reporter;
use crate::scanner::{FileMatches, ScanResult};
use std::path::PathBuf;

const SEPARATOR_WIDTH: usize = 80;

pub struct TextReporter {
    /// Run-start timestamp, already formatted as `YYYY-MM-DD HH:MM:SS`.
    timestamp: String,
    /// Resolved absolute scan root, shown in the header.
    root: PathBuf,
}

impl TextReporter {
    pub fn new(timestamp: String, root: PathBuf) -> Self {
        Self { timestamp, root }
    }

    fn render_section(&self, out: &mut Vec<String>, label: &str, files: &[FileMatches]) {
        out.push(String::new());
        out.push(format!("## {}", label));
        out.push(String::new());

        if files.is_empty() {
            out.push("(no matches)".to_string());
            return;
        }

        // Sort on the rendered string form of the path.
        let mut sorted: Vec<&FileMatches> = files.iter().collect();
        sorted.sort_by_key(|f| f.path.display().to_string());

        for file in sorted {
            let path = file.path.display();
            for hit in &file.hits {
                out.push(format!("{}:{}: {}", path, hit.line, hit.text));
            }
        }
    }
}

impl Reporter for TextReporter {
    fn report(&self, result: &ScanResult) -> String {
        let mut out = Vec::new();

        out.push("Session storage migration scan".to_string());
        out.push(format!("Generated: {}", self.timestamp));
        out.push(format!("Root: {}", self.root.display()));
        out.push(format!("Files scanned: {}", result.files_scanned));
        out.push("=".repeat(SEPARATOR_WIDTH));

        for section in &result.sections {
            self.render_section(&mut out, section.label, &section.files);
        }

        out.push(String::new());
        out.push(format!(
            "Summary: {} total matches across {} files.",
            result.total_hits(),
            result.files_scanned
        ));

        let mut report = out.join("\n");
        report.push('\n');
        report
    }
}
