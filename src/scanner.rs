//! The scan pass: traversal, eligibility, matching, aggregation.

use crate::config::ScanConfig;
use crate::discovery;
use crate::error::Result;
pub use crate::matcher::MatchHit;
use crate::matcher::match_file;
use crate::searches::all_searches;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// All hits for one (file, search) pair. `path` is relative to the scan root.
#[derive(Debug, Clone)]
pub struct FileMatches {
    pub path: PathBuf,
    pub hits: Vec<MatchHit>,
}

/// One report section: a search label plus every file that matched it.
#[derive(Debug, Clone)]
pub struct Section {
    pub label: &'static str,
    pub files: Vec<FileMatches>,
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    /// One section per builtin search, in configured order.
    pub sections: Vec<Section>,
    /// Count of eligible files actually scanned.
    pub files_scanned: usize,
}

impl ScanResult {
    pub fn total_hits(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.files)
            .map(|f| f.hits.len())
            .sum()
    }
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Run the whole scan over `config.root`.
///
/// Strictly sequential: one traversal, each eligible file matched against
/// every search in order. A file that cannot be read is skipped for that
/// search with a warning; only a missing root aborts.
pub fn run_scan(config: &ScanConfig) -> Result<ScanResult> {
    info!(root = %config.root.display(), "starting scan");
    let searches = all_searches();

    let mut sections: Vec<Section> = searches
        .iter()
        .map(|spec| Section {
            label: spec.label,
            files: Vec::new(),
        })
        .collect();
    let mut files_scanned = 0usize;

    for path in discovery::walk_files(&config.root, config)? {
        if !discovery::is_eligible(&path, config) {
            debug!(path = %path.display(), "ineligible, skipped");
            continue;
        }
        files_scanned += 1;

        let rel = relative_to(&path, &config.root);
        for (idx, spec) in searches.iter().enumerate() {
            match match_file(&path, spec, config) {
                Ok(hits) if !hits.is_empty() => {
                    sections[idx].files.push(FileMatches {
                        path: rel.clone(),
                        hits,
                    });
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(search = spec.label, error = %err, "file skipped");
                }
            }
        }
    }

    let result = ScanResult {
        sections,
        files_scanned,
    };
    info!(
        files_scanned = result.files_scanned,
        total_hits = result.total_hits(),
        "scan complete"
    );
    Ok(result)
}
