//! Text-file eligibility.
//!
//! Heuristic, not guaranteed-correct text detection: a known extension is
//! accepted outright, anything else is accepted only while small enough that
//! scanning it line-wise is harmless.

use crate::config::ScanConfig;
use crate::error::ScanError;
use std::path::Path;
use tracing::trace;

/// Decide whether `path` should be scanned as text.
///
/// A failed metadata lookup rejects the file rather than propagating; one
/// unstat-able file must not abort the scan.
pub fn is_eligible(path: &Path, config: &ScanConfig) -> bool {
    if path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| config.is_text_extension(ext))
    {
        return true;
    }

    match path.metadata() {
        Ok(meta) => meta.len() <= config.max_file_size,
        Err(err) => {
            let err = ScanError::StatError {
                path: path.to_path_buf(),
                source: err,
            };
            trace!(error = %err, "treating as ineligible");
            false
        }
    }
}
