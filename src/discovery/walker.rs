//! Pruning directory traversal.
//!
//! Ignored directories are pruned at descent time via `filter_entry`, so a
//! `node_modules` tree with a hundred thousand files costs one readdir entry,
//! not a full walk. Symlinks are not followed; only regular files are yielded.

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

fn is_ignored_dir(entry: &DirEntry, config: &ScanConfig) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.is_ignored_dir(name))
}

/// Walk the tree rooted at `config.root`, yielding every regular file not
/// under an ignored directory. Each call starts a fresh traversal.
///
/// Fails with `RootNotFound` before yielding anything if the root is missing.
pub fn walk_files<'a>(
    root: &Path,
    config: &'a ScanConfig,
) -> Result<impl Iterator<Item = PathBuf> + 'a> {
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }

    let iter = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_ignored_dir(e, config))
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                trace!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf());

    Ok(iter)
}
