//! Line-oriented pattern matching for a single (file, search) pair.

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::searches::SearchSpec;
use std::fs;
use std::path::Path;

/// One matching line. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchHit {
    /// 1-indexed line number.
    pub line: usize,
    /// The matching line, truncated for display.
    pub text: String,
}

/// Truncate `line` to at most `max_len` characters, replacing the tail with
/// a three-character ellipsis when it overflows.
fn display_text(line: &str, max_len: usize) -> String {
    if line.chars().count() > max_len {
        let mut text: String = line.chars().take(max_len.saturating_sub(3)).collect();
        text.push_str("...");
        text
    } else {
        line.to_string()
    }
}

/// Apply one search to one file, returning its hits in line order.
///
/// The content is decoded lossily, so undecodable bytes degrade into
/// replacement characters instead of failing the scan. `str::lines` is used
/// for splitting, so no phantom line is counted past a trailing newline.
/// Only an I/O failure surfaces as `ReadError`; the caller skips the file
/// for this search and keeps going.
pub fn match_file(path: &Path, spec: &SearchSpec, config: &ScanConfig) -> Result<Vec<MatchHit>> {
    let bytes = fs::read(path).map_err(|e| ScanError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let mut hits = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if spec.matches_line(line) {
            hits.push(MatchHit {
                line: idx + 1,
                text: display_text(line, config.max_line_len),
            });
        }
    }
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searches::all_searches;
    use std::fs;
    use tempfile::TempDir;

    fn session_spec() -> &'static SearchSpec {
        &all_searches()[0]
    }

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_line_numbers_are_one_indexed() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "app.ts",
            "const a = 1;\nconst b = 2;\nwindow.sessionStorage.getItem('x')\n",
        );

        let hits = match_file(&path, session_spec(), &ScanConfig::default()).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].line, 3);
        assert_eq!(hits[0].text, "window.sessionStorage.getItem('x')");
    }

    #[test]
    fn test_no_phantom_line_after_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.ts", "sessionStorage.clear()\n");

        let hits = match_file(&path, session_spec(), &ScanConfig::default()).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].line, 1);
    }

    #[test]
    fn test_multiple_hits_in_line_order() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "a.ts",
            "sessionStorage.getItem('a')\nplain line\nsessionStorage.getItem('b')",
        );

        let hits = match_file(&path, session_spec(), &ScanConfig::default()).unwrap();
        assert_eq!(
            hits.iter().map(|h| h.line).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_case_insensitive_match() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.ts", "SESSIONSTORAGE.getItem('x')");

        let hits = match_file(&path, session_spec(), &ScanConfig::default()).unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_truncation_boundary() {
        let dir = TempDir::new().unwrap();
        // 301 chars: pattern text plus 'a' padding.
        let prefix = "sessionStorage.x";
        let long_line = format!("{}{}", prefix, "a".repeat(301 - prefix.len()));
        assert_eq!(long_line.chars().count(), 301);
        let path = write_file(&dir, "long.ts", &long_line);

        let hits = match_file(&path, session_spec(), &ScanConfig::default()).unwrap();
        assert_eq!(hits[0].text.chars().count(), 300);
        assert!(hits[0].text.ends_with("..."));
        assert_eq!(&hits[0].text[..297], &long_line[..297]);
    }

    #[test]
    fn test_exactly_max_len_line_unmodified() {
        let dir = TempDir::new().unwrap();
        let prefix = "sessionStorage.x";
        let line = format!("{}{}", prefix, "a".repeat(300 - prefix.len()));
        assert_eq!(line.chars().count(), 300);
        let path = write_file(&dir, "edge.ts", &line);

        let hits = match_file(&path, session_spec(), &ScanConfig::default()).unwrap();
        assert_eq!(hits[0].text, line);
    }

    #[test]
    fn test_invalid_utf8_is_tolerated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mixed.txt");
        let mut bytes = b"sessionStorage.getItem('x') ".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b"\nclean line\n");
        fs::write(&path, bytes).unwrap();

        let hits = match_file(&path, session_spec(), &ScanConfig::default()).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].line, 1);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = match_file(
            Path::new("/nope/gone.ts"),
            session_spec(),
            &ScanConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ScanError::ReadError { .. }));
    }

    #[test]
    fn test_empty_result_for_no_matches() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "clean.ts", "const x = 1;\n");

        let hits = match_file(&path, session_spec(), &ScanConfig::default()).unwrap();
        assert!(hits.is_empty());
    }
}
