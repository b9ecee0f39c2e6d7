//! The fixed, ordered list of migration searches.
//!
//! Each search pairs a human-readable section label with a compiled pattern.
//! The list is configuration, not user-extensible at runtime; it is built
//! once and shared for the lifetime of the process.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

#[derive(Debug, Clone)]
pub struct SearchSpec {
    pub label: &'static str,
    pub pattern: Regex,
}

impl SearchSpec {
    fn new(label: &'static str, pattern: &str) -> Self {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .unwrap();
        Self { label, pattern }
    }

    /// True if the pattern matches anywhere in the line.
    pub fn matches_line(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

static BUILTIN_SEARCHES: LazyLock<Vec<SearchSpec>> = LazyLock::new(|| {
    vec![
        SearchSpec::new(
            "Session storage usage",
            r"sessionStorage\.|window\.sessionStorage",
        ),
        SearchSpec::new(
            "Token prop / session variable patterns",
            // Deliberately liberal: catches prop drilling and renamed bindings.
            r"figma[^\n]{0,80}token|accessToken|refreshToken",
        ),
        SearchSpec::new(
            "API routes / callback references",
            r"/api/figma/|figma/callback",
        ),
    ]
});

/// The builtin searches, in report order.
pub fn all_searches() -> &'static [SearchSpec] {
    &BUILTIN_SEARCHES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_order_is_fixed() {
        let labels: Vec<_> = all_searches().iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![
                "Session storage usage",
                "Token prop / session variable patterns",
                "API routes / callback references",
            ]
        );
    }

    #[test]
    fn test_session_storage_pattern() {
        let spec = &all_searches()[0];
        assert!(spec.matches_line("window.sessionStorage.getItem('x')"));
        assert!(spec.matches_line("sessionStorage.setItem('token', t)"));
        assert!(!spec.matches_line("localStorage.getItem('x')"));
    }

    #[test]
    fn test_session_storage_pattern_is_case_insensitive() {
        let spec = &all_searches()[0];
        assert!(spec.matches_line("SESSIONSTORAGE.getItem('x')"));
        assert!(spec.matches_line("Window.SessionStorage"));
    }

    #[test]
    fn test_token_pattern() {
        let spec = &all_searches()[1];
        assert!(spec.matches_line("const accessToken = props.token;"));
        assert!(spec.matches_line("refreshToken: string"));
        assert!(spec.matches_line("figma oauth token exchange"));
        // The bounded wildcard spans any characters, including 'n' and '\'.
        assert!(spec.matches_line("const figma_connection_token = load();"));
        assert!(!spec.matches_line("const color = theme.primary;"));
    }

    #[test]
    fn test_api_route_pattern() {
        let spec = &all_searches()[2];
        assert!(spec.matches_line("fetch('/api/figma/me')"));
        assert!(spec.matches_line("redirect to figma/callback here"));
        assert!(!spec.matches_line("fetch('/api/users')"));
    }
}
