//! Suspicious-input detector.
//!
//! Looks at the request path and query string for script injection, SQL
//! injection and path traversal attempts and logs a warning. Requests are
//! never rewritten or rejected here; escaping happens when content is
//! rendered.

use std::sync::LazyLock;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use regex::Regex;

/// Named attack patterns, matched case-insensitively against the raw URI.
static PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        (
            "script_injection",
            r"(?i)(<|%3c)\s*script|javascript(:|%3a)|(<|%3c)[^>]*(\s|\+|%20|/)on[a-z]+\s*(=|%3d)",
        ),
        (
            "sql_injection",
            r"(?i)\bunion(\s|\+|%20)+(all(\s|\+|%20)+)?select\b|\bdrop(\s|\+|%20)+table\b|('|%27)(\s|\+|%20)*or(\s|\+|%20)+\d+(\s|\+|%20)*(=|%3d)",
        ),
        ("path_traversal", r"(?i)(\.\.|%2e%2e)(/|\\|%2f|%5c)"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("valid regex")))
    .collect()
});

/// Names of every attack pattern found in `input`.
pub fn detect(input: &str) -> Vec<&'static str> {
    PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(input))
        .map(|(name, _)| *name)
        .collect()
}

/// `axum::middleware::from_fn` layer that warns about suspicious URIs.
pub async fn log_suspicious_input(req: Request, next: Next) -> Response {
    let uri = req.uri();
    let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let hits = detect(target);

    if !hits.is_empty() {
        tracing::warn!(
            method = %req.method(),
            uri = %target,
            patterns = ?hits,
            "Suspicious request input",
        );
    }

    next.run(req).await
}
