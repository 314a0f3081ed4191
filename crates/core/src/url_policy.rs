//! Allow-list for URLs that end up in `href` or `src` attributes.
//!
//! Stored content is kept exactly as submitted. HTML entity encoding is left
//! to the renderer; this module only decides which URLs may be emitted at all.

/// Placeholder emitted in place of a URL that fails the allow-list.
pub const BLOCKED_URL: &str = "#";

/// URL schemes permitted in rendered links and images.
pub const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https"];

/// Check a URL against the allow-list.
///
/// Accepted: absolute `http`/`https` URLs and site-relative paths starting
/// with a single `/`. Protocol-relative (`//host`) and every other scheme
/// (`javascript:`, `data:` ...) are rejected.
pub fn is_allowed_url(url: &str) -> bool {
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_control) {
        return false;
    }
    if trimmed.starts_with('/') {
        return !trimmed.starts_with("//") && !trimmed.starts_with("/\\");
    }
    match trimmed.split_once(':') {
        Some((scheme, rest)) => {
            ALLOWED_URL_SCHEMES
                .iter()
                .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
                && rest.starts_with("//")
        }
        None => false,
    }
}

/// The trimmed URL if it passes [`is_allowed_url`], else [`BLOCKED_URL`].
pub fn sanitize_url(url: &str) -> &str {
    if is_allowed_url(url) {
        url.trim()
    } else {
        BLOCKED_URL
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
