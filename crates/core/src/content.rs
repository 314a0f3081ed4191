//! Defaults and limits for news, comments and forum content.

/// Category assigned when a news item or topic is created without one.
pub const DEFAULT_CATEGORY: &str = "Geral";

/// Author assigned when a news item is created without one.
pub const DEFAULT_AUTHOR: &str = "Admin";

/// Search terms shorter than this are rejected.
pub const SEARCH_TERM_MIN: usize = 2;

/// Search terms longer than this are rejected.
pub const SEARCH_TERM_MAX: usize = 100;

/// Number of topics listed under "recent" in forum statistics.
pub const RECENT_TOPICS_LIMIT: i64 = 5;

/// Validate a free-text search term and return it trimmed.
pub fn validate_search_term(term: Option<&str>) -> Result<&str, String> {
    let term = term.map(str::trim).unwrap_or_default();
    if term.is_empty() {
        return Err("Search term 'q' is required".to_string());
    }
    let len = term.chars().count();
    if len < SEARCH_TERM_MIN {
        return Err(format!(
            "Search term must be at least {SEARCH_TERM_MIN} characters"
        ));
    }
    if len > SEARCH_TERM_MAX {
        return Err(format!(
            "Search term must be at most {SEARCH_TERM_MAX} characters"
        ));
    }
    Ok(term)
}

/// Build an `ILIKE` pattern that matches `term` literally anywhere.
pub fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}
