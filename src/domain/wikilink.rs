//! Extraction of `[[Wiki Link]]` references from note content.

use regex::Regex;
use std::sync::LazyLock;

// Inner text is non-greedy and stops at a line break, so a link never spans lines.
static WIKI_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(.*?)\]\]").expect("wiki-link pattern is valid"));

/// Returns the raw inner text of every wiki-link in `content`.
///
/// Matches are non-overlapping and returned in document order. Duplicates
/// are kept and the text is not trimmed or normalized. Absent content is
/// treated as empty.
///
/// # Examples
///
/// ```
/// use wikiden::domain::extract;
///
/// assert_eq!(extract(Some("Link to [[Target]] and [[Other]]")), vec!["Target", "Other"]);
/// assert_eq!(extract(Some("[[A]][[B]]")), vec!["A", "B"]);
/// assert!(extract(None).is_empty());
/// ```
pub fn extract(content: Option<&str>) -> Vec<String> {
    match content {
        Some(text) => extract_str(text),
        None => Vec::new(),
    }
}

/// Same as [`extract`] for content that is known to be present.
pub fn extract_str(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    WIKI_LINK
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
