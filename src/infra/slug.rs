//! Slug normalization for note titles and wiki-link text.

use unicode_normalization::UnicodeNormalization;

use crate::domain::NoteId;

/// Prefix of the slug stored for notes whose title normalizes to nothing.
pub const PLACEHOLDER_PREFIX: &str = "note-";

/// Normalizes a title (or wiki-link text) to its canonical slug.
///
/// - Folds full-width forms to half-width (NFKC)
/// - Lowercases ASCII letters
/// - Drops everything except ASCII letters, digits, whitespace and hyphens
/// - Turns whitespace runs into a single hyphen
/// - Collapses consecutive hyphens
/// - Trims leading/trailing hyphens
///
/// The result may be empty, e.g. for an all-Japanese title.
///
/// # Examples
///
/// ```
/// use wikiden::infra::normalize;
///
/// assert_eq!(normalize("Hello World"), "hello-world");
/// assert_eq!(normalize("ＡＢＣ１２３"), "abc123");
/// assert_eq!(normalize("日本語のタイトル"), "");
/// ```
pub fn normalize(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.nfkc() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else if c == '-' || c.is_ascii_whitespace() {
            pending_hyphen = true;
        }
        // Anything else is stripped without leaving a separator behind
    }

    slug
}

/// Returns the slug to store for a note, applying the empty-slug policy.
///
/// When `title` normalizes to the empty string the slug becomes
/// `note-<lowercased id>`, which is unique per note.
///
/// ```
/// use wikiden::domain::NoteId;
/// use wikiden::infra::slug_or_placeholder;
///
/// let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
/// assert_eq!(slug_or_placeholder("API Design", &id), "api-design");
/// assert_eq!(slug_or_placeholder("メモ", &id), "note-01hq3k5m7nxjk4qzpw8v2r6t9y");
/// ```
pub fn slug_or_placeholder(title: &str, id: &NoteId) -> String {
    let slug = normalize(title);
    if slug.is_empty() {
        format!("{}{}", PLACEHOLDER_PREFIX, id.to_string().to_ascii_lowercase())
    } else {
        slug
    }
}
