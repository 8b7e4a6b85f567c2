//! Wiki-link text to note resolution.

use super::rows::query_targets;
use crate::domain::OwnerId;
use crate::index::{IndexResult, Resolution};
use crate::infra::normalize;
use rusqlite::Connection;

/// Resolves `raw_link_text` against the owner's notes on `conn`.
///
/// The text is normalized with the same rules as titles and matched by
/// exact slug equality. Duplicate titles are normal: the note with the
/// latest `updated_at` wins, and among equal timestamps the greatest
/// (most recently minted) id. Text that normalizes to nothing never
/// resolves.
pub(crate) fn resolve_on(
    conn: &Connection,
    raw_link_text: &str,
    owner: &OwnerId,
) -> IndexResult<Resolution> {
    let candidate = normalize(raw_link_text);
    if candidate.is_empty() {
        tracing::trace!(link = raw_link_text, "link text normalizes to empty slug");
        return Ok(Resolution::NotFound);
    }

    let mut found = query_targets(
        conn,
        "SELECT id, title, slug FROM notes
         WHERE owner_id = ?1 AND slug = ?2
         ORDER BY updated_at DESC, id DESC
         LIMIT 1",
        rusqlite::params![owner.as_str(), candidate],
    )?;

    match found.pop() {
        Some(target) => {
            tracing::trace!(
                link = raw_link_text,
                slug = %candidate,
                target = %target.id,
                "resolved"
            );
            Ok(Resolution::Resolved(target))
        }
        None => {
            tracing::trace!(link = raw_link_text, slug = %candidate, "unresolved");
            Ok(Resolution::NotFound)
        }
    }
}
