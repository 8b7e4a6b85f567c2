//! Full replacement of a note's outgoing link edges.

use super::SyncOptions;
use super::resolve::resolve_on;
use super::rows::{parse_note_id, to_millis};
use crate::domain::{LinkId, NoteId, OwnerId, extract};
use crate::index::{IndexError, IndexResult, Resolution, SyncReport};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use std::collections::{HashMap, HashSet};

/// Fails with `NoteNotFound` unless `source` exists and belongs to `owner`.
pub(crate) fn ensure_owned(conn: &Connection, source: &NoteId, owner: &OwnerId) -> IndexResult<()> {
    let exists = conn
        .query_row(
            "SELECT 1 FROM notes WHERE id = ?1 AND owner_id = ?2",
            rusqlite::params![source.to_string(), owner.as_str()],
            |_| Ok(()),
        )
        .optional()?;

    match exists {
        Some(()) => Ok(()),
        None => Err(IndexError::NoteNotFound {
            id: source.to_string(),
        }),
    }
}

/// Replaces every outgoing edge of `source` with the resolved links in `content`.
///
/// Must run inside a write transaction; on error the caller's transaction is
/// dropped and nothing is applied.
pub(crate) fn replace_links(
    conn: &Connection,
    source: &NoteId,
    content: Option<&str>,
    owner: &OwnerId,
    options: &SyncOptions,
) -> IndexResult<SyncReport> {
    let raw_links = extract(content);

    let mut report = SyncReport {
        links_found: raw_links.len(),
        ..Default::default()
    };

    // Identical link texts resolve identically within one sync
    let mut cache: HashMap<&str, Option<NoteId>> = HashMap::new();
    let mut seen: HashSet<NoteId> = HashSet::new();
    let mut targets: Vec<NoteId> = Vec::new();

    for raw in &raw_links {
        let resolved = match cache.get(raw.as_str()) {
            Some(hit) => hit.clone(),
            None => {
                let id = match resolve_on(conn, raw, owner)? {
                    Resolution::Resolved(target) => Some(target.id),
                    Resolution::NotFound => None,
                };
                cache.insert(raw.as_str(), id.clone());
                id
            }
        };

        let Some(target) = resolved else {
            report.unresolved.push(raw.clone());
            continue;
        };
        report.resolved += 1;

        if options.exclude_self_links && &target == source {
            continue;
        }
        if seen.insert(target.clone()) {
            targets.push(target);
        }
    }

    let source_str = source.to_string();
    conn.execute(
        "DELETE FROM link_edges WHERE source_note_id = ?1",
        [&source_str],
    )?;

    let now = to_millis(Utc::now());
    let mut insert = conn.prepare(
        "INSERT INTO link_edges (id, source_note_id, target_note_id, created_at)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    for target in &targets {
        insert.execute(rusqlite::params![
            LinkId::new().to_string(),
            source_str,
            target.to_string(),
            now,
        ])?;
    }
    report.edges_written = targets.len();

    tracing::debug!(
        source = %source,
        links = report.links_found,
        edges = report.edges_written,
        unresolved = report.unresolved.len(),
        "synced wiki-links"
    );

    Ok(report)
}

/// Re-syncs the notes whose edges may now resolve differently after `note`
/// was saved: every linker of `note` itself or of a same-slug duplicate.
///
/// Returns the number of notes re-synced. Must run inside a write transaction.
pub(crate) fn resync_dependents(
    conn: &Connection,
    note: &NoteId,
    slug: &str,
    owner: &OwnerId,
    options: &SyncOptions,
) -> IndexResult<usize> {
    let note_str = note.to_string();
    let dependents: Vec<(String, String)> = conn
        .prepare(
            "SELECT DISTINCT s.id, s.content
             FROM link_edges e
             JOIN notes s ON s.id = e.source_note_id
             JOIN notes t ON t.id = e.target_note_id
             WHERE s.owner_id = ?1
               AND (t.id = ?2 OR (t.slug = ?3 AND t.owner_id = ?1))
               AND s.id <> ?2
             ORDER BY s.id",
        )?
        .query_map(rusqlite::params![owner.as_str(), note_str, slug], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    for (id_str, content) in &dependents {
        let id = parse_note_id(id_str)?;
        replace_links(conn, &id, Some(content), owner, options)?;
    }

    if !dependents.is_empty() {
        tracing::debug!(
            note = %note,
            slug,
            count = dependents.len(),
            "re-synced dependent notes"
        );
    }
    Ok(dependents.len())
}
