//! NoteRepository trait implementation for SqliteIndex.

use super::SqliteIndex;
use super::rows::{NOTE_COLUMNS, parse_note_id, query_notes, to_millis};
use super::sync::{replace_links, resync_dependents};
use crate::domain::{Note, NoteId, OwnerId};
use crate::index::{IndexError, IndexResult, NoteRepository, SyncReport};
use rusqlite::OptionalExtension;

impl NoteRepository for SqliteIndex {
    fn save_note(&mut self, note: &Note) -> IndexResult<SyncReport> {
        let options = self.options;
        let tx = self.transaction()?;
        let id_str = note.id().to_string();

        // An id may only be updated by the owner that created it
        let stored: Option<(String, String)> = tx
            .conn()
            .query_row(
                "SELECT owner_id, slug FROM notes WHERE id = ?1",
                [&id_str],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        if let Some((stored_owner, _)) = &stored
            && stored_owner != note.owner().as_str()
        {
            tx.rollback()?;
            return Err(IndexError::NoteNotFound { id: id_str });
        }
        let slug_changed = stored
            .as_ref()
            .is_some_and(|(_, old_slug)| old_slug != note.slug());

        tx.execute(
            "INSERT INTO notes (id, owner_id, title, slug, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(id) DO UPDATE SET
                 title = excluded.title,
                 slug = excluded.slug,
                 content = excluded.content,
                 updated_at = excluded.updated_at",
            rusqlite::params![
                id_str,
                note.owner().as_str(),
                note.title(),
                note.slug(),
                note.content(),
                to_millis(note.created()),
                to_millis(note.updated()),
            ],
        )?;

        let report = replace_links(
            tx.conn(),
            note.id(),
            Some(note.content()),
            note.owner(),
            &options,
        )?;

        // A new recency or slug can move the tie-break winner other notes link to
        let duplicates: i64 = tx.conn().query_row(
            "SELECT COUNT(*) FROM notes WHERE owner_id = ?1 AND slug = ?2 AND id <> ?3",
            rusqlite::params![note.owner().as_str(), note.slug(), id_str],
            |row| row.get(0),
        )?;
        if slug_changed || duplicates > 0 {
            resync_dependents(tx.conn(), note.id(), note.slug(), note.owner(), &options)?;
        }
        tx.commit()?;

        tracing::debug!(id = %note.id(), slug = note.slug(), "saved note");
        Ok(report)
    }

    fn get_note(&self, id: &NoteId) -> IndexResult<Option<Note>> {
        let sql = format!("SELECT {} FROM notes WHERE id = ?1", NOTE_COLUMNS);
        Ok(query_notes(&self.conn, &sql, [id.to_string()])?.pop())
    }

    fn get_owned_note(&self, owner: &OwnerId, id: &NoteId) -> IndexResult<Option<Note>> {
        let sql = format!(
            "SELECT {} FROM notes WHERE id = ?1 AND owner_id = ?2",
            NOTE_COLUMNS
        );
        Ok(query_notes(
            &self.conn,
            &sql,
            rusqlite::params![id.to_string(), owner.as_str()],
        )?
        .pop())
    }

    fn list_notes(&self, owner: &OwnerId) -> IndexResult<Vec<Note>> {
        let sql = format!(
            "SELECT {} FROM notes WHERE owner_id = ?1 ORDER BY updated_at DESC, id DESC",
            NOTE_COLUMNS
        );
        query_notes(&self.conn, &sql, [owner.as_str()])
    }

    fn find_by_slug(&self, owner: &OwnerId, slug: &str) -> IndexResult<Vec<Note>> {
        let sql = format!(
            "SELECT {} FROM notes
             WHERE owner_id = ?1 AND slug = ?2
             ORDER BY updated_at DESC, id DESC",
            NOTE_COLUMNS
        );
        query_notes(&self.conn, &sql, rusqlite::params![owner.as_str(), slug])
    }

    fn find_by_id_prefix(&self, owner: &OwnerId, prefix: &str) -> IndexResult<Vec<Note>> {
        // ULIDs are Crockford base32, so anything else cannot match and
        // must not reach LIKE as a wildcard
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {} FROM notes
             WHERE owner_id = ?1 AND id LIKE ?2 || '%' COLLATE NOCASE
             ORDER BY id",
            NOTE_COLUMNS
        );
        query_notes(&self.conn, &sql, rusqlite::params![owner.as_str(), prefix])
    }

    fn delete_note(&mut self, owner: &OwnerId, id: &NoteId) -> IndexResult<bool> {
        let options = self.options;
        let tx = self.transaction()?;
        let id_str = id.to_string();

        // Linkers lose their edge by cascade; a same-slug duplicate may still match
        let linkers: Vec<(String, String)> = tx
            .conn()
            .prepare(
                "SELECT s.id, s.content
                 FROM link_edges e
                 JOIN notes s ON s.id = e.source_note_id
                 WHERE e.target_note_id = ?1 AND s.owner_id = ?2 AND s.id <> ?1
                 ORDER BY s.id",
            )?
            .query_map(rusqlite::params![id_str, owner.as_str()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let removed = tx.execute(
            "DELETE FROM notes WHERE id = ?1 AND owner_id = ?2",
            rusqlite::params![id_str, owner.as_str()],
        )?;
        if removed > 0 {
            for (linker, content) in &linkers {
                let linker = parse_note_id(linker)?;
                replace_links(tx.conn(), &linker, Some(content), owner, &options)?;
            }
        }
        tx.commit()?;

        if removed > 0 {
            tracing::debug!(id = %id, "deleted note and its edges");
        }
        Ok(removed > 0)
    }
}
