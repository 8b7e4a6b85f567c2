//! Conversions between SQLite rows and domain types.

use crate::domain::{LinkTarget, Note, NoteId, OwnerId};
use crate::index::{IndexError, IndexResult};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Params, Row};

/// Column list matching [`NoteRow::from_row`].
pub(crate) const NOTE_COLUMNS: &str = "id, owner_id, title, slug, content, created_at, updated_at";

pub(crate) fn to_millis(dt: DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}

pub(crate) fn from_millis(ms: i64) -> IndexResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| IndexError::Corrupt(format!("timestamp out of range: {}", ms)))
}

pub(crate) fn parse_note_id(s: &str) -> IndexResult<NoteId> {
    s.parse()
        .map_err(|e| IndexError::Corrupt(format!("invalid note ID in database: {}", e)))
}

/// Raw column values of a `notes` row.
pub(crate) struct NoteRow {
    id: String,
    owner: String,
    title: String,
    slug: String,
    content: String,
    created_at: i64,
    updated_at: i64,
}

impl NoteRow {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            owner: row.get(1)?,
            title: row.get(2)?,
            slug: row.get(3)?,
            content: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }

    pub(crate) fn into_note(self) -> IndexResult<Note> {
        let owner = OwnerId::new(&self.owner)
            .map_err(|e| IndexError::Corrupt(format!("invalid owner for {}: {}", self.id, e)))?;
        Ok(Note::from_stored(
            parse_note_id(&self.id)?,
            owner,
            self.title,
            self.slug,
            self.content,
            from_millis(self.created_at)?,
            from_millis(self.updated_at)?,
        ))
    }
}

/// Runs a query selecting [`NOTE_COLUMNS`] and decodes every row.
pub(crate) fn query_notes<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> IndexResult<Vec<Note>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, NoteRow::from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    rows.into_iter().map(NoteRow::into_note).collect()
}

/// Runs a query selecting `id, title, slug` and decodes every row.
pub(crate) fn query_targets<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> IndexResult<Vec<LinkTarget>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id, title, slug)| Ok(LinkTarget::new(parse_note_id(&id)?, title, slug)))
        .collect()
}
