//! SQLite schema creation for the note store and link graph.

use rusqlite::Connection;

/// Current schema version recorded in `schema_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// Creates the database schema.
///
/// This function creates all required tables, indexes, and constraints.
/// It is idempotent - calling it multiple times is safe.
///
/// # Tables Created
/// - `notes` - Owner-scoped notes with title, slug and content
/// - `link_edges` - Resolved wiki-links between notes
/// - `schema_version` - Schema version tracking
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    // ===========================================
    // Notes Table
    // ===========================================
    // Slugs repeat when titles repeat, so (owner_id, slug) is indexed but not unique.
    // Timestamps are milliseconds since the Unix epoch.
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id TEXT PRIMARY KEY,
            owner_id TEXT NOT NULL,
            title TEXT NOT NULL,
            slug TEXT NOT NULL,
            content TEXT NOT NULL DEFAULT '',
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );",
    )?;

    // ===========================================
    // Link Edges Table
    // ===========================================
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS link_edges (
            id TEXT PRIMARY KEY,
            source_note_id TEXT NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
            target_note_id TEXT NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
            created_at INTEGER NOT NULL,
            UNIQUE(source_note_id, target_note_id)
        );",
    )?;

    // ===========================================
    // Indexes
    // ===========================================
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_notes_owner_slug ON notes(owner_id, slug, updated_at);
         CREATE INDEX IF NOT EXISTS idx_notes_owner_updated ON notes(owner_id, updated_at);
         CREATE INDEX IF NOT EXISTS idx_link_edges_target ON link_edges(target_note_id);",
    )?;

    // ===========================================
    // Schema Version Table
    // ===========================================
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [SCHEMA_VERSION],
    )?;

    Ok(())
}
