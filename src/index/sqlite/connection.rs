//! Connection management for SqliteIndex.

use super::transaction::{Transaction, TxMode};
use super::{SqliteIndex, SyncOptions};
use crate::index::{IndexError, IndexResult, create_schema};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

impl SqliteIndex {
    // ===========================================
    // In-Memory Connection
    // ===========================================

    /// Opens an in-memory SQLite database with the schema.
    ///
    /// This is useful for testing and temporary stores that don't need persistence.
    pub fn open_in_memory() -> IndexResult<Self> {
        Self::open_in_memory_with(SyncOptions::default())
    }

    /// Opens an in-memory database with explicit options.
    pub fn open_in_memory_with(options: SyncOptions) -> IndexResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn, options)
    }

    // ===========================================
    // File-Based Connection
    // ===========================================

    /// Opens or creates a SQLite database at the given path.
    ///
    /// Creates parent directories if they don't exist. Initializes the schema
    /// if this is a new database.
    pub fn open(path: &Path) -> IndexResult<Self> {
        Self::open_with(path, SyncOptions::default())
    }

    /// Opens or creates a database file with explicit options.
    pub fn open_with(path: &Path, options: SyncOptions) -> IndexResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| IndexError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path)?;
        Self::init(conn, options)
    }

    fn init(conn: Connection, options: SyncOptions) -> IndexResult<Self> {
        conn.busy_timeout(options.busy_timeout)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        create_schema(&conn)?;
        Ok(Self { conn, options })
    }

    // ===========================================
    // Accessors
    // ===========================================

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Returns the options this store was opened with.
    pub fn options(&self) -> SyncOptions {
        self.options
    }

    // ===========================================
    // Transaction Support
    // ===========================================

    /// Begins a write transaction.
    ///
    /// `BEGIN IMMEDIATE` takes the database write lock before any statement
    /// runs. The transaction rolls back on drop unless `commit()` is called.
    pub fn transaction(&mut self) -> IndexResult<Transaction<'_>> {
        Transaction::begin(&self.conn, TxMode::Immediate)
    }

    /// Begins a read transaction so several queries see one snapshot.
    pub(crate) fn read_transaction(&self) -> IndexResult<Transaction<'_>> {
        Transaction::begin(&self.conn, TxMode::Deferred)
    }
}
