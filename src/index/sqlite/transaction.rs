//! Scoped SQLite transactions with rollback on drop.

use crate::index::IndexResult;
use rusqlite::{Connection, Params};

/// How a transaction acquires SQLite's locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxMode {
    /// Takes a read snapshot on first read; used by graph queries.
    Deferred,
    /// Takes the write lock up front; used by every write path.
    Immediate,
}

impl TxMode {
    fn begin_sql(self) -> &'static str {
        match self {
            TxMode::Deferred => "BEGIN DEFERRED",
            TxMode::Immediate => "BEGIN IMMEDIATE",
        }
    }
}

/// A database transaction bound to the lifetime of its connection borrow.
///
/// Dropping an uncommitted transaction rolls it back, so an early `?` return
/// in the middle of an edge replacement never leaves a partial set behind.
pub struct Transaction<'a> {
    conn: &'a Connection,
    mode: TxMode,
    finished: bool,
}

impl<'a> Transaction<'a> {
    /// Issues `BEGIN` in the given mode and wraps the connection.
    pub(crate) fn begin(conn: &'a Connection, mode: TxMode) -> IndexResult<Self> {
        conn.execute_batch(mode.begin_sql())?;
        Ok(Self {
            conn,
            mode,
            finished: false,
        })
    }

    /// Returns a reference to the underlying connection.
    pub(crate) fn conn(&self) -> &Connection {
        self.conn
    }

    #[cfg(test)]
    pub(crate) fn mode(&self) -> TxMode {
        self.mode
    }

    /// Executes a SQL statement within the transaction.
    pub fn execute(&self, sql: &str, params: impl Params) -> IndexResult<usize> {
        Ok(self.conn.execute(sql, params)?)
    }

    /// Commits the transaction.
    pub fn commit(mut self) -> IndexResult<()> {
        self.conn.execute_batch("COMMIT")?;
        self.finished = true;
        Ok(())
    }

    /// Rolls back the transaction explicitly.
    pub fn rollback(mut self) -> IndexResult<()> {
        self.conn.execute_batch("ROLLBACK")?;
        self.finished = true;
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!(mode = ?self.mode, "rolling back unfinished transaction");
            // Errors are ignored: there is no caller left to report them to
            let _ = self.conn.execute_batch("ROLLBACK");
        }
    }
}
