//! SQLite-backed note store and link graph.

mod connection;
mod graph;
mod repo_impl;
mod resolve;
mod rows;
mod sync;
mod transaction;


use rusqlite::Connection;
use std::time::Duration;

// Re-export the Transaction type
pub use transaction::{Transaction, TxMode};

// ===========================================
// SyncOptions
// ===========================================

/// Behavior switches for link synchronization and connection setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Drop edges from a note to itself instead of storing them.
    pub exclude_self_links: bool,
    /// How long a writer waits for another connection's write lock.
    pub busy_timeout: Duration,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            exclude_self_links: false,
            busy_timeout: Duration::from_millis(5000),
        }
    }
}

// ===========================================
// SqliteIndex Struct
// ===========================================

/// SQLite-backed note store.
///
/// Owns the database connection. Writes take `&mut self` and run in a
/// `BEGIN IMMEDIATE` transaction, so two handles on the same file never
/// interleave a link replacement.
pub struct SqliteIndex {
    pub(crate) conn: Connection,
    pub(crate) options: SyncOptions,
}
