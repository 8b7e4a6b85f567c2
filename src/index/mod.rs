//! SQLite note store, wiki-link resolution and link graph

mod repository;
mod schema;
mod sqlite;

pub use repository::{
    IndexError, IndexResult, LinkGraph, NoteRepository, Resolution, SyncReport,
};
pub use schema::{SCHEMA_VERSION, create_schema};
pub use sqlite::{SqliteIndex, SyncOptions, Transaction, TxMode};
