//! Repository traits for notes and the link graph, plus their result types.

use crate::domain::{LinkEdge, LinkTarget, Neighborhood, Note, NoteId, OwnerId};
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// IndexError Type
// ===========================================

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The requested note does not exist (for the given owner).
    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored value could not be decoded.
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type IndexResult<T> = Result<T, IndexError>;

// ===========================================
// Resolution
// ===========================================

/// Outcome of resolving a wiki-link's text to a note.
///
/// `NotFound` is an ordinary outcome: the target may simply not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The link text matched a note of the owner.
    Resolved(LinkTarget),
    /// No note of the owner has the link text's slug.
    NotFound,
}

impl Resolution {
    /// Returns the resolved target, if any.
    pub fn target(&self) -> Option<&LinkTarget> {
        match self {
            Resolution::Resolved(target) => Some(target),
            Resolution::NotFound => None,
        }
    }

    pub fn into_target(self) -> Option<LinkTarget> {
        match self {
            Resolution::Resolved(target) => Some(target),
            Resolution::NotFound => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

// ===========================================
// SyncReport
// ===========================================

/// Summary of one link synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Number of wiki-links found in the content, duplicates included.
    pub links_found: usize,
    /// Number of those links that resolved to a note.
    pub resolved: usize,
    /// Raw texts of links that did not resolve, in document order.
    pub unresolved: Vec<String>,
    /// Number of edges now stored for the source note.
    pub edges_written: usize,
}

// ===========================================
// NoteRepository Trait
// ===========================================

/// Storage for notes.
///
/// Saving a note also brings its outgoing link edges in line with its
/// content, in the same transaction.
pub trait NoteRepository {
    /// Inserts or updates a note and re-syncs its outgoing links.
    ///
    /// When the save can move what other notes' links resolve to (a slug
    /// change, or a slug shared with duplicates), the notes linking into that
    /// slug are re-synced too. Links that were dangling are not revisited;
    /// use [`LinkGraph::resync_owner`] for those.
    ///
    /// Updating a note that exists under a different owner fails with
    /// `NoteNotFound`.
    fn save_note(&mut self, note: &Note) -> IndexResult<SyncReport>;

    /// Retrieves a note by ID regardless of owner.
    fn get_note(&self, id: &NoteId) -> IndexResult<Option<Note>>;

    /// Retrieves a note by ID only if it belongs to `owner`.
    fn get_owned_note(&self, owner: &OwnerId, id: &NoteId) -> IndexResult<Option<Note>>;

    /// Lists the owner's notes, most recently updated first.
    fn list_notes(&self, owner: &OwnerId) -> IndexResult<Vec<Note>>;

    /// Finds the owner's notes with exactly this slug, most recently updated first.
    fn find_by_slug(&self, owner: &OwnerId, slug: &str) -> IndexResult<Vec<Note>>;

    /// Finds the owner's notes whose ID starts with `prefix` (case-insensitive).
    ///
    /// An empty prefix returns an empty result.
    fn find_by_id_prefix(&self, owner: &OwnerId, prefix: &str) -> IndexResult<Vec<Note>>;

    /// Deletes a note and every edge touching it.
    ///
    /// Notes that linked to it are re-synced, so a same-slug duplicate
    /// takes over their links.
    ///
    /// Returns `true` if a note was removed.
    fn delete_note(&mut self, owner: &OwnerId, id: &NoteId) -> IndexResult<bool>;
}

// ===========================================
// LinkGraph Trait
// ===========================================

/// Wiki-link resolution, edge maintenance, and graph queries.
pub trait LinkGraph {
    /// Resolves raw wiki-link text to one of the owner's notes.
    ///
    /// When several notes share the slug, the most recently updated wins.
    fn resolve(&self, raw_link_text: &str, owner: &OwnerId) -> IndexResult<Resolution>;

    /// Replaces the outgoing edges of `source` with the links in `content`.
    ///
    /// Runs atomically. Unresolved links produce no edge and are reported,
    /// not raised.
    fn sync_links(
        &mut self,
        source: &NoteId,
        content: Option<&str>,
        owner: &OwnerId,
    ) -> IndexResult<SyncReport>;

    /// Returns the one-hop, backlink and two-hop neighborhood of a note.
    fn neighborhood(&self, note_id: &NoteId) -> IndexResult<Neighborhood>;

    /// Returns the stored outgoing edges of a note.
    fn outgoing_edges(&self, source: &NoteId) -> IndexResult<Vec<LinkEdge>>;

    /// Re-syncs every note of the owner against the current set of titles.
    ///
    /// Needed after a rename, since other notes' links may now resolve
    /// differently.
    fn resync_owner(&mut self, owner: &OwnerId) -> IndexResult<Vec<(NoteId, SyncReport)>>;
}
