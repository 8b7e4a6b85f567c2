//! Core types: Note, NoteId (ULID), OwnerId, link edges, wiki-link extraction

mod link;
mod note;
mod note_id;
mod owner;
mod wikilink;

pub use link::{LinkEdge, LinkId, LinkTarget, Neighborhood};
pub use note::{Note, NoteBuilder, ParseNoteError};
pub use note_id::{NoteId, ParseNoteIdError};
pub use owner::{OwnerId, ParseOwnerIdError};
pub use wikilink::{extract, extract_str};
