//! Remove command handler.

use anyhow::{Context, Result};
use serde::Serialize;

use super::resolve::require_note;
use crate::cli::RmArgs;
use crate::cli::output::{Output, OutputFormat};
use crate::domain::{Note, OwnerId};
use crate::index::{LinkGraph, NoteRepository};

#[derive(Debug, Serialize)]
struct Removed<'a> {
    id: String,
    title: &'a str,
}

/// Deletes a note; its link edges go with it.
///
/// Links elsewhere that pointed at it may now resolve to a note with the
/// same title, so the owner's notes are re-synced afterwards.
pub fn remove_note<S>(store: &mut S, owner: &OwnerId, identifier: &str) -> Result<Note>
where
    S: NoteRepository + LinkGraph,
{
    let note = require_note(store, owner, identifier)?;
    store
        .delete_note(owner, note.id())
        .context("failed to delete note")?;

    tracing::info!(id = %note.id(), "removed note");
    Ok(note)
}

pub fn handle_rm<S>(args: &RmArgs, store: &mut S, owner: &OwnerId) -> Result<()>
where
    S: NoteRepository + LinkGraph,
{
    let note = remove_note(store, owner, &args.note)?;

    match args.format {
        OutputFormat::Human => println!("Deleted: {}", note),
        OutputFormat::Json => {
            Output::new(Removed {
                id: note.id().to_string(),
                title: note.title(),
            })
            .print()?;
        }
    }

    Ok(())
}
