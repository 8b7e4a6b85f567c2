//! New note command handler.

use anyhow::{Context, Result};

use super::{now, print_sync_summary, read_content};
use crate::cli::NewArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat, SavedNote, SyncListing};
use crate::domain::{Note, OwnerId};
use crate::index::{LinkGraph, NoteRepository, SyncReport};

/// Title given to notes created without one.
pub const DEFAULT_TITLE: &str = "Untitled Note";

/// Creates and stores a note, then re-syncs the owner's links.
///
/// Other notes may already contain a dangling `[[link]]` to the new title,
/// so every note of the owner is re-synced after the insert.
///
/// # Errors
///
/// Returns an error if the title is blank or the store fails.
pub fn create_note<S>(
    store: &mut S,
    owner: &OwnerId,
    title: Option<&str>,
    content: Option<String>,
) -> Result<(Note, SyncReport)>
where
    S: NoteRepository + LinkGraph,
{
    let title = title.unwrap_or(DEFAULT_TITLE);
    let note = Note::new(owner.clone(), title, content.unwrap_or_default(), now())
        .context("invalid note")?;

    let report = store.save_note(&note).context("failed to save note")?;
    store
        .resync_owner(owner)
        .context("failed to re-sync links")?;

    tracing::info!(id = %note.id(), slug = note.slug(), "created note");
    Ok((note, report))
}

pub fn handle_new<S>(args: &NewArgs, store: &mut S, owner: &OwnerId) -> Result<()>
where
    S: NoteRepository + LinkGraph,
{
    let content = read_content(&args.source)?;
    let (note, report) = create_note(store, owner, args.title.as_deref(), content)?;

    match args.format {
        OutputFormat::Human => {
            println!("Created: {} [{}]", note.title(), note.id());
            print_sync_summary(&report);
        }
        OutputFormat::Json => {
            Output::new(SavedNote {
                note: NoteListing::from(&note),
                links: SyncListing::from(&report),
            })
            .print()?;
        }
    }

    Ok(())
}
