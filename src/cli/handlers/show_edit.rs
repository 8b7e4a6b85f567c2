//! Show and Edit command handlers.

use anyhow::{Context, Result, bail};

use super::links::print_targets;
use super::resolve::require_note;
use super::{now, print_sync_summary, read_content, unresolved_links};
use crate::cli::output::{NoteListing, NoteView, Output, OutputFormat, SavedNote, SyncListing};
use crate::cli::{EditArgs, ShowArgs};
use crate::domain::{Note, OwnerId};
use crate::index::{LinkGraph, NoteRepository, SyncReport};

pub fn handle_show<S>(args: &ShowArgs, store: &S, owner: &OwnerId) -> Result<()>
where
    S: NoteRepository + LinkGraph,
{
    let note = require_note(store, owner, &args.note)?;
    let related = store
        .neighborhood(note.id())
        .context("failed to load related notes")?;
    let unresolved = unresolved_links(store, owner, note.content())
        .context("failed to check links")?;

    match args.format {
        OutputFormat::Human => {
            println!("# {}", note.title());
            println!();
            println!(
                "ID: {}  Created: {}  Updated: {}",
                note.id().prefix(),
                note.created().format("%Y-%m-%d"),
                note.updated().format("%Y-%m-%d")
            );
            println!("Slug: {}", note.slug());
            println!();

            if !note.content().is_empty() {
                println!("{}", note.content());
                println!();
            }

            if related.is_empty() && unresolved.is_empty() {
                println!("No related notes.");
            } else {
                print_targets("Links", &related.one_hop_links);
                print_targets("Backlinks", &related.backlinks);
                print_targets("Two hops away", &related.two_hop_links);
                if !unresolved.is_empty() {
                    println!("Unresolved:");
                    for text in &unresolved {
                        println!("  [[{}]]", text);
                    }
                }
            }
        }
        OutputFormat::Json => {
            Output::new(NoteView {
                note: &note,
                related: &related,
                unresolved: &unresolved,
            })
            .print()?;
        }
    }

    Ok(())
}

/// Result of an edit.
#[derive(Debug)]
pub struct EditOutcome {
    pub note: Note,
    pub report: SyncReport,
    /// The slug changed, so other notes were re-synced.
    pub renamed: bool,
}

/// Applies a title and/or content change to a note and stores it.
///
/// A title change that alters the slug can change what other notes'
/// links resolve to, so the owner's notes are re-synced in that case.
pub fn edit_note<S>(
    store: &mut S,
    owner: &OwnerId,
    identifier: &str,
    title: Option<&str>,
    content: Option<String>,
) -> Result<EditOutcome>
where
    S: NoteRepository + LinkGraph,
{
    if title.is_none() && content.is_none() {
        bail!("nothing to change: pass --title, --content or --file");
    }

    let mut note = require_note(store, owner, identifier)?;
    let old_slug = note.slug().to_string();

    note.edit(title, content.as_deref(), now())
        .context("invalid note")?;
    let report = store.save_note(&note).context("failed to save note")?;

    let renamed = note.slug() != old_slug;
    if renamed {
        store
            .resync_owner(owner)
            .context("failed to re-sync links")?;
    }

    tracing::info!(id = %note.id(), renamed, "edited note");
    Ok(EditOutcome {
        note,
        report,
        renamed,
    })
}

pub fn handle_edit<S>(args: &EditArgs, store: &mut S, owner: &OwnerId) -> Result<()>
where
    S: NoteRepository + LinkGraph,
{
    let content = read_content(&args.source)?;
    let outcome = edit_note(store, owner, &args.note, args.title.as_deref(), content)?;

    match args.format {
        OutputFormat::Human => {
            println!("Updated: {}", outcome.note);
            print_sync_summary(&outcome.report);
            if outcome.renamed {
                println!("  slug is now '{}'", outcome.note.slug());
            }
        }
        OutputFormat::Json => {
            Output::new(SavedNote {
                note: NoteListing::from(&outcome.note),
                links: SyncListing::from(&outcome.report),
            })
            .print()?;
        }
    }

    Ok(())
}
