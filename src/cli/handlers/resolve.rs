//! Note identifier resolution.

use anyhow::{Context, Result, bail};

use crate::domain::{Note, NoteId, OwnerId};
use crate::index::{LinkGraph, NoteRepository, Resolution};

/// Result of resolving a note identifier.
#[derive(Debug)]
pub enum ResolveResult {
    /// Exactly one note matched.
    Unique(Note),
    /// Multiple notes share the ID prefix.
    Ambiguous(Vec<Note>),
    /// No notes matched.
    NotFound,
}

/// Prints the candidates of an ambiguous prefix to help distinguish them.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!("  {} - {}", note.id(), note.title());
    }
    eprintln!();
    eprintln!("Use a longer ID prefix to specify which note you mean.");
}

/// Resolves a note identifier to one of the owner's notes.
///
/// Resolution order:
/// 1. Full note ID
/// 2. ID prefix (if input looks like one)
/// 3. Title, with the same rules as `[[wiki links]]`
///
/// A title never comes back ambiguous: among notes sharing a title the
/// most recently updated one is chosen, exactly as a link would.
pub fn resolve_note<S>(store: &S, owner: &OwnerId, identifier: &str) -> Result<ResolveResult>
where
    S: NoteRepository + LinkGraph,
{
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Ok(ResolveResult::NotFound);
    }

    // 1. Full ID
    if let Ok(id) = identifier.parse::<NoteId>()
        && let Some(note) = store
            .get_owned_note(owner, &id)
            .context("failed to look up note by ID")?
    {
        return Ok(ResolveResult::Unique(note));
    }

    // 2. ID prefix
    let looks_like_id =
        identifier.len() >= 4 && identifier.chars().all(|c| c.is_ascii_alphanumeric());
    if looks_like_id {
        let mut matches = store
            .find_by_id_prefix(owner, identifier)
            .context("failed to search by ID prefix")?;
        match matches.len() {
            0 => {}
            1 => {
                if let Some(note) = matches.pop() {
                    return Ok(ResolveResult::Unique(note));
                }
            }
            _ => return Ok(ResolveResult::Ambiguous(matches)),
        }
    }

    // 3. Title
    match store
        .resolve(identifier, owner)
        .context("failed to resolve title")?
    {
        Resolution::Resolved(target) => Ok(store
            .get_owned_note(owner, &target.id)
            .context("failed to load resolved note")?
            .map_or(ResolveResult::NotFound, ResolveResult::Unique)),
        Resolution::NotFound => Ok(ResolveResult::NotFound),
    }
}

/// Resolves an identifier or fails with a user-facing error.
pub fn require_note<S>(store: &S, owner: &OwnerId, identifier: &str) -> Result<Note>
where
    S: NoteRepository + LinkGraph,
{
    match resolve_note(store, owner, identifier)? {
        ResolveResult::Unique(note) => Ok(note),
        ResolveResult::Ambiguous(notes) => {
            print_ambiguous_notes(identifier, &notes);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => bail!("note not found: '{}'", identifier),
    }
}
