//! Import command handler.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::{now, read_file};
use crate::cli::ImportArgs;
use crate::cli::output::{FailedFile, ImportListing, NoteListing, Output, OutputFormat};
use crate::domain::{Note, OwnerId};
use crate::index::{LinkGraph, NoteRepository};

/// Result of an import.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub imported: Vec<Note>,
    /// Paths named on the command line that are not Markdown.
    pub skipped: Vec<PathBuf>,
    /// Files that could not be turned into a note, with the reason.
    pub failed: Vec<(PathBuf, String)>,
    /// Edges in the owner's graph after the final re-sync.
    pub edges: usize,
}

/// Expands `paths` into the Markdown files to import.
///
/// Directories are walked recursively, skipping hidden entries, and their
/// other files are ignored. Explicitly named non-Markdown files come back
/// in the second list.
pub fn markdown_files(paths: &[PathBuf]) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut files = Vec::new();
    let mut skipped = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
                .filter_map(Result::ok)
                .filter(|e| e.file_type().is_file())
                .filter(|e| is_markdown(e.path()))
                .map(DirEntry::into_path)
                .collect();
            found.sort();
            files.extend(found);
        } else if is_markdown(path) {
            files.push(path.clone());
        } else {
            skipped.push(path.clone());
        }
    }

    (files, skipped)
}

/// Creates one note per Markdown file, titled by the file stem.
///
/// Each file's links are synced as it is saved; one owner-wide re-sync at
/// the end resolves links between the imported files. Unreadable files are
/// reported and skipped, but a storage failure aborts the import.
pub fn import_paths<S>(store: &mut S, owner: &OwnerId, paths: &[PathBuf]) -> Result<ImportOutcome>
where
    S: NoteRepository + LinkGraph,
{
    let (files, skipped) = markdown_files(paths);
    for path in &skipped {
        tracing::warn!(path = %path.display(), "skipping non-markdown file");
    }

    let mut outcome = ImportOutcome {
        skipped,
        ..Default::default()
    };

    for path in files {
        let note = match note_from_file(&path, owner) {
            Ok(note) => note,
            Err(err) => {
                let reason = format!("{:#}", err);
                tracing::warn!(path = %path.display(), error = %reason, "failed to import file");
                outcome.failed.push((path, reason));
                continue;
            }
        };

        store
            .save_note(&note)
            .with_context(|| format!("failed to save note from {}", path.display()))?;
        outcome.imported.push(note);
    }

    let reports = store
        .resync_owner(owner)
        .context("failed to re-sync links")?;
    outcome.edges = reports.iter().map(|(_, r)| r.edges_written).sum();

    tracing::info!(
        imported = outcome.imported.len(),
        skipped = outcome.skipped.len(),
        failed = outcome.failed.len(),
        "imported notes"
    );
    Ok(outcome)
}

pub fn handle_import<S>(args: &ImportArgs, store: &mut S, owner: &OwnerId) -> Result<()>
where
    S: NoteRepository + LinkGraph,
{
    let outcome = import_paths(store, owner, &args.paths)?;

    match args.format {
        OutputFormat::Human => {
            println!(
                "Imported {} note(s), {} link(s) in the graph",
                outcome.imported.len(),
                outcome.edges
            );
            for note in &outcome.imported {
                println!("  {}", note);
            }
            if !outcome.skipped.is_empty() {
                println!("Skipped (not Markdown):");
                for path in &outcome.skipped {
                    println!("  {}", path.display());
                }
            }
            if !outcome.failed.is_empty() {
                println!("Failed:");
                for (path, reason) in &outcome.failed {
                    println!("  {}: {}", path.display(), reason);
                }
            }
        }
        OutputFormat::Json => {
            Output::new(ImportListing {
                imported_count: outcome.imported.len(),
                imported: outcome.imported.iter().map(NoteListing::from).collect(),
                skipped: outcome
                    .skipped
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect(),
                failed: outcome
                    .failed
                    .iter()
                    .map(|(path, error)| FailedFile {
                        path: path.display().to_string(),
                        error: error.clone(),
                    })
                    .collect(),
                edges: outcome.edges,
            })
            .print()?;
        }
    }

    Ok(())
}

fn note_from_file(path: &Path, owner: &OwnerId) -> Result<Note> {
    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content = read_file(path)?;
    Note::new(owner.clone(), title, content, now()).context("invalid note")
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"))
}
