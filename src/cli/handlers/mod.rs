//! Command handlers for the CLI.

mod import;
mod index;
mod links;
mod list;
mod new;
mod resolve;
mod rm;
mod show_edit;


use anyhow::{Context, Result};
use chrono::{DateTime, SubsecRound, Utc};
use std::io::Read;
use std::path::Path;

use crate::cli::ContentSource;
use crate::domain::{OwnerId, extract};
use crate::index::{IndexResult, LinkGraph, SyncReport};

// Re-export public items
pub use import::{ImportOutcome, handle_import, import_paths, markdown_files};
pub use index::{handle_reindex, reindex};
pub use links::{handle_links, handle_resolve};
pub use list::handle_list;
pub use new::{DEFAULT_TITLE, create_note, handle_new};
pub use resolve::{ResolveResult, require_note, resolve_note};
pub use rm::{handle_rm, remove_note};
pub use show_edit::{EditOutcome, edit_note, handle_edit, handle_show};

// ===========================================
// Shared Utilities
// ===========================================

/// Current time at the precision the store keeps.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Reads the note body named by `--content` or `--file`.
///
/// Returns `None` when neither was given.
pub(crate) fn read_content(source: &ContentSource) -> Result<Option<String>> {
    if let Some(content) = &source.content {
        return Ok(Some(content.clone()));
    }
    let Some(path) = &source.file else {
        return Ok(None);
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read note body from stdin")?;
        return Ok(Some(buf));
    }

    read_file(path).map(Some)
}

/// Reads a note body from a file on disk.
pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read note body from {}", path.display()))
}

/// Link texts in `content` that do not resolve, first occurrence only.
pub(crate) fn unresolved_links<G: LinkGraph>(
    graph: &G,
    owner: &OwnerId,
    content: &str,
) -> IndexResult<Vec<String>> {
    let mut unresolved: Vec<String> = Vec::new();
    for raw in extract(Some(content)) {
        if unresolved.contains(&raw) {
            continue;
        }
        if !graph.resolve(&raw, owner)?.is_resolved() {
            unresolved.push(raw);
        }
    }
    Ok(unresolved)
}

/// Prints the link counts of a save, if the note has any links.
pub(crate) fn print_sync_summary(report: &SyncReport) {
    if report.links_found == 0 {
        return;
    }
    println!(
        "  {} of {} link(s) resolved",
        report.resolved, report.links_found
    );
    if !report.unresolved.is_empty() {
        let texts: Vec<String> = report
            .unresolved
            .iter()
            .map(|t| format!("[[{}]]", t))
            .collect();
        println!("  unresolved: {}", texts.join(", "));
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
