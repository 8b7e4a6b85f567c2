//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{LinkTarget, Neighborhood, Note};
use crate::index::SyncReport;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Prints the wrapped value as pretty JSON on stdout.
    pub fn print(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub updated: String,
}

impl From<&Note> for NoteListing {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id().to_string(),
            title: note.title().to_string(),
            slug: note.slug().to_string(),
            updated: note.updated().to_rfc3339(),
        }
    }
}

/// Link sync counts as shown to users.
#[derive(Debug, Serialize)]
pub struct SyncListing {
    pub links_found: usize,
    pub resolved: usize,
    pub unresolved: Vec<String>,
    pub edges_written: usize,
}

impl From<&SyncReport> for SyncListing {
    fn from(report: &SyncReport) -> Self {
        Self {
            links_found: report.links_found,
            resolved: report.resolved,
            unresolved: report.unresolved.clone(),
            edges_written: report.edges_written,
        }
    }
}

/// Result of a write command (`new`, `edit`).
#[derive(Debug, Serialize)]
pub struct SavedNote {
    #[serde(flatten)]
    pub note: NoteListing,
    pub links: SyncListing,
}

/// Result of `show`: the note plus its related-notes panel.
#[derive(Debug, Serialize)]
pub struct NoteView<'a> {
    pub note: &'a Note,
    pub related: &'a Neighborhood,
    pub unresolved: &'a [String],
}

/// Result of `resolve`.
#[derive(Debug, Serialize)]
pub struct ResolveListing {
    pub text: String,
    pub slug: String,
    pub target: Option<LinkTarget>,
}

/// Result of `reindex`.
#[derive(Debug, Serialize)]
pub struct ReindexListing {
    pub notes: usize,
    pub edges: usize,
    pub unresolved: usize,
}

/// Result of `import`.
#[derive(Debug, Serialize)]
pub struct ImportListing {
    pub imported_count: usize,
    pub imported: Vec<NoteListing>,
    pub skipped: Vec<String>,
    pub failed: Vec<FailedFile>,
    pub edges: usize,
}

/// A file that could not be imported.
#[derive(Debug, Serialize)]
pub struct FailedFile {
    pub path: String,
    pub error: String,
}
