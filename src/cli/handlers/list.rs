//! List command handler.

use anyhow::{Context, Result};

use super::truncate_str;
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::OwnerId;
use crate::index::NoteRepository;

pub fn handle_list<R: NoteRepository>(args: &ListArgs, store: &R, owner: &OwnerId) -> Result<()> {
    let notes = store
        .list_notes(owner)
        .with_context(|| format!("failed to list notes of {}", owner))?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
            } else {
                println!("{:<10}  {:<50}  {:>10}", "ID", "Title", "Updated");
                println!(
                    "{:<10}  {:<50}  {:>10}",
                    "----------",
                    "--------------------------------------------------",
                    "----------"
                );

                for note in &notes {
                    let id_short = note.id().prefix();
                    let title = truncate_str(note.title(), 50);
                    let updated = note.updated().format("%Y-%m-%d").to_string();
                    println!("{:<10}  {:<50}  {:>10}", id_short, title, updated);
                }

                println!();
                println!("{} note(s)", notes.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            Output::new(listings).print()?;
        }
    }

    Ok(())
}
