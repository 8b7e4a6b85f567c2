//! Link-related command handlers (resolve, links).

use anyhow::{Context, Result};

use super::resolve::require_note;
use crate::cli::output::{Output, OutputFormat, ResolveListing};
use crate::cli::{LinksArgs, ResolveArgs};
use crate::domain::{LinkTarget, OwnerId};
use crate::index::{LinkGraph, NoteRepository, Resolution};
use crate::infra::normalize;

/// Prints one section of a neighborhood.
pub(crate) fn print_targets(heading: &str, targets: &[LinkTarget]) {
    println!("{}:", heading);
    if targets.is_empty() {
        println!("  (none)");
    }
    for target in targets {
        println!("  {} [{}]", target.title, target.id.prefix());
    }
}

/// Resolves link text. An unresolved link is a normal outcome, not an error.
pub fn handle_resolve<G: LinkGraph>(args: &ResolveArgs, graph: &G, owner: &OwnerId) -> Result<()> {
    let resolution = graph
        .resolve(&args.text, owner)
        .context("failed to resolve link")?;

    match args.format {
        OutputFormat::Human => match &resolution {
            Resolution::Resolved(target) => println!("{} [{}]", target.title, target.id),
            Resolution::NotFound => println!("unresolved"),
        },
        OutputFormat::Json => {
            Output::new(ResolveListing {
                text: args.text.clone(),
                slug: normalize(&args.text),
                target: resolution.into_target(),
            })
            .print()?;
        }
    }

    Ok(())
}

pub fn handle_links<S>(args: &LinksArgs, store: &S, owner: &OwnerId) -> Result<()>
where
    S: NoteRepository + LinkGraph,
{
    let note = require_note(store, owner, &args.note)?;
    let hood = store
        .neighborhood(note.id())
        .context("failed to query links")?;

    match args.format {
        OutputFormat::Human => {
            println!("{}", note);
            println!();
            print_targets("Links", &hood.one_hop_links);
            print_targets("Backlinks", &hood.backlinks);
            print_targets("Two hops away", &hood.two_hop_links);
        }
        OutputFormat::Json => {
            Output::new(&hood).print()?;
        }
    }

    Ok(())
}
