//! Reindex command handler.

use anyhow::{Context, Result};

use crate::cli::ReindexArgs;
use crate::cli::output::{Output, OutputFormat, ReindexListing};
use crate::domain::OwnerId;
use crate::index::LinkGraph;

/// Re-syncs every note of the owner and totals the results.
pub fn reindex<G: LinkGraph>(graph: &mut G, owner: &OwnerId) -> Result<ReindexListing> {
    let reports = graph
        .resync_owner(owner)
        .context("failed to re-sync links")?;

    Ok(ReindexListing {
        notes: reports.len(),
        edges: reports.iter().map(|(_, r)| r.edges_written).sum(),
        unresolved: reports.iter().map(|(_, r)| r.unresolved.len()).sum(),
    })
}

pub fn handle_reindex<G: LinkGraph>(
    args: &ReindexArgs,
    graph: &mut G,
    owner: &OwnerId,
) -> Result<()> {
    let totals = reindex(graph, owner)?;

    match args.format {
        OutputFormat::Human => {
            println!(
                "Re-synced {} note(s): {} link(s), {} unresolved",
                totals.notes, totals.edges, totals.unresolved
            );
        }
        OutputFormat::Json => Output::new(totals).print()?,
    }

    Ok(())
}
