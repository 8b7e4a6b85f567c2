//! LinkGraph trait implementation for SqliteIndex.

use super::SqliteIndex;
use super::resolve::resolve_on;
use super::rows::{from_millis, parse_note_id, query_targets};
use super::sync::{ensure_owned, replace_links};
use crate::domain::{LinkEdge, LinkTarget, Neighborhood, NoteId, OwnerId};
use crate::index::{IndexError, IndexResult, LinkGraph, Resolution, SyncReport};
use std::collections::HashSet;

impl LinkGraph for SqliteIndex {
    fn resolve(&self, raw_link_text: &str, owner: &OwnerId) -> IndexResult<Resolution> {
        resolve_on(&self.conn, raw_link_text, owner)
    }

    fn sync_links(
        &mut self,
        source: &NoteId,
        content: Option<&str>,
        owner: &OwnerId,
    ) -> IndexResult<SyncReport> {
        let options = self.options;
        let tx = self.transaction()?;
        ensure_owned(tx.conn(), source, owner)?;
        let report = replace_links(tx.conn(), source, content, owner, &options)?;
        tx.commit()?;
        Ok(report)
    }

    fn neighborhood(&self, note_id: &NoteId) -> IndexResult<Neighborhood> {
        let id_str = note_id.to_string();
        let tx = self.read_transaction()?;

        let one_hop_links = query_targets(
            tx.conn(),
            "SELECT n.id, n.title, n.slug
             FROM link_edges e
             JOIN notes n ON n.id = e.target_note_id
             WHERE e.source_note_id = ?1
             ORDER BY n.title, n.id",
            [&id_str],
        )?;

        let backlinks = query_targets(
            tx.conn(),
            "SELECT n.id, n.title, n.slug
             FROM link_edges e
             JOIN notes n ON n.id = e.source_note_id
             WHERE e.target_note_id = ?1
             ORDER BY n.title, n.id",
            [&id_str],
        )?;

        let two_hop_candidates = query_targets(
            tx.conn(),
            "SELECT n.id, n.title, n.slug
             FROM link_edges e
             JOIN notes n ON n.id = e.target_note_id
             WHERE e.source_note_id IN
                   (SELECT target_note_id FROM link_edges WHERE source_note_id = ?1)
               AND e.target_note_id != ?1
               AND e.target_note_id NOT IN
                   (SELECT target_note_id FROM link_edges WHERE source_note_id = ?1)
             ORDER BY n.title, n.id",
            [&id_str],
        )?;

        tx.commit()?;

        Ok(Neighborhood {
            one_hop_links,
            backlinks,
            two_hop_links: dedup_by_slug(two_hop_candidates),
        })
    }

    fn outgoing_edges(&self, source: &NoteId) -> IndexResult<Vec<LinkEdge>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, source_note_id, target_note_id, created_at
             FROM link_edges
             WHERE source_note_id = ?1
             ORDER BY target_note_id",
        )?;
        let rows = stmt
            .query_map([source.to_string()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, source, target, created)| {
                let id = id
                    .parse()
                    .map_err(|e| IndexError::Corrupt(format!("invalid link ID: {}", e)))?;
                Ok(LinkEdge::new(
                    id,
                    parse_note_id(&source)?,
                    parse_note_id(&target)?,
                    from_millis(created)?,
                ))
            })
            .collect()
    }

    fn resync_owner(&mut self, owner: &OwnerId) -> IndexResult<Vec<(NoteId, SyncReport)>> {
        let options = self.options;
        let tx = self.transaction()?;

        let notes: Vec<(String, String)> = tx
            .conn()
            .prepare("SELECT id, content FROM notes WHERE owner_id = ?1 ORDER BY id")?
            .query_map([owner.as_str()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut reports = Vec::with_capacity(notes.len());
        for (id_str, content) in notes {
            let id = parse_note_id(&id_str)?;
            let report = replace_links(tx.conn(), &id, Some(&content), owner, &options)?;
            reports.push((id, report));
        }

        tx.commit()?;

        let edges: usize = reports.iter().map(|(_, r)| r.edges_written).sum();
        tracing::info!(owner = %owner, notes = reports.len(), edges, "re-synced owner links");
        Ok(reports)
    }
}

/// Keeps the first target for each slug, preserving order.
fn dedup_by_slug(targets: Vec<LinkTarget>) -> Vec<LinkTarget> {
    let mut seen = HashSet::new();
    targets
        .into_iter()
        .filter(|t| seen.insert(t.slug.clone()))
        .collect()
}
