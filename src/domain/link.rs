//! Link graph types: persisted edges and the note summaries graph queries return.

use crate::domain::NoteId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use ulid::Ulid;

/// Identifier of a single stored link edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkId(Ulid);

impl LinkId {
    /// Creates a fresh edge id.
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for LinkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkId(\"{}\")", self.0)
    }
}

impl std::str::FromStr for LinkId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s).map(LinkId)
    }
}

impl Serialize for LinkId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

/// A directed edge: the source note's content links to the target note.
///
/// Edges are owned by their source note. The full set for a source is
/// replaced whenever that note's content is synced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEdge {
    id: LinkId,
    source: NoteId,
    target: NoteId,
    created: DateTime<Utc>,
}

impl LinkEdge {
    /// Creates a new edge from `source` to `target`.
    pub fn new(id: LinkId, source: NoteId, target: NoteId, created: DateTime<Utc>) -> Self {
        Self {
            id,
            source,
            target,
            created,
        }
    }

    pub fn id(&self) -> LinkId {
        self.id
    }

    pub fn source(&self) -> &NoteId {
        &self.source
    }

    pub fn target(&self) -> &NoteId {
        &self.target
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns true if the edge points back at its own source.
    pub fn is_self_link(&self) -> bool {
        self.source == self.target
    }
}

/// The minimal view of a note shown in a related-notes panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LinkTarget {
    pub id: NoteId,
    pub title: String,
    pub slug: String,
}

impl LinkTarget {
    pub fn new(id: NoteId, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            slug: slug.into(),
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id.prefix())
    }
}

/// Notes around a given note in the link graph.
///
/// - `one_hop_links`: notes the origin links to
/// - `backlinks`: notes linking to the origin
/// - `two_hop_links`: notes reached through a one-hop link, minus the origin
///   itself and minus anything already in `one_hop_links`, unique by slug
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Neighborhood {
    pub one_hop_links: Vec<LinkTarget>,
    pub backlinks: Vec<LinkTarget>,
    pub two_hop_links: Vec<LinkTarget>,
}

impl Neighborhood {
    /// Returns true if the note has no links in any direction.
    pub fn is_empty(&self) -> bool {
        self.one_hop_links.is_empty() && self.backlinks.is_empty() && self.two_hop_links.is_empty()
    }
}
