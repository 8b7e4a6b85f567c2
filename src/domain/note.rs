//! Note struct: a titled, owner-scoped text document.

use crate::domain::{NoteId, OwnerId};
use crate::infra::slug_or_placeholder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyTitle,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyTitle => write!(f, "invalid note: title cannot be empty"),
        }
    }
}

impl std::error::Error for ParseNoteError {}

fn validate_title(title: String) -> Result<String, ParseNoteError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ParseNoteError {
            kind: ParseNoteErrorKind::EmptyTitle,
        });
    }
    Ok(trimmed.to_string())
}

/// A note owned by a single user.
///
/// The slug is derived from the title whenever the title is set and is never
/// assigned directly. Content may contain `[[Wiki Link]]` references to other
/// notes of the same owner.
///
/// # Examples
///
/// ```
/// use wikiden::domain::{Note, OwnerId};
/// use chrono::Utc;
///
/// let owner = OwnerId::new("alice").unwrap();
/// let note = Note::new(owner, "API Design", "See [[Rust]]", Utc::now()).unwrap();
/// assert_eq!(note.slug(), "api-design");
/// ```
#[derive(Clone, PartialEq, Serialize)]
pub struct Note {
    id: NoteId,
    owner: OwnerId,
    title: String,
    slug: String,
    content: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl Note {
    /// Creates a new note with a fresh id, stamped with `now`.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title is empty or whitespace-only.
    pub fn new(
        owner: OwnerId,
        title: impl Into<String>,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, ParseNoteError> {
        Self::builder(NoteId::from_datetime(now), owner, title, now, now)
            .content(content)
            .build()
    }

    /// Creates a builder for constructing a note with explicit id and timestamps.
    pub fn builder(
        id: NoteId,
        owner: OwnerId,
        title: impl Into<String>,
        created: DateTime<Utc>,
        updated: DateTime<Utc>,
    ) -> NoteBuilder {
        NoteBuilder {
            id,
            owner,
            title: title.into(),
            content: String::new(),
            created,
            updated,
        }
    }

    /// Rebuilds a note from stored columns without re-deriving the slug.
    pub(crate) fn from_stored(
        id: NoteId,
        owner: OwnerId,
        title: String,
        slug: String,
        content: String,
        created: DateTime<Utc>,
        updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner,
            title,
            slug,
            content,
            created,
            updated,
        }
    }

    /// Applies an edit and bumps the update time.
    ///
    /// A `None` field is left unchanged. Changing the title recomputes the slug.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the new title is empty; the note is not modified.
    pub fn edit(
        &mut self,
        title: Option<&str>,
        content: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<(), ParseNoteError> {
        if let Some(title) = title {
            let title = validate_title(title.to_string())?;
            self.slug = slug_or_placeholder(&title, &self.id);
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content.to_string();
        }
        self.updated = now;
        Ok(())
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the owning user.
    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the normalized slug (or placeholder) for the title.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the note body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the note was last updated.
    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id.prefix())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("owner", &self.owner)
            .field("title", &self.title)
            .field("slug", &self.slug)
            .field("created", &self.created)
            .field("updated", &self.updated)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a Note with explicit identity and timestamps.
pub struct NoteBuilder {
    id: NoteId,
    owner: OwnerId,
    title: String,
    content: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl NoteBuilder {
    /// Sets the note body.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds the note, deriving its slug from the title.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title is empty or whitespace-only.
    pub fn build(self) -> Result<Note, ParseNoteError> {
        let title = validate_title(self.title)?;
        let slug = slug_or_placeholder(&title, &self.id);
        Ok(Note {
            id: self.id,
            owner: self.owner,
            title,
            slug,
            content: self.content,
            created: self.created,
            updated: self.updated,
        })
    }
}
