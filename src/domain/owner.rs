//! Owner identifier scoping every note and link lookup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies the user that owns a note.
///
/// The value is opaque to this crate. It is trimmed on construction and
/// must not be empty.
///
/// ```
/// use wikiden::domain::OwnerId;
///
/// let owner = OwnerId::new("  alice ").unwrap();
/// assert_eq!(owner.as_str(), "alice");
/// assert!(OwnerId::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerId(String);

/// Error returned when an owner identifier is empty.
#[derive(Debug, Clone)]
pub struct ParseOwnerIdError;

impl fmt::Display for ParseOwnerIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner id cannot be empty")
    }
}

impl std::error::Error for ParseOwnerIdError {}

impl OwnerId {
    /// Creates an owner id from a string, trimming surrounding whitespace.
    pub fn new(s: &str) -> Result<Self, ParseOwnerIdError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseOwnerIdError);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the owner id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OwnerId(\"{}\")", self.0)
    }
}

impl FromStr for OwnerId {
    type Err = ParseOwnerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for OwnerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OwnerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
