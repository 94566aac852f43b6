use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author label used when the producer is not specified
pub const DEFAULT_AUTHOR: &str = "system";

/// Status label used when the lifecycle stage is not specified
pub const DEFAULT_STATUS: &str = "draft";

/// Unique identifier for a content version
///
/// Backed by a random 128-bit UUID (v4) in textual encoding. The id carries
/// no ordering guarantee; ordering comes from the store's append sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionId(String);

impl VersionId {
    /// Generate a new random VersionId using UUIDv4
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization and lookups)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for VersionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VersionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Version - an immutable snapshot of text content
///
/// A Version captures the full text payload at one point in the editing
/// workflow, together with who produced it and which lifecycle stage it
/// represents. Fields are never mutated after creation; the store only
/// appends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    /// Unique identifier, assigned at creation, never reused
    pub version_id: VersionId,

    /// Creation time in UTC
    pub timestamp: DateTime<Utc>,

    /// Free-text producer label (e.g. "system", "AI", "editor"); not validated
    pub author: String,

    /// Full text payload; opaque, may contain any Unicode text including newlines
    pub content: String,

    /// Free-text lifecycle label (e.g. "fetched", "spun", "edited");
    /// purely descriptive, no state machine is enforced
    pub status: String,
}

impl Version {
    /// Create a new Version with a fresh id and the current UTC timestamp
    ///
    /// All inputs are accepted as-is, including empty strings.
    pub fn new(
        content: impl Into<String>,
        author: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            version_id: VersionId::new(),
            timestamp: Utc::now(),
            author: author.into(),
            content: content.into(),
            status: status.into(),
        }
    }
}
