use tracing::debug;

use crate::errors::{RespinError, Result};
use crate::model::{Version, VersionId};

/// Append-only in-memory ledger of content versions
///
/// Insertion order is preserved; versions are never deleted or mutated once
/// appended. Not thread-safe (no Arc/RwLock) - designed for single-threaded
/// use by one orchestrating caller. The store is owned by and passed into
/// the orchestrator rather than living as process-global state, so multiple
/// independent sessions and tests run without cross-contamination.
#[derive(Debug, Clone, Default)]
pub struct VersionStore {
    versions: Vec<Version>,
}

impl VersionStore {
    /// Create a new empty VersionStore
    pub fn new() -> Self {
        Self {
            versions: Vec::new(),
        }
    }

    /// Create a new version and append it to the ledger
    ///
    /// Generates a fresh random id, captures the current UTC timestamp, and
    /// grows the store by exactly one entry. All string inputs are accepted
    /// unconditionally, including empty strings. Never fails.
    pub fn create(
        &mut self,
        content: impl Into<String>,
        author: impl Into<String>,
        status: impl Into<String>,
    ) -> VersionId {
        let version = Version::new(content, author, status);
        let version_id = version.version_id.clone();
        debug!(
            version_id = %version_id,
            author = %version.author,
            status = %version.status,
            "saved version"
        );
        self.versions.push(version);
        version_id
    }

    /// Get a version by id
    ///
    /// Performs a linear scan in insertion order comparing ids for exact
    /// equality. Returns `None` if no version carries the id. Linear scan is
    /// acceptable for a single interactive session; swap in a map keyed by
    /// id if the store ever grows large.
    pub fn get(&self, version_id: &VersionId) -> Option<&Version> {
        self.versions
            .iter()
            .find(|v| &v.version_id == version_id)
    }

    /// Get a version by id, failing if absent
    ///
    /// # Errors
    ///
    /// Returns `VersionNotFound` if no version carries the id.
    pub fn require(&self, version_id: &VersionId) -> Result<&Version> {
        self.get(version_id)
            .ok_or_else(|| RespinError::VersionNotFound {
                version_id: version_id.to_string(),
            })
    }

    /// Iterate over all versions in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Version> {
        self.versions.iter()
    }

    /// The most recently created version, if any
    pub fn latest(&self) -> Option<&Version> {
        self.versions.last()
    }

    /// Number of versions in the store
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// True if no versions have been created
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_store_is_empty() {
        let store = VersionStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.latest().is_none());
    }

    #[test]
    fn test_create_and_get_round_trip() {
        let mut store = VersionStore::new();
        let id = store.create("Hello world", "system", "fetched");

        let version = store.get(&id).unwrap();
        assert_eq!(version.version_id, id);
        assert_eq!(version.content, "Hello world");
        assert_eq!(version.author, "system");
        assert_eq!(version.status, "fetched");
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let mut store = VersionStore::new();
        store.create("text", "system", "draft");

        let unknown = VersionId::from_string("never-returned".to_string());
        assert!(store.get(&unknown).is_none());
    }

    #[test]
    fn test_require_unknown_id_is_not_found() {
        let store = VersionStore::new();
        let unknown = VersionId::from_string("missing".to_string());

        let result = store.require(&unknown);
        assert_eq!(
            result,
            Err(RespinError::VersionNotFound {
                version_id: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_ids_are_unique_over_many_creations() {
        let mut store = VersionStore::new();
        let mut seen = HashSet::new();
        for i in 0..10_000 {
            let id = store.create(format!("content {}", i), "system", "draft");
            assert!(seen.insert(id), "duplicate id at creation {}", i);
        }
        assert_eq!(store.len(), 10_000);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = VersionStore::new();
        let ids: Vec<_> = (0..5)
            .map(|i| store.create(format!("v{}", i), "system", "draft"))
            .collect();

        let stored: Vec<_> = store.iter().map(|v| v.version_id.clone()).collect();
        assert_eq!(stored, ids);
        assert_eq!(store.latest().unwrap().version_id, ids[4]);
    }

    #[test]
    fn test_timestamps_non_decreasing() {
        let mut store = VersionStore::new();
        for _ in 0..100 {
            store.create("x", "system", "draft");
        }
        let timestamps: Vec<_> = store.iter().map(|v| v.timestamp).collect();
        assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_empty_inputs_accepted() {
        let mut store = VersionStore::new();
        let id = store.create("", "", "");

        let version = store.get(&id).unwrap();
        assert_eq!(version.content, "");
        assert_eq!(version.author, "");
        assert_eq!(version.status, "");
    }
}
