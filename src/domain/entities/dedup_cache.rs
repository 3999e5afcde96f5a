//! DedupCache entity - digests of content already staged
//!
//! Append-only for the lifetime of the owning handler. Membership is the
//! only question the handler asks; order is kept for snapshots.

use std::collections::HashSet;

use crate::domain::value_objects::ContentHash;

/// Cache of digests that have been materialized
#[derive(Debug, Default, Clone)]
pub struct DedupCache {
    order: Vec<ContentHash>,
    seen: HashSet<ContentHash>,
}

impl DedupCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of distinct digests
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether a digest has been seen
    pub fn contains(&self, digest: &ContentHash) -> bool {
        self.seen.contains(digest)
    }

    /// Record a digest. Returns `false` if it was already present.
    pub fn insert(&mut self, digest: ContentHash) -> bool {
        if !self.seen.insert(digest.clone()) {
            return false;
        }
        self.order.push(digest);
        true
    }

    /// Drop a digest whose materialization did not complete.
    pub(crate) fn forget(&mut self, digest: &ContentHash) {
        if self.seen.remove(digest) {
            self.order.retain(|d| d != digest);
        }
    }

    /// Digests in insertion order
    pub fn digests(&self) -> &[ContentHash] {
        &self.order
    }
}

impl FromIterator<ContentHash> for DedupCache {
    fn from_iter<I: IntoIterator<Item = ContentHash>>(iter: I) -> Self {
        let mut cache = Self::new();
        for digest in iter {
            cache.insert(digest);
        }
        cache
    }
}
