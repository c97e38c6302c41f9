//! Memoization of composed documents.
//!
//! Purely an optimization: a cached document is byte-identical to a fresh
//! `compose` of the same configuration. The cache is bounded; evicted
//! configurations are simply composed again on their next lookup.

use super::{Document, compose};
use crate::config::Configuration;
use moka::sync::Cache;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Entry limit used by [`DocumentCache::new`].
pub const DEFAULT_MAX_CAPACITY: u64 = 256;

/// Thread-safe, size-bounded cache keyed on full configuration equality.
#[derive(Clone)]
pub struct DocumentCache {
    entries: Cache<Configuration, Arc<Document>>,
}

impl DocumentCache {
    /// Empty cache holding at most [`DEFAULT_MAX_CAPACITY`] documents.
    pub fn new() -> Self {
        Self::with_max_capacity(DEFAULT_MAX_CAPACITY)
    }

    /// Empty cache holding at most `max_capacity` documents.
    pub fn with_max_capacity(max_capacity: u64) -> Self {
        Self {
            entries: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    /// Return the cached document for `config`, composing it on a miss.
    ///
    /// Concurrent callers asking for the same configuration share a single
    /// composition.
    pub fn get_or_compose(&self, config: &Configuration) -> Arc<Document> {
        self.entries.get_with(config.clone(), || {
            trace!("document cache miss");
            Arc::new(compose(config))
        })
    }

    /// Number of cached configurations.
    ///
    /// Flushes pending evictions first so the count is current.
    pub fn len(&self) -> usize {
        self.entries.run_pending_tasks();
        usize::try_from(self.entries.entry_count()).unwrap_or(usize::MAX)
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured entry limit.
    pub fn max_capacity(&self) -> Option<u64> {
        self.entries.policy().max_capacity()
    }

    /// Drop all cached documents.
    pub fn clear(&self) {
        self.entries.invalidate_all();
        self.entries.run_pending_tasks();
    }
}

impl Default for DocumentCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DocumentCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentCache")
            .field("entries", &self.entries.entry_count())
            .field("max_capacity", &self.max_capacity())
            .finish()
    }
}
