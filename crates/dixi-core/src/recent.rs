use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;

use crate::codec::JsonCodec;
use crate::preference::PreferenceStore;
use crate::storage::KeyValueStorage;

pub const RECENT_SEARCHES_KEY: &str = "dixi_recent_searches";
pub const DEFAULT_CAPACITY: usize = 10;

/// Most-recent-first list of distinct committed queries
pub struct RecentSearches {
    store: PreferenceStore<Vec<String>, JsonCodec>,
    capacity: usize,
}

impl RecentSearches {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_capacity(storage, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(storage: Arc<dyn KeyValueStorage>, capacity: usize) -> Self {
        Self {
            store: PreferenceStore::new(storage, RECENT_SEARCHES_KEY, JsonCodec, Vec::new),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Move `query` to the front, dropping the oldest entries past capacity.
    pub fn record(&self, query: &str) {
        let query: String = query.trim().nfc().collect();
        if query.is_empty() {
            return;
        }

        let mut recent = self.store.load();
        recent.retain(|q| *q != query);
        recent.insert(0, query);
        recent.truncate(self.capacity);

        tracing::debug!("Recording recent search, {} stored", recent.len());
        self.store.save(&recent);
    }

    /// Current persisted list, read fresh on every call
    pub fn list(&self) -> Vec<String> {
        let mut recent = self.store.load();
        recent.truncate(self.capacity);
        recent
    }
}
