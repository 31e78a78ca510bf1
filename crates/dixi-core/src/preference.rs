//! Load/persist pattern shared by every user preference.
//!
//! A [`PreferenceStore`] binds one storage key to a codec and a default
//! provider. `load` and `save` never fail from the caller's point of view:
//! an absent or undecodable value yields the default, and a failed write is
//! logged and dropped so in-memory state stays authoritative. The fallible
//! forms (`try_load`, `try_save`) are kept public for callers that want to
//! report problems.

use std::sync::Arc;

use crate::codec::Codec;
use crate::error::PreferenceError;
use crate::storage::KeyValueStorage;

pub struct PreferenceStore<V, C> {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    codec: C,
    default: Box<dyn Fn() -> V + Send + Sync>,
}

impl<V, C> PreferenceStore<V, C>
where
    C: Codec<V>,
{
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        key: impl Into<String>,
        codec: C,
        default: impl Fn() -> V + Send + Sync + 'static,
    ) -> Self {
        Self {
            storage,
            key: key.into(),
            codec,
            default: Box::new(default),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored value, `Ok(None)` if nothing was ever saved under the key
    pub fn try_load(&self) -> Result<Option<V>, PreferenceError> {
        let raw = self
            .storage
            .get(&self.key)
            .map_err(|source| PreferenceError::Storage {
                key: self.key.clone(),
                source,
            })?;

        raw.map(|raw| {
            self.codec
                .decode(&raw)
                .map_err(|source| PreferenceError::Codec {
                    key: self.key.clone(),
                    source,
                })
        })
        .transpose()
    }

    pub fn load(&self) -> V {
        match self.try_load() {
            Ok(Some(value)) => value,
            Ok(None) => (self.default)(),
            Err(e) => {
                tracing::warn!("Falling back to default preference: {}", e);
                (self.default)()
            }
        }
    }

    pub fn try_save(&self, value: &V) -> Result<(), PreferenceError> {
        let raw = self
            .codec
            .encode(value)
            .map_err(|source| PreferenceError::Codec {
                key: self.key.clone(),
                source,
            })?;

        self.storage
            .set(&self.key, &raw)
            .map_err(|source| PreferenceError::Storage {
                key: self.key.clone(),
                source,
            })
    }

    pub fn save(&self, value: &V) {
        if let Err(e) = self.try_save(value) {
            tracing::warn!("Preference not persisted: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{JsonCodec, TextCodec};
    use crate::storage::MemoryStorage;

    fn store_with(storage: Arc<MemoryStorage>) -> PreferenceStore<u32, TextCodec> {
        PreferenceStore::new(storage, "page_size", TextCodec, || 50)
    }

    #[test]
    fn load_falls_back_to_default_when_absent() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        assert_eq!(store.try_load().unwrap(), None);
        assert_eq!(store.load(), 50);
    }

    #[test]
    fn load_returns_saved_value() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        store.save(&25);
        assert_eq!(store.load(), 25);
    }

    #[test]
    fn undecodable_value_falls_back_to_default() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("page_size", "lots").unwrap();

        let store = store_with(storage);
        assert!(matches!(store.try_load(), Err(PreferenceError::Codec { .. })));
        assert_eq!(store.load(), 50);
    }

    #[test]
    fn read_failure_falls_back_to_default() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("page_size", "10").unwrap();
        storage.set_fail_reads(true);

        let store = store_with(storage);
        assert_eq!(store.load(), 50);
    }

    #[test]
    fn write_failure_is_swallowed() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_fail_writes(true);

        let store = store_with(storage.clone());
        store.save(&7);
        assert!(store.try_save(&7).is_err());

        storage.set_fail_writes(false);
        assert_eq!(store.load(), 50);
    }

    #[test]
    fn default_provider_is_called_per_load() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let store: PreferenceStore<Vec<String>, JsonCodec> =
            PreferenceStore::new(Arc::new(MemoryStorage::new()), "history", JsonCodec, move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Vec::new()
            });

        store.load();
        store.load();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
