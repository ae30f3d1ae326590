//! Port abstraction for client profile storage.

use std::collections::BTreeMap;
use std::sync::Mutex;

/// Errors raised by key/value store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyValueStoreError {
    /// The backing medium failed while reading or writing.
    #[error("profile storage failed: {message}")]
    Backend {
        /// Adapter diagnostic.
        message: String,
    },
    /// The write would exceed the store's capacity (quota exceeded).
    #[error("profile storage is full: {message}")]
    CapacityExceeded {
        /// Adapter diagnostic.
        message: String,
    },
    /// The key contains characters the adapter cannot map safely.
    #[error("invalid storage key '{key}'")]
    InvalidKey {
        /// The offending key.
        key: String,
    },
}

impl KeyValueStoreError {
    /// Backend failure with an adapter diagnostic.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Quota-exceeded failure with an adapter diagnostic.
    pub fn capacity_exceeded(message: impl Into<String>) -> Self {
        Self::CapacityExceeded {
            message: message.into(),
        }
    }

    /// Rejected key.
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }
}

/// Port for the client profile's synchronous key/value storage.
///
/// Storage access is local and effectively instantaneous, so the port is
/// synchronous; serialization across callers is the single-threaded UI
/// execution model's concern, not the adapter's.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError`] when the backing medium fails.
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::CapacityExceeded`] when the write does
    /// not fit, or [`KeyValueStoreError`] for other adapter failures.
    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Remove the value stored under `key`; removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError`] when the backing medium fails.
    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}

/// Mutex-guarded map store for tests and ephemeral sessions.
///
/// An optional capacity limit (total bytes across keys and values) makes
/// quota-exceeded write failures reproducible in tests.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<BTreeMap<String, String>>,
    capacity_bytes: Option<usize>,
}

impl InMemoryKeyValueStore {
    /// Store without a capacity limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes once total stored bytes would exceed
    /// `capacity_bytes`.
    #[must_use]
    pub fn with_capacity_limit(capacity_bytes: usize) -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            capacity_bytes: Some(capacity_bytes),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, KeyValueStoreError> {
        self.entries
            .lock()
            .map_err(|_| KeyValueStoreError::backend("store mutex poisoned"))
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let mut entries = self.lock()?;
        if let Some(limit) = self.capacity_bytes {
            let occupied: usize = entries
                .iter()
                .filter(|(stored_key, _)| stored_key.as_str() != key)
                .map(|(stored_key, stored_value)| stored_key.len() + stored_value.len())
                .sum();
            if occupied + key.len() + value.len() > limit {
                return Err(KeyValueStoreError::capacity_exceeded(format!(
                    "write of {} bytes exceeds the {limit} byte limit",
                    key.len() + value.len()
                )));
            }
        }
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn set_get_remove_round_trip() {
        let store = InMemoryKeyValueStore::new();
        store.set("auth_token", "t-1").expect("write succeeds");
        assert_eq!(store.get("auth_token").expect("read succeeds"), Some("t-1".to_owned()));
        store.remove("auth_token").expect("remove succeeds");
        assert_eq!(store.get("auth_token").expect("read succeeds"), None);
    }

    #[rstest]
    fn removing_an_absent_key_is_a_no_op() {
        let store = InMemoryKeyValueStore::new();
        store.remove("missing").expect("remove succeeds");
    }

    #[rstest]
    fn capacity_limit_rejects_oversized_writes() {
        let store = InMemoryKeyValueStore::with_capacity_limit(16);
        store.set("k", "small").expect("write fits");
        let result = store.set("k2", "a value that does not fit");
        assert!(matches!(
            result,
            Err(KeyValueStoreError::CapacityExceeded { .. })
        ));
        // The store is unchanged after a rejected write.
        assert_eq!(store.get("k2").expect("read succeeds"), None);
    }

    #[rstest]
    fn overwriting_a_key_does_not_double_count_capacity() {
        let store = InMemoryKeyValueStore::with_capacity_limit(12);
        store.set("key", "12345678").expect("first write fits");
        store.set("key", "87654321").expect("overwrite fits");
    }
}
