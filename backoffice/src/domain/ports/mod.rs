//! Storage port for the client profile's key/value store.
//!
//! The browser profile this client models exposes a synchronous local
//! key/value store; adapters implement [`KeyValueStore`] over whatever
//! medium the deployment provides (an in-memory map for tests, a sandboxed
//! directory for desktop profiles).

mod key_value_store;

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
pub use key_value_store::{InMemoryKeyValueStore, KeyValueStore, KeyValueStoreError};
