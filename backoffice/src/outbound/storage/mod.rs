//! Filesystem-backed key/value storage for the desktop profile.
//!
//! One file per key inside a sandboxed profile directory. File access
//! goes through `cap_std` so the adapter can only ever touch the
//! directory it was opened on.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};

use crate::domain::ports::{KeyValueStore, KeyValueStoreError};

/// Key/value store writing one file per key under a profile directory.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    directory: Dir,
}

impl DirectoryKeyValueStore {
    /// Open (creating if needed) the profile directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Backend`] when the directory cannot
    /// be created or opened.
    pub fn open(path: &Utf8Path) -> Result<Self, KeyValueStoreError> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(|error| KeyValueStoreError::backend(error.to_string()))?;
        let directory = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(|error| KeyValueStoreError::backend(error.to_string()))?;
        Ok(Self { directory })
    }

    /// Keys map directly to file names, so only a conservative character
    /// set is accepted.
    fn validate_key(key: &str) -> Result<(), KeyValueStoreError> {
        let acceptable = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if acceptable {
            Ok(())
        } else {
            Err(KeyValueStoreError::invalid_key(key))
        }
    }
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        Self::validate_key(key)?;
        match self.directory.read(key) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|error| KeyValueStoreError::backend(error.to_string())),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(KeyValueStoreError::backend(error.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        Self::validate_key(key)?;
        self.directory.write(key, value).map_err(|error| {
            if matches!(
                error.kind(),
                std::io::ErrorKind::StorageFull | std::io::ErrorKind::QuotaExceeded
            ) {
                KeyValueStoreError::capacity_exceeded(error.to_string())
            } else {
                KeyValueStoreError::backend(error.to_string())
            }
        })
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        Self::validate_key(key)?;
        match self.directory.remove_file(key) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(KeyValueStoreError::backend(error.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;
    use rstest::rstest;

    use super::*;

    fn open_in_tempdir(tempdir: &tempfile::TempDir) -> DirectoryKeyValueStore {
        let path = Utf8Path::from_path(tempdir.path()).expect("temp path is UTF-8");
        DirectoryKeyValueStore::open(path).expect("profile directory opens")
    }

    #[rstest]
    fn set_get_remove_round_trip() {
        let tempdir = tempfile::tempdir().expect("create temp directory");
        let store = open_in_tempdir(&tempdir);

        store.set("auth_token", "t-9").expect("write succeeds");
        assert_eq!(
            store.get("auth_token").expect("read succeeds"),
            Some("t-9".to_owned())
        );

        store.remove("auth_token").expect("remove succeeds");
        assert_eq!(store.get("auth_token").expect("read succeeds"), None);
    }

    #[rstest]
    fn absent_keys_read_as_none() {
        let tempdir = tempfile::tempdir().expect("create temp directory");
        let store = open_in_tempdir(&tempdir);
        assert_eq!(store.get("site_content_en").expect("read succeeds"), None);
    }

    #[rstest]
    fn removing_an_absent_key_is_a_no_op() {
        let tempdir = tempfile::tempdir().expect("create temp directory");
        let store = open_in_tempdir(&tempdir);
        store.remove("auth_user").expect("remove succeeds");
    }

    #[rstest]
    #[case("")]
    #[case("../escape")]
    #[case("Auth_Token")]
    #[case("key with spaces")]
    fn hostile_keys_are_rejected(#[case] key: &str) {
        let tempdir = tempfile::tempdir().expect("create temp directory");
        let store = open_in_tempdir(&tempdir);
        assert!(matches!(
            store.set(key, "value"),
            Err(KeyValueStoreError::InvalidKey { .. })
        ));
        assert!(matches!(
            store.get(key),
            Err(KeyValueStoreError::InvalidKey { .. })
        ));
    }

    #[rstest]
    fn values_survive_reopening_the_directory() {
        let tempdir = tempfile::tempdir().expect("create temp directory");
        let store = open_in_tempdir(&tempdir);
        store.set("site_content_ar", "{}").expect("write succeeds");
        drop(store);

        let reopened = open_in_tempdir(&tempdir);
        assert_eq!(
            reopened.get("site_content_ar").expect("read succeeds"),
            Some("{}".to_owned())
        );
    }
}
