// File backed implementation of the KeyValueStore port.
//
// Responsibilities
// - Keep one file per key under a base directory. Bytes outside [A-Za-z0-9_-] are
//   percent-encoded in the file name, so distinct keys never share a file.
// - Replace a value as a unit: write a sibling temp file, then rename it over the old one.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct FileSystemKeyValueStore {
    base_dir: PathBuf,
}

impl FileSystemKeyValueStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let mut file_name = String::with_capacity(key.len() + ".json".len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                file_name.push(char::from(byte));
            } else {
                file_name.push_str(&format!("%{byte:02X}"));
            }
        }
        file_name.push_str(".json");
        self.base_dir.join(file_name)
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileSystemKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        fs::create_dir_all(&self.base_dir).await?;
        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).await?;
        fs::rename(&staging, &path).await?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "key written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
