// Key-value store port used to persist calculator history.
//
// Purpose
// - Describe the storage capability as a trait so the session is independent of where
//   the history list is kept.
//
// Boundaries
// - No concrete input or output here. Implementations live next to this module.
//
// Testing guidance
// - Use the in memory implementation; toggle it offline to exercise failure paths.

pub mod file_system;
pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;
    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}
