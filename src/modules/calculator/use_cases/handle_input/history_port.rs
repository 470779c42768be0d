use crate::modules::calculator::core::history::HistoryItem;
use crate::shared::infrastructure::key_value_store::KeyValueStoreError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(transparent)]
    Store(#[from] KeyValueStoreError),

    #[error("history is not valid json: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistence for the full history list. The list is always read and written as one unit.
///
/// `load` yields `None` when no list has been stored yet.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn load(&self) -> Result<Option<Vec<HistoryItem>>, HistoryError>;
    async fn save(&self, history: &[HistoryItem]) -> Result<(), HistoryError>;
    async fn clear(&self) -> Result<(), HistoryError>;
}
