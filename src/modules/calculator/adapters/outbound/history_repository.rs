use crate::modules::calculator::core::history::HistoryItem;
use crate::modules::calculator::use_cases::handle_input::history_port::{
    HistoryError, HistoryRepository,
};
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use async_trait::async_trait;
use std::sync::Arc;

pub const HISTORY_STORAGE_KEY: &str = "@calculator_history";

/// Stores the history list as a JSON array, newest first, under a single key.
pub struct KeyValueHistoryRepository<TStore>
where
    TStore: KeyValueStore + 'static,
{
    key: String,
    store: Arc<TStore>,
}

impl<TStore> KeyValueHistoryRepository<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self::with_key(HISTORY_STORAGE_KEY, store)
    }

    pub fn with_key(key: impl Into<String>, store: Arc<TStore>) -> Self {
        Self {
            key: key.into(),
            store,
        }
    }
}

#[async_trait]
impl<TStore> HistoryRepository for KeyValueHistoryRepository<TStore>
where
    TStore: KeyValueStore + 'static,
{
    async fn load(&self) -> Result<Option<Vec<HistoryItem>>, HistoryError> {
        match self.store.get(&self.key).await? {
            Some(serialized) => Ok(Some(serde_json::from_str(&serialized)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, history: &[HistoryItem]) -> Result<(), HistoryError> {
        let serialized = serde_json::to_string(history)?;
        self.store.set(&self.key, &serialized).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), HistoryError> {
        self.store.remove(&self.key).await?;
        Ok(())
    }
}
