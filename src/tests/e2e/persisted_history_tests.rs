use crate::modules::calculator::adapters::outbound::history_repository::KeyValueHistoryRepository;
use crate::modules::calculator::use_cases::handle_input::handler::CalculatorSession;
use crate::shared::infrastructure::key_value_store::file_system::FileSystemKeyValueStore;
use std::sync::Arc;
use tempfile::TempDir;

fn open_session(
    dir: &TempDir,
) -> CalculatorSession<KeyValueHistoryRepository<FileSystemKeyValueStore>> {
    let store = Arc::new(FileSystemKeyValueStore::new(dir.path()));
    CalculatorSession::new(Arc::new(KeyValueHistoryRepository::new(store)))
}

#[tokio::test]
async fn history_survives_a_new_session() {
    let dir = TempDir::new().unwrap();

    let first = open_session(&dir);
    first.load_history().await;
    for token in ["1", "2", "*", "3", "=", "percent", "+", "1", "="] {
        first.handle_input(token).await;
    }
    assert_eq!(first.display_value().await, "1.36");

    let second = open_session(&dir);
    assert!(second.history().await.is_empty());
    second.load_history().await;

    let history = second.history().await;
    assert_eq!(history, first.history().await);
    let rows: Vec<_> = history
        .iter()
        .map(|item| format!("{} = {}", item.expression, item.result))
        .collect();
    assert_eq!(rows, vec!["0.36 + 1 = 1.36", "12 * 3 = 36"]);

    second.clear_history().await;
    let third = open_session(&dir);
    third.load_history().await;
    assert!(third.history().await.is_empty());
}
