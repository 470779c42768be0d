use calculator::modules::calculator::adapters::outbound::history_repository::KeyValueHistoryRepository;
use calculator::modules::calculator::use_cases::handle_input::handler::CalculatorSession;
use calculator::shared::infrastructure::key_value_store::file_system::FileSystemKeyValueStore;
use calculator::shell::config::AppConfig;
use calculator::shell::driver;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        history_dir = %config.history_dir.display(),
        history_key = %config.history_key,
        "starting calculator"
    );

    let store = Arc::new(FileSystemKeyValueStore::new(config.history_dir));
    let repository = Arc::new(KeyValueHistoryRepository::with_key(
        config.history_key,
        store,
    ));
    let session = CalculatorSession::new(repository);
    session.load_history().await;

    driver::run(
        &session,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;
    Ok(())
}
