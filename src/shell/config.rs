// Runtime configuration read from the environment (and an optional `.env` file).

use crate::modules::calculator::adapters::outbound::history_repository::HISTORY_STORAGE_KEY;
use std::path::PathBuf;

pub const HISTORY_DIR_VAR: &str = "CALCULATOR_HISTORY_DIR";
pub const HISTORY_KEY_VAR: &str = "CALCULATOR_HISTORY_KEY";
const DEFAULT_HISTORY_DIR: &str = ".calculator";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub history_dir: PathBuf,
    pub history_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            history_dir: non_empty(HISTORY_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_DIR)),
            history_key: non_empty(HISTORY_KEY_VAR)
                .unwrap_or_else(|| HISTORY_STORAGE_KEY.to_string()),
        }
    }
}
