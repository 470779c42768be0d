use crate::modules::calculator::core::operator::Operator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A binary operation committed by an operator or equals input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub previous: String,
    pub operator: Operator,
    pub current: String,
    pub result: String,
}

impl Calculation {
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.previous, self.operator, self.current)
    }
}

// One persisted history record. Immutable once created; the list is kept newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub expression: String,
    pub result: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

impl HistoryItem {
    pub fn record(calculation: &Calculation, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            expression: calculation.expression(),
            result: calculation.result.clone(),
            timestamp: at.timestamp_millis(),
        }
    }
}
