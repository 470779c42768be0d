use crate::modules::calculator::core::history::{Calculation, HistoryItem};
use crate::modules::calculator::core::operator::Operator;

pub fn make_calculation(previous: &str, operator: Operator, current: &str, result: &str) -> Calculation {
    Calculation {
        previous: previous.to_string(),
        operator,
        current: current.to_string(),
        result: result.to_string(),
    }
}

pub fn make_history_item(id: &str, expression: &str, result: &str) -> HistoryItem {
    HistoryItem {
        id: id.to_string(),
        expression: expression.to_string(),
        result: result.to_string(),
        timestamp: 1_700_000_000_000,
    }
}

pub fn make_history() -> Vec<HistoryItem> {
    vec![
        make_history_item("item-fixed-0002", "8 * 2", "16"),
        make_history_item("item-fixed-0001", "5 + 3", "8"),
    ]
}
