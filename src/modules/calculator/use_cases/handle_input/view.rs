use crate::modules::calculator::core::history::HistoryItem;
use crate::modules::calculator::core::operator::Operator;
use serde::Serialize;

/// What a presentation layer renders: the display, the highlighted operator, and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorView {
    pub display_value: String,
    pub selected_operator: Option<Operator>,
    pub history: Vec<HistoryItem>,
}
