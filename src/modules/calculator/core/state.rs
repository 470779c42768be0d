use crate::modules::calculator::core::operator::Operator;

/// Longest numeral accepted while digits are being entered.
pub const MAX_ENTRY_LENGTH: usize = 9;

// Purpose
// - The calculator state after folding every input token so far.
//
// Notes
// - `previous_value` is empty when no left operand is pending.
// - `should_reset_display` is set after an operator or equals commits a value;
//   the next digit replaces `current_value` instead of appending to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    pub current_value: String,
    pub previous_value: String,
    pub operator: Option<Operator>,
    pub should_reset_display: bool,
}

impl CalculatorState {
    pub fn initial() -> Self {
        Self {
            current_value: "0".to_string(),
            previous_value: String::new(),
            operator: None,
            should_reset_display: false,
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::initial()
    }
}
