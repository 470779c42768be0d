use crate::modules::calculator::core::format::{number_to_string, parse_numeral};
use crate::modules::calculator::core::operator::Operator;

/// Display value for a failed arithmetic operation.
pub const ERROR_SENTINEL: &str = "Error";

/// Applies `previous <operator> current` in double precision.
///
/// Operands that do not parse to finite numbers leave `current` untouched. Division by
/// zero yields [`ERROR_SENTINEL`]. Any other result, including an overflow to
/// `"Infinity"`, is rendered unrounded; rounding is left to the formatter.
pub fn evaluate(previous: &str, current: &str, operator: Operator) -> String {
    let (Some(lhs), Some(rhs)) = (parse_numeral(previous), parse_numeral(current)) else {
        return current.to_string();
    };

    let result = match operator {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => {
            if rhs == 0.0 {
                return ERROR_SENTINEL.to_string();
            }
            lhs / rhs
        }
    };

    number_to_string(result)
}

/// Like [`evaluate`], for an operator still in its symbol form. Unknown symbols leave
/// `current` untouched.
pub fn evaluate_symbol(previous: &str, current: &str, symbol: &str) -> String {
    match symbol.parse::<Operator>() {
        Ok(operator) => evaluate(previous, current, operator),
        Err(_) => current.to_string(),
    }
}
