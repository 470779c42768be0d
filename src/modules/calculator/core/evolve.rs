// Evolve function: combine the prior calculator state with one input to produce the next state.
//
// Purpose
// - Define deterministic transitions for every input in every state.
// - Report the calculation an operator or equals input commits, so callers record exactly
//   the value the state now displays instead of evaluating a second time.
//
// Boundaries
// - No input or output. No side effects.

use crate::modules::calculator::core::evaluate::{ERROR_SENTINEL, evaluate};
use crate::modules::calculator::core::format::{format_number, number_to_string, parse_numeral};
use crate::modules::calculator::core::history::Calculation;
use crate::modules::calculator::core::input::CalculatorInput;
use crate::modules::calculator::core::operator::Operator;
use crate::modules::calculator::core::state::{CalculatorState, MAX_ENTRY_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: CalculatorState,
    pub committed: Option<Calculation>,
}

impl Transition {
    fn settled(state: CalculatorState) -> Self {
        Self {
            state,
            committed: None,
        }
    }
}

pub fn evolve(state: CalculatorState, input: CalculatorInput) -> Transition {
    match input {
        CalculatorInput::Digit(digit) => Transition::settled(enter_digit(state, digit)),
        CalculatorInput::Decimal => Transition::settled(enter_decimal(state)),
        CalculatorInput::Operator(operator) => choose_operator(state, operator),
        CalculatorInput::Equals => equals(state),
        CalculatorInput::Clear => Transition::settled(CalculatorState::initial()),
        CalculatorInput::Negate => {
            if state.current_value == "0" {
                return Transition::settled(state);
            }
            let current_value = rescale(&state.current_value, |n| n * -1.0);
            Transition::settled(CalculatorState {
                current_value,
                ..state
            })
        }
        CalculatorInput::Percent => {
            let current_value = rescale(&state.current_value, |n| n / 100.0);
            Transition::settled(CalculatorState {
                current_value,
                ..state
            })
        }
    }
}

/// The next state only, for callers that do not track committed calculations.
pub fn transition(state: CalculatorState, input: CalculatorInput) -> CalculatorState {
    evolve(state, input).state
}

fn enter_digit(state: CalculatorState, digit: u8) -> CalculatorState {
    let Some(digit) = char::from_digit(u32::from(digit), 10) else {
        return state;
    };

    if state.should_reset_display {
        return CalculatorState {
            current_value: digit.to_string(),
            should_reset_display: false,
            ..state
        };
    }
    if state.current_value == "0" {
        return CalculatorState {
            current_value: digit.to_string(),
            ..state
        };
    }
    if state.current_value.len() >= MAX_ENTRY_LENGTH {
        return state;
    }

    let mut current_value = state.current_value;
    current_value.push(digit);
    CalculatorState {
        current_value,
        ..state
    }
}

fn enter_decimal(state: CalculatorState) -> CalculatorState {
    if state.should_reset_display {
        return CalculatorState {
            current_value: "0.".to_string(),
            should_reset_display: false,
            ..state
        };
    }
    if state.current_value.contains('.') {
        return state;
    }

    let mut current_value = state.current_value;
    current_value.push('.');
    CalculatorState {
        current_value,
        ..state
    }
}

fn choose_operator(state: CalculatorState, operator: Operator) -> Transition {
    match state.operator {
        Some(pending) if !state.should_reset_display => {
            let calculation = commit(&state.previous_value, &state.current_value, pending);
            Transition {
                state: CalculatorState {
                    current_value: calculation.result.clone(),
                    previous_value: calculation.result.clone(),
                    operator: Some(operator),
                    should_reset_display: true,
                },
                committed: Some(calculation),
            }
        }
        _ => Transition::settled(CalculatorState {
            previous_value: state.current_value.clone(),
            operator: Some(operator),
            should_reset_display: true,
            ..state
        }),
    }
}

fn equals(state: CalculatorState) -> Transition {
    match state.operator {
        Some(pending) if !state.previous_value.is_empty() => {
            let calculation = commit(&state.previous_value, &state.current_value, pending);
            Transition {
                state: CalculatorState {
                    current_value: calculation.result.clone(),
                    previous_value: String::new(),
                    operator: None,
                    should_reset_display: true,
                },
                committed: Some(calculation),
            }
        }
        _ => Transition::settled(state),
    }
}

// Only finite numerals go through the formatter, which would turn anything else into "0".
// An overflow to infinity is displayed as the error sentinel.
fn commit(previous: &str, current: &str, operator: Operator) -> Calculation {
    let outcome = evaluate(previous, current, operator);
    let result = match parse_numeral(&outcome) {
        Some(_) => format_number(&outcome),
        None => ERROR_SENTINEL.to_string(),
    };
    Calculation {
        previous: previous.to_string(),
        operator,
        current: current.to_string(),
        result,
    }
}

fn rescale(value: &str, apply: impl Fn(f64) -> f64) -> String {
    match parse_numeral(value) {
        Some(number) => format_number(&number_to_string(apply(number))),
        None => "0".to_string(),
    }
}
