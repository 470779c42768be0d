use crate::modules::calculator::core::evolve::evolve;
use crate::modules::calculator::core::history::Calculation;
use crate::modules::calculator::core::input::CalculatorInput;
use crate::modules::calculator::core::operator::Operator;
use crate::modules::calculator::core::state::CalculatorState;

pub fn parse_tokens(tokens: &[&str]) -> Vec<CalculatorInput> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<CalculatorInput>()
                .unwrap_or_else(|e| panic!("fixture token: {e}"))
        })
        .collect()
}

/// Folds the tokens over the initial state, collecting every committed calculation.
pub fn replay(tokens: &[&str]) -> (CalculatorState, Vec<Calculation>) {
    replay_from(CalculatorState::initial(), tokens)
}

pub fn replay_from(
    state: CalculatorState,
    tokens: &[&str],
) -> (CalculatorState, Vec<Calculation>) {
    parse_tokens(tokens)
        .into_iter()
        .fold((state, Vec::new()), |(state, mut committed), input| {
            let transition = evolve(state, input);
            committed.extend(transition.committed);
            (transition.state, committed)
        })
}

pub fn state_with(
    current_value: &str,
    previous_value: &str,
    operator: Option<Operator>,
    should_reset_display: bool,
) -> CalculatorState {
    CalculatorState {
        current_value: current_value.to_string(),
        previous_value: previous_value.to_string(),
        operator,
        should_reset_display,
    }
}
