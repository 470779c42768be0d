// End to end in memory test for the calculator input flow, through the public API only.

use calculator::modules::calculator::adapters::outbound::history_repository::KeyValueHistoryRepository;
use calculator::modules::calculator::core::evaluate::evaluate;
use calculator::modules::calculator::core::format::{format_number, strip_trailing_zeros};
use calculator::modules::calculator::core::input::CalculatorInput;
use calculator::modules::calculator::core::operator::Operator;
use calculator::modules::calculator::core::state::CalculatorState;
use calculator::modules::calculator::use_cases::handle_input::handler::CalculatorSession;
use calculator::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use rstest::rstest;
use std::sync::Arc;

fn new_session() -> CalculatorSession<KeyValueHistoryRepository<InMemoryKeyValueStore>> {
    let store = Arc::new(InMemoryKeyValueStore::new());
    CalculatorSession::new(Arc::new(KeyValueHistoryRepository::new(store)))
}

#[rstest]
#[case("5", "3", Operator::Add, "8")]
#[case("10", "4", Operator::Subtract, "6")]
#[case("6", "7", Operator::Multiply, "42")]
#[case("15", "3", Operator::Divide, "5")]
#[case("10", "0", Operator::Divide, "Error")]
#[case("0", "0", Operator::Divide, "Error")]
fn evaluates_the_four_operations(
    #[case] previous: &str,
    #[case] current: &str,
    #[case] operator: Operator,
    #[case] expected: &str,
) {
    assert_eq!(evaluate(previous, current, operator), expected);
}

#[rstest]
fn formats_numbers_for_display() {
    assert_eq!(format_number("0"), "0");
    assert_eq!(format_number("123"), "123");
    assert!(format_number("1000000000").contains('e'));
    assert_eq!(strip_trailing_zeros("5.00"), "5");
    assert_eq!(strip_trailing_zeros("3.50"), "3.5");
    assert_eq!(strip_trailing_zeros("42"), "42");
}

#[tokio::test]
async fn computes_a_chain_and_records_each_commit() {
    let session = new_session();
    for token in ["1", "2", "+", "8", "/", "4", "=", "negate"] {
        session.handle_input(token).await;
    }

    let view = session.view().await;
    assert_eq!(view.display_value, "-5");
    assert_eq!(view.selected_operator, None);
    let recorded: Vec<_> = view
        .history
        .iter()
        .map(|item| (item.expression.as_str(), item.result.as_str()))
        .collect();
    assert_eq!(recorded, vec![("20 / 4", "5"), ("12 + 8", "20")]);
}

#[tokio::test]
async fn clear_returns_to_the_initial_state_but_keeps_history() {
    let session = new_session();
    for token in ["9", "-", "4", "=", "7", "*"] {
        session.handle_input(token).await;
    }
    session.dispatch(CalculatorInput::Clear).await;

    assert_eq!(session.state().await, CalculatorState::initial());
    assert_eq!(session.history().await.len(), 1);
}
