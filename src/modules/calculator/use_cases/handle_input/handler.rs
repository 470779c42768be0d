// Calculator session: orchestrates the input flow for one calculator.
//
// Responsibilities
// - Parse input tokens and fold them into the calculator state.
// - Record every committed calculation in the history list, newest first.
// - Load, persist and clear the history through the HistoryRepository port.
//
// Failure policy
// - Persistence failures are logged and leave the in-memory history unchanged; they never
//   reach the caller.

use crate::modules::calculator::core::evolve::evolve;
use crate::modules::calculator::core::history::{Calculation, HistoryItem};
use crate::modules::calculator::core::input::CalculatorInput;
use crate::modules::calculator::core::operator::Operator;
use crate::modules::calculator::core::state::CalculatorState;
use crate::modules::calculator::use_cases::handle_input::history_port::HistoryRepository;
use crate::modules::calculator::use_cases::handle_input::view::CalculatorView;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

pub struct CalculatorSession<THistory>
where
    THistory: HistoryRepository + 'static,
{
    state: Mutex<CalculatorState>,
    history: Mutex<Vec<HistoryItem>>,
    repository: Arc<THistory>,
}

impl<THistory> CalculatorSession<THistory>
where
    THistory: HistoryRepository + 'static,
{
    pub fn new(repository: Arc<THistory>) -> Self {
        Self {
            state: Mutex::new(CalculatorState::initial()),
            history: Mutex::new(Vec::new()),
            repository,
        }
    }

    pub async fn load_history(&self) {
        let mut history = self.history.lock().await;
        match self.repository.load().await {
            Ok(Some(loaded)) => {
                tracing::info!(entries = loaded.len(), "history loaded");
                *history = loaded;
            }
            Ok(None) => tracing::debug!(entries = history.len(), "no stored history"),
            Err(e) => tracing::error!(error = %e, "failed to load history"),
        }
    }

    /// Applies one string token. Tokens outside the input alphabet are ignored.
    pub async fn handle_input(&self, token: &str) {
        match token.parse::<CalculatorInput>() {
            Ok(input) => self.dispatch(input).await,
            Err(e) => tracing::warn!(error = %e, "input ignored"),
        }
    }

    pub async fn dispatch(&self, input: CalculatorInput) {
        let mut state = self.state.lock().await;
        let transition = evolve(std::mem::take(&mut *state), input);
        *state = transition.state;
        tracing::debug!(?input, display = %state.current_value, "input applied");

        let Some(calculation) = transition.committed else {
            return;
        };
        // Acquired before the state is released so commits are recorded in input order.
        let history = self.history.lock().await;
        drop(state);
        self.record(history, &calculation).await;
    }

    pub async fn clear_history(&self) {
        let mut history = self.history.lock().await;
        match self.repository.clear().await {
            Ok(()) => {
                tracing::info!(entries = history.len(), "history cleared");
                history.clear();
            }
            Err(e) => tracing::error!(error = %e, "failed to clear history"),
        }
    }

    pub async fn state(&self) -> CalculatorState {
        self.state.lock().await.clone()
    }

    pub async fn display_value(&self) -> String {
        self.state.lock().await.current_value.clone()
    }

    pub async fn selected_operator(&self) -> Option<Operator> {
        self.state.lock().await.operator
    }

    pub async fn history(&self) -> Vec<HistoryItem> {
        self.history.lock().await.clone()
    }

    pub async fn view(&self) -> CalculatorView {
        let state = self.state().await;
        CalculatorView {
            display_value: state.current_value,
            selected_operator: state.operator,
            history: self.history().await,
        }
    }

    async fn record(
        &self,
        mut history: MutexGuard<'_, Vec<HistoryItem>>,
        calculation: &Calculation,
    ) {
        let item = HistoryItem::record(calculation, Utc::now());
        let mut next = Vec::with_capacity(history.len() + 1);
        next.push(item);
        next.extend(history.iter().cloned());

        match self.repository.save(&next).await {
            Ok(()) => {
                tracing::info!(
                    expression = %next[0].expression,
                    result = %next[0].result,
                    "calculation recorded"
                );
                *history = next;
            }
            Err(e) => tracing::error!(error = %e, "failed to save history"),
        }
    }
}
