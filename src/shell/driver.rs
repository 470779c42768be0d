use crate::modules::calculator::use_cases::handle_input::handler::CalculatorSession;
use crate::modules::calculator::use_cases::handle_input::history_port::HistoryRepository;
use crate::modules::calculator::use_cases::handle_input::view::CalculatorView;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const HISTORY_COMMAND: &str = "history";
pub const CLEAR_HISTORY_COMMAND: &str = "clear-history";

/// Feeds one token per line into the session and writes the display after each line.
pub async fn run<THistory, R, W>(
    session: &CalculatorSession<THistory>,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    THistory: HistoryRepository + 'static,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let token = line.trim();
        match token {
            "" => continue,
            HISTORY_COMMAND => {
                let rendered = render_history(&session.view().await);
                output.write_all(rendered.as_bytes()).await?;
            }
            CLEAR_HISTORY_COMMAND => {
                session.clear_history().await;
                output.write_all(b"history cleared\n").await?;
            }
            _ => {
                session.handle_input(token).await;
                let rendered = render_display(&session.view().await);
                output.write_all(rendered.as_bytes()).await?;
            }
        }
        output.flush().await?;
    }
    Ok(())
}

pub fn render_display(view: &CalculatorView) -> String {
    match view.selected_operator {
        Some(operator) => format!("{} [{}]\n", view.display_value, operator),
        None => format!("{}\n", view.display_value),
    }
}

pub fn render_history(view: &CalculatorView) -> String {
    if view.history.is_empty() {
        return "no history\n".to_string();
    }
    view.history
        .iter()
        .map(|item| format!("{} = {}\n", item.expression, item.result))
        .collect()
}
