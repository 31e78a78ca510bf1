use dixi_search::{Direction, SuggestionController};
use dixi_types::InputEvent;
use kanal::AsyncSender;

use super::search::run_search;
use crate::state::AppState;

/// Drive the suggestion controller; a commit runs a search
pub async fn handle_input(
    state: &AppState,
    suggestions: &SuggestionController,
    app_to_ui_tx: &AsyncSender<String>,
    input: InputEvent,
) -> anyhow::Result<()> {
    let committed = match input {
        InputEvent::Text(text) => {
            suggestions.set_text(text);
            None
        }
        InputEvent::MoveUp => {
            suggestions.move_selection(Direction::Up);
            None
        }
        InputEvent::MoveDown => {
            suggestions.move_selection(Direction::Down);
            None
        }
        InputEvent::Escape => {
            suggestions.dismiss();
            None
        }
        InputEvent::Focus => {
            suggestions.focus();
            None
        }
        InputEvent::Blur => {
            suggestions.blur();
            None
        }
        InputEvent::Submit => suggestions.commit(),
        InputEvent::Pick(index) => {
            let picked = suggestions.select_suggestion_at(index);
            if picked.is_none() {
                app_to_ui_tx
                    .send(state.renderer.notice(&format!("No suggestion {}.", index + 1)))
                    .await?;
            }
            picked
        }
    };

    if let Some(query) = committed {
        run_search(state, app_to_ui_tx, &query).await?;
    }
    Ok(())
}
