use std::sync::Arc;

use dixi_search::SuggestionController;
use dixi_types::{AppEvent, Command};
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod browse;
pub mod input;
pub mod preferences;
pub mod search;

use browse::{handle_letter, handle_letters, handle_random_word, handle_stats, handle_word};
use input::handle_input;
use preferences::{handle_recent, handle_theme_toggle};
use search::run_search;

/// App's main loop, owns the suggestion controller
pub async fn event_loop(
    state: Arc<AppState>,
    suggestions: SuggestionController,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<String>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("Event loop started");

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        if event == AppEvent::Quit {
            tracing::info!("Quit requested");
            break;
        }
        handle_event(&state, &suggestions, &app_to_ui_tx, event).await?;
    }

    suggestions.teardown();
    Ok(())
}

pub async fn handle_event(
    state: &AppState,
    suggestions: &SuggestionController,
    app_to_ui_tx: &AsyncSender<String>,
    event: AppEvent,
) -> anyhow::Result<()> {
    tracing::trace!("Handling {:?}", event);
    match event {
        AppEvent::Input(input) => handle_input(state, suggestions, app_to_ui_tx, input).await?,
        AppEvent::Command(command) => match command {
            Command::Search(query) => run_search(state, app_to_ui_tx, &query).await?,
            Command::Word(id) => handle_word(state, app_to_ui_tx, id).await?,
            Command::RandomWord => handle_random_word(state, app_to_ui_tx).await?,
            Command::Letters => handle_letters(state, app_to_ui_tx).await?,
            Command::Letter { letter, page } => {
                handle_letter(state, app_to_ui_tx, &letter, page).await?
            }
            Command::Stats => handle_stats(state, app_to_ui_tx).await?,
            Command::Recent => handle_recent(state, app_to_ui_tx).await?,
            Command::ToggleTheme => handle_theme_toggle(state, app_to_ui_tx).await?,
            Command::Help => app_to_ui_tx.send(state.renderer.help()).await?,
        },
        AppEvent::Quit => {}
    }

    Ok(())
}
