use std::sync::Arc;

use dixi_search::{ApiSuggestions, SuggestionController, SuggestionSettings};
use dixi_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::{is_interactive, spawn_stdin_reader, ui_loop};
use crate::state::AppState;
use crate::view::suggestion_view;

/// Centralized channel management
pub struct ChannelSet {
    /// Rendered text waiting to be printed
    pub app_to_ui: (AsyncSender<String>, AsyncReceiver<String>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(64),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        let suggestions = SuggestionController::new(
            ApiSuggestions::shared(self.state.api.clone()),
            SuggestionSettings::from(&self.state.config.search),
        );

        // Dropdown renderer
        tasks.spawn(suggestion_view(
            self.state.clone(),
            suggestions.subscribe(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            suggestions,
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.cancel_token.child_token(),
        ));

        if is_interactive() {
            let banner = self
                .state
                .renderer
                .notice("Type to search, an empty line submits. :help lists commands.");
            if let Err(e) = self.channels.app_to_ui.0.try_send(banner) {
                tracing::debug!("Banner dropped: {}", e);
            }
        }

        // Stdin reader
        spawn_stdin_reader(self.channels.ui_to_app.0.clone().to_sync());

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
