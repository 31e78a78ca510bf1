use std::sync::Arc;

use dixi_search::SuggestionSession;
use dixi_types::Suggestion;
use kanal::AsyncSender;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// What the dropdown currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownView {
    pub rows: Vec<Suggestion>,
    pub selected: Option<usize>,
}

impl DropdownView {
    pub fn of(session: &SuggestionSession) -> Self {
        Self {
            rows: session.visible_suggestions().to_vec(),
            selected: session.selected_index,
        }
    }
}

/// Redraw the dropdown whenever its visible rows or highlight change.
///
/// Ends when the controller goes away or on cancellation.
pub async fn suggestion_view(
    state: Arc<AppState>,
    mut session_rx: watch::Receiver<SuggestionSession>,
    app_to_ui_tx: AsyncSender<String>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut shown = DropdownView::default();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            changed = session_rx.changed() => {
                if changed.is_err() {
                    tracing::debug!("Suggestion controller gone, view stopping");
                    break;
                }
            }
        }

        let view = DropdownView::of(&session_rx.borrow_and_update());
        if view == shown {
            continue;
        }

        if !view.rows.is_empty() {
            app_to_ui_tx
                .send(state.renderer.dropdown(&view.rows, view.selected))
                .await?;
        }
        shown = view;
    }

    Ok(())
}
