use kanal::AsyncSender;

use crate::state::AppState;

pub async fn handle_recent(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<String>,
) -> anyhow::Result<()> {
    let recent = state.recent.list();
    app_to_ui_tx.send(state.renderer.recent(&recent)).await?;
    Ok(())
}

pub async fn handle_theme_toggle(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<String>,
) -> anyhow::Result<()> {
    let theme = state.theme.toggle();
    tracing::info!("Theme switched to {}", theme);

    app_to_ui_tx
        .send(state.renderer.notice(&format!("Theme: {}", theme)))
        .await?;
    Ok(())
}
