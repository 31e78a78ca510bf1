use kanal::AsyncSender;
use uuid::Uuid;

use crate::state::AppState;

/// Entries shown per `:letter` page
pub const PAGE_SIZE: u32 = 50;

pub async fn handle_word(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<String>,
    id: Uuid,
) -> anyhow::Result<()> {
    let output = match state.api.entry(id).await {
        Ok(entry) => state.renderer.entry(&entry),
        Err(e) if e.is_not_found() => state
            .renderer
            .error("Word not found. The word you're looking for doesn't exist in our dictionary."),
        Err(e) => {
            tracing::warn!("Failed to load entry {}: {}", id, e);
            state.renderer.error("Could not load this word. Please try again.")
        }
    };

    app_to_ui_tx.send(output).await?;
    Ok(())
}

/// Word of the day
pub async fn handle_random_word(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<String>,
) -> anyhow::Result<()> {
    let output = match state.api.random_entry().await {
        Ok(entry) => format!(
            "{}\n{}",
            state.renderer.notice("Word of the day"),
            state.renderer.entry(&entry)
        ),
        Err(e) => {
            tracing::warn!("Failed to load word of the day: {}", e);
            state.renderer.error("Could not load the word of the day.")
        }
    };

    app_to_ui_tx.send(output).await?;
    Ok(())
}

pub async fn handle_letters(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<String>,
) -> anyhow::Result<()> {
    let output = match state.api.letters().await {
        Ok(letters) => state.renderer.letters(&letters),
        Err(e) => {
            tracing::warn!("Failed to load letters: {}", e);
            state.renderer.error("Could not load the letter index.")
        }
    };

    app_to_ui_tx.send(output).await?;
    Ok(())
}

/// One page of entries starting with `letter`, `page` is 1-based
pub async fn handle_letter(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<String>,
    letter: &str,
    page: u32,
) -> anyhow::Result<()> {
    let page = page.max(1);
    let offset = (page - 1).saturating_mul(PAGE_SIZE);

    let output = match state
        .api
        .entries_by_letter(letter, Some(PAGE_SIZE), Some(offset))
        .await
    {
        Ok(entries) => {
            let pages = page_count(entries.total, PAGE_SIZE);
            state.renderer.letter_page(letter, &entries, page, pages)
        }
        Err(e) => {
            tracing::warn!("Failed to browse letter '{}': {}", letter, e);
            state.renderer.error("Could not load entries for this letter.")
        }
    };

    app_to_ui_tx.send(output).await?;
    Ok(())
}

pub async fn handle_stats(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<String>,
) -> anyhow::Result<()> {
    let output = match state.api.stats().await {
        Ok(stats) => state.renderer.stats(&stats),
        Err(e) => {
            tracing::warn!("Failed to load stats: {}", e);
            state.renderer.error("Could not load dictionary statistics.")
        }
    };

    app_to_ui_tx.send(output).await?;
    Ok(())
}

fn page_count(total: i64, page_size: u32) -> u32 {
    let total = u32::try_from(total.max(0)).unwrap_or(u32::MAX);
    total.div_ceil(page_size).max(1)
}
