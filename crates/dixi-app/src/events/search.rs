use dixi_types::SearchOptions;
use kanal::AsyncSender;

use crate::state::AppState;

/// Full search for a committed query.
///
/// The query is remembered only when the search found something.
pub async fn run_search(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<String>,
    query: &str,
) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(());
    }

    let options = SearchOptions {
        limit: Some(state.config.search.search_limit),
        ..SearchOptions::default()
    };

    tracing::debug!("Searching for '{}'", query);
    let output = match state.api.search(query, &options).await {
        Ok(results) if results.is_empty() => state.renderer.notice(&format!(
            "No results found for \"{}\". Try a different search term.",
            query
        )),
        Ok(results) => {
            tracing::debug!("{} results for '{}'", results.len(), query);
            state.recent.record(query);
            state.renderer.results(query, &results)
        }
        Err(e) => {
            tracing::warn!("Search for '{}' failed: {}", query, e);
            state
                .renderer
                .error("An error occurred while searching. Please try again.")
        }
    };

    app_to_ui_tx.send(output).await?;
    Ok(())
}
