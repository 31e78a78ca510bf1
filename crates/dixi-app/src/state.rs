use std::sync::Arc;

use dixi_api::{DictionaryApi, HttpDictionaryClient};
use dixi_config::Config;
use dixi_core::{
    ColorSchemeSignal, DarkModeFlag, EnvColorScheme, FileStorage, KeyValueStorage, MemoryStorage,
    RecentSearches, ThemeStore,
};

use crate::render::Renderer;

/// Long-lived services shared by every task
pub struct AppState {
    pub config: Config,
    pub api: Arc<dyn DictionaryApi>,
    pub theme: ThemeStore,
    pub recent: RecentSearches,
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let storage: Arc<dyn KeyValueStorage> = match config.storage.resolve_data_dir() {
            Some(dir) => {
                let storage = FileStorage::new(dir);
                tracing::info!("Preferences stored in {}", storage.path().display());
                Arc::new(storage)
            }
            None => {
                tracing::warn!("No data directory available, preferences will not persist");
                Arc::new(MemoryStorage::new())
            }
        };

        let api = HttpDictionaryClient::from_config(&config.network, config.search.suggestion_limit)?;
        let signal = EnvColorScheme::from_env(config.ui.prefers_dark);

        Ok(Self::assemble(config, storage, Arc::new(api), &signal))
    }

    /// Wire the services from already-built parts
    pub fn assemble(
        config: Config,
        storage: Arc<dyn KeyValueStorage>,
        api: Arc<dyn DictionaryApi>,
        signal: &dyn ColorSchemeSignal,
    ) -> Self {
        let dark_mode = DarkModeFlag::new();
        let theme = ThemeStore::init(storage.clone(), signal, Arc::new(dark_mode.clone()));
        let recent = RecentSearches::with_capacity(storage, config.storage.recent_capacity);

        Self {
            config,
            api,
            theme,
            recent,
            renderer: Renderer::new(dark_mode),
        }
    }
}
