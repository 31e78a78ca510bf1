use std::sync::Arc;

use async_trait::async_trait;
use dixi_api::{ApiError, DictionaryApi};
use dixi_types::Suggestion;

/// Where the suggestion dropdown gets its rows from
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<Vec<Suggestion>, ApiError>;
}

/// Shared handle accepted by the controller
pub type SharedSource = Arc<dyn SuggestionSource>;

/// Serves suggestions from the remote dictionary API
#[derive(Clone)]
pub struct ApiSuggestions(Arc<dyn DictionaryApi>);

impl ApiSuggestions {
    pub fn new(api: Arc<dyn DictionaryApi>) -> Self {
        Self(api)
    }

    pub fn shared(api: Arc<dyn DictionaryApi>) -> SharedSource {
        Arc::new(Self::new(api))
    }
}

#[async_trait]
impl SuggestionSource for ApiSuggestions {
    async fn lookup(&self, query: &str) -> Result<Vec<Suggestion>, ApiError> {
        self.0.suggestions(query).await
    }
}
