mod client;

pub use client::HttpDictionaryClient;

use dixi_types::{
    DictionaryEntry, DictionaryStats, LetterCount, LetterPage, SearchOptions, SearchResult,
    Suggestion,
};
use uuid::Uuid;

/// Remote dictionary service interface
#[async_trait::async_trait]
pub trait DictionaryApi: Send + Sync {
    /// Ranked full-text search
    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchResult>, ApiError>;

    /// Autocomplete headwords for a partial query
    async fn suggestions(&self, query: &str) -> Result<Vec<Suggestion>, ApiError>;

    async fn entry(&self, id: Uuid) -> Result<DictionaryEntry, ApiError>;

    /// Word of the day
    async fn random_entry(&self) -> Result<DictionaryEntry, ApiError>;

    async fn letters(&self) -> Result<Vec<LetterCount>, ApiError>;

    async fn entries_by_letter(
        &self,
        letter: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<LetterPage, ApiError>;

    async fn stats(&self) -> Result<DictionaryStats, ApiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API error: {status} ({endpoint})")]
    Status { status: u16, endpoint: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}
