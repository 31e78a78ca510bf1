
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dixi_api::{ApiError, DictionaryApi};
use dixi_config::Config;
use dixi_core::{KeyValueStorage, MemoryStorage};
use dixi_types::{
    DictionaryEntry, DictionaryStats, LetterCount, LetterPage, MatchType, SearchOptions,
    SearchResult, Suggestion,
};
use kanal::AsyncReceiver;
use uuid::Uuid;

use crate::state::AppState;

pub(crate) fn entry(headword: &str) -> DictionaryEntry {
    DictionaryEntry {
        id: Uuid::new_v4(),
        headword: headword.to_string(),
        pronunciation: None,
        part_of_speech: Some("noun".to_string()),
        inflections: None,
        definition: None,
        translation_ro: None,
        translation_en: Some(format!("{headword} (en)")),
        translation_fr: None,
        etymology: None,
        examples: Vec::new(),
        expressions: Vec::new(),
        related_terms: Vec::new(),
        context: None,
        source: None,
        source_url: None,
    }
}

/// In-memory dictionary; unknown queries return nothing, failing ones error
#[derive(Default)]
pub(crate) struct FakeApi {
    results: Mutex<HashMap<String, Vec<String>>>,
    suggestions: Mutex<HashMap<String, Vec<String>>>,
    failing: Mutex<Vec<String>>,
    searches: Mutex<Vec<(String, Option<u32>)>>,
    letter_calls: Mutex<Vec<(String, Option<u32>, Option<u32>)>>,
}

impl FakeApi {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn with_results(&self, query: &str, headwords: &[&str]) {
        self.results.lock().unwrap().insert(
            query.to_string(),
            headwords.iter().map(|h| h.to_string()).collect(),
        );
    }

    pub(crate) fn with_suggestions(&self, query: &str, headwords: &[&str]) {
        self.suggestions.lock().unwrap().insert(
            query.to_string(),
            headwords.iter().map(|h| h.to_string()).collect(),
        );
    }

    pub(crate) fn failing_on(&self, query: &str) {
        self.failing.lock().unwrap().push(query.to_string());
    }

    pub(crate) fn searches(&self) -> Vec<(String, Option<u32>)> {
        self.searches.lock().unwrap().clone()
    }

    pub(crate) fn letter_calls(&self) -> Vec<(String, Option<u32>, Option<u32>)> {
        self.letter_calls.lock().unwrap().clone()
    }

    fn fails(&self, query: &str) -> bool {
        self.failing.lock().unwrap().iter().any(|q| q == query)
    }
}

#[async_trait]
impl DictionaryApi for FakeApi {
    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchResult>, ApiError> {
        self.searches
            .lock()
            .unwrap()
            .push((query.to_string(), options.limit));
        if self.fails(query) {
            return Err(ApiError::Status {
                status: 500,
                endpoint: "/search".to_string(),
            });
        }

        let headwords = self.results.lock().unwrap().get(query).cloned();
        Ok(headwords
            .unwrap_or_default()
            .iter()
            .map(|h| SearchResult {
                entry: entry(h),
                score: 1.0,
                match_type: MatchType::Exact,
            })
            .collect())
    }

    async fn suggestions(&self, query: &str) -> Result<Vec<Suggestion>, ApiError> {
        let headwords = self.suggestions.lock().unwrap().get(query).cloned();
        Ok(headwords
            .unwrap_or_default()
            .into_iter()
            .map(Suggestion::new)
            .collect())
    }

    async fn entry(&self, _id: Uuid) -> Result<DictionaryEntry, ApiError> {
        Err(ApiError::Status {
            status: 404,
            endpoint: "/words".to_string(),
        })
    }

    async fn random_entry(&self) -> Result<DictionaryEntry, ApiError> {
        Ok(entry("soare"))
    }

    async fn letters(&self) -> Result<Vec<LetterCount>, ApiError> {
        Ok(vec![
            LetterCount {
                letter: "a".to_string(),
                count: 120,
            },
            LetterCount {
                letter: "b".to_string(),
                count: 80,
            },
        ])
    }

    async fn entries_by_letter(
        &self,
        letter: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<LetterPage, ApiError> {
        self.letter_calls
            .lock()
            .unwrap()
            .push((letter.to_string(), limit, offset));
        Ok(LetterPage {
            entries: vec![entry("cal"), entry("cap")],
            total: 120,
        })
    }

    async fn stats(&self) -> Result<DictionaryStats, ApiError> {
        Err(ApiError::InvalidResponse("stats unavailable".to_string()))
    }
}

pub(crate) struct Harness {
    pub api: Arc<FakeApi>,
    pub storage: Arc<MemoryStorage>,
    pub state: Arc<AppState>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        let api = FakeApi::new();
        let storage = Arc::new(MemoryStorage::new());
        let state = AppState::assemble(
            Config::default(),
            storage.clone() as Arc<dyn KeyValueStorage>,
            api.clone() as Arc<dyn DictionaryApi>,
            &None::<bool>,
        );

        Self {
            api,
            storage,
            state: Arc::new(state),
        }
    }
}

/// Everything printed so far, ANSI codes stripped
pub(crate) fn drain(rx: &AsyncReceiver<String>) -> Vec<String> {
    let mut out = Vec::new();
    while let Ok(Some(line)) = rx.try_recv() {
        out.push(console::strip_ansi_codes(&line).into_owned());
    }
    out
}
