
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dixi_api::ApiError;
use dixi_types::Suggestion;

use crate::source::SuggestionSource;

/// Scripted suggestion backend: per-query latency and outcome, records every call
#[derive(Default)]
pub(crate) struct ScriptedSource {
    calls: Mutex<Vec<String>>,
    script: Mutex<HashMap<String, (Duration, Option<Vec<Suggestion>>)>>,
}

impl ScriptedSource {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn respond(&self, query: &str, delay_ms: u64, words: &[&str]) {
        let rows = words.iter().map(|w| Suggestion::new(*w)).collect();
        self.script
            .lock()
            .unwrap()
            .insert(query.to_string(), (Duration::from_millis(delay_ms), Some(rows)));
    }

    pub(crate) fn fail(&self, query: &str, delay_ms: u64) {
        self.script
            .lock()
            .unwrap()
            .insert(query.to_string(), (Duration::from_millis(delay_ms), None));
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SuggestionSource for ScriptedSource {
    async fn lookup(&self, query: &str) -> Result<Vec<Suggestion>, ApiError> {
        self.calls.lock().unwrap().push(query.to_string());

        let scripted = self.script.lock().unwrap().get(query).cloned();
        let (delay, outcome) = scripted.unwrap_or((Duration::ZERO, Some(Vec::new())));

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        outcome.ok_or_else(|| ApiError::InvalidResponse("scripted failure".to_string()))
    }
}
