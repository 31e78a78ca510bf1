use serde::{Deserialize, Serialize};

use crate::{Lookup, parse_or};

fn default_debounce_ms() -> u64 {
    200
}

fn default_min_query_len() -> usize {
    2
}

fn default_blur_grace_ms() -> u64 {
    200
}

fn default_suggestion_limit() -> u32 {
    10
}

fn default_search_limit() -> u32 {
    20
}

/// Search input and suggestion dropdown tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a suggestion fetch is issued
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Inputs shorter than this (in chars) never fetch suggestions, at least 1
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// Delay between losing focus and closing the dropdown
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: u32,
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            blur_grace_ms: default_blur_grace_ms(),
            suggestion_limit: default_suggestion_limit(),
            search_limit: default_search_limit(),
        }
    }
}

impl SearchConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            debounce_ms: parse_or(lookup, "DIXI_DEBOUNCE_MS", default_debounce_ms()),
            min_query_len: parse_or(lookup, "DIXI_MIN_QUERY_LEN", default_min_query_len()).max(1),
            blur_grace_ms: parse_or(lookup, "DIXI_BLUR_GRACE_MS", default_blur_grace_ms()),
            suggestion_limit: parse_or(lookup, "DIXI_SUGGESTION_LIMIT", default_suggestion_limit()),
            search_limit: parse_or(lookup, "DIXI_SEARCH_LIMIT", default_search_limit()),
        }
    }
}
