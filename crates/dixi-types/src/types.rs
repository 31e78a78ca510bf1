use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dictionary entry as served by the remote API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub id: Uuid,
    pub headword: String,
    pub pronunciation: Option<String>,
    pub part_of_speech: Option<String>,
    pub inflections: Option<String>,
    pub definition: Option<String>,
    pub translation_ro: Option<String>,
    pub translation_en: Option<String>,
    pub translation_fr: Option<String>,
    pub etymology: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub expressions: Vec<String>,
    #[serde(default)]
    pub related_terms: Vec<String>,
    pub context: Option<String>,
    pub source: Option<String>,
    pub source_url: Option<String>,
}

/// Search hit with the server-side relevance score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub entry: DictionaryEntry,
    pub score: f32,
    pub match_type: MatchType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Prefix,
    Contains,
    Fuzzy,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Prefix => "prefix",
            MatchType::Contains => "contains",
            MatchType::Fuzzy => "fuzzy",
        }
    }
}

/// Autocomplete item, order is the server ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub headword: String,
    pub part_of_speech: Option<String>,
}

impl Suggestion {
    pub fn new(headword: impl Into<String>) -> Self {
        Self {
            headword: headword.into(),
            part_of_speech: None,
        }
    }

    pub fn with_part_of_speech(mut self, pos: impl Into<String>) -> Self {
        self.part_of_speech = Some(pos.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterCount {
    pub letter: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosCount {
    pub part_of_speech: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub total_entries: i64,
    #[serde(default)]
    pub entries_by_letter: Vec<LetterCount>,
    #[serde(default)]
    pub entries_by_pos: Vec<PosCount>,
}

/// Response envelope shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

/// One page of entries for a letter
#[derive(Debug, Clone)]
pub struct LetterPage {
    pub entries: Vec<DictionaryEntry>,
    pub total: i64,
}

/// Optional filters for a full search
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub lang: Option<String>,
    pub pos: Option<String>,
    pub limit: Option<u32>,
}
