use serde::{Deserialize, Serialize};

use crate::Lookup;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Explicit color-scheme preference, overrides terminal detection
    pub prefers_dark: Option<bool>,
}

impl UiConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        let prefers_dark = lookup("DIXI_PREFERS_DARK").and_then(|v| parse_flag(&v));

        Self { prefers_dark }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "dark" => Some(true),
        "0" | "false" | "no" | "light" => Some(false),
        _ => None,
    }
}
