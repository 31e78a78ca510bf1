use serde::{Deserialize, Serialize};

use crate::{Lookup, parse_or};

fn default_api_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

/// Remote dictionary API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Base path every endpoint is appended to, without a trailing slash
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl NetworkConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        let api_url = lookup("DIXI_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(default_api_url);

        Self {
            api_url,
            timeout_seconds: parse_or(lookup, "DIXI_TIMEOUT_SECONDS", default_timeout_seconds()),
        }
    }
}
