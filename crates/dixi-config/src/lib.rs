use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::search::SearchConfig;
use self::storage::StorageConfig;
use self::ui::UiConfig;

pub mod network;
pub mod search;
pub mod storage;
pub mod ui;

/// Source of raw configuration values, keyed by variable name
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub search: SearchConfig,
    pub storage: StorageConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Build the config from process environment variables
    pub fn new() -> Self {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        Config {
            network: NetworkConfig::from_lookup(lookup),
            search: SearchConfig::from_lookup(lookup),
            storage: StorageConfig::from_lookup(lookup),
            ui: UiConfig::from_lookup(lookup),
        }
    }
}

/// Parse `key` from the lookup, falling back to `default` when absent or malformed
pub(crate) fn parse_or<T: FromStr>(lookup: Lookup<'_>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
