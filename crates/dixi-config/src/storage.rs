use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{Lookup, parse_or};

fn default_recent_capacity() -> usize {
    10
}

/// Where preferences live on disk and how much history is kept
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Explicit data directory; `None` means the platform default
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_recent_capacity")]
    pub recent_capacity: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            recent_capacity: default_recent_capacity(),
        }
    }
}

impl StorageConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            data_dir: lookup("DIXI_DATA_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            recent_capacity: parse_or(lookup, "DIXI_RECENT_CAPACITY", default_recent_capacity()),
        }
    }

    /// Configured data directory, else the per-user platform data dir
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(|| {
            ProjectDirs::from("", "", "dixi").map(|dirs| dirs.data_dir().to_path_buf())
        })
    }
}
