use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt storage file {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Unrecognized value: {0:?}")]
    Unrecognized(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of a single preference load or save
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("Storage error for {key}: {source}")]
    Storage { key: String, source: StorageError },

    #[error("Codec error for {key}: {source}")]
    Codec { key: String, source: CodecError },
}
