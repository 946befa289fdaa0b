//! Storage errors.

/// Errors from the key-value store backends
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored data is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}
