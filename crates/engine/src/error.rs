// crates/engine/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Every failure is terminal: the run aborts on the first error with a
/// single message, and nothing is retried or skipped per-file.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to open '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
