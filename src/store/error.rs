use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Question and answer required")]
    Validation,

    #[error("Duplicate question")]
    Duplicate,

    #[error("No questions available")]
    EmptyStore,

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed question data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Question store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Errors caused by the caller's input rather than by the store itself.
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::Validation | StoreError::Duplicate)
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
