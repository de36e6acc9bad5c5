//! Persistence backends for the question store.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;

use super::error::{Result, StoreError};
use crate::models::QuestionRecord;

/// Where a [`QuestionStore`](super::QuestionStore) keeps its records.
///
/// `save` always receives the complete sequence and replaces whatever was
/// stored before.
pub trait QuestionStorage: Send + Sync {
    /// Returns `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<QuestionRecord>>>;

    fn save(&self, records: &[QuestionRecord]) -> Result<()>;
}

/// A pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuestionStorage for FileStorage {
    fn load(&self) -> Result<Option<Vec<QuestionRecord>>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let records = serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        Ok(Some(records))
    }

    fn save(&self, records: &[QuestionRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        // An empty parent means the path is relative to the working directory.
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;

        // Write next to the target so the final rename stays on one filesystem.
        let mut temp = NamedTempFile::new_in(parent).map_err(|e| StoreError::io(parent, e))?;
        temp.write_all(json.as_bytes())
            .map_err(|e| StoreError::io(temp.path(), e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| StoreError::io(temp.path(), e))?;
        temp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        tracing::debug!("Saved {} questions to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// Keeps records in memory only. Starts out empty, like a missing file.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<Option<Vec<QuestionRecord>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `records`.
    pub fn with_records(records: Vec<QuestionRecord>) -> Self {
        Self {
            records: Mutex::new(Some(records)),
        }
    }
}

impl QuestionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<QuestionRecord>>> {
        let records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.clone())
    }

    fn save(&self, records: &[QuestionRecord]) -> Result<()> {
        let mut stored = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        *stored = Some(records.to_vec());
        Ok(())
    }
}
