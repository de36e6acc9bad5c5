//! The question store: an in-memory list of [`QuestionRecord`]s kept in sync
//! with a [`QuestionStorage`] backend.

mod error;
mod storage;

pub use error::{Result, StoreError};
pub use storage::{FileStorage, MemoryStorage, QuestionStorage};

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use rand::seq::IndexedRandom;

use crate::models::{default_questions, QuestionRecord};

/// Shared handle to the question list.
///
/// Cloning is cheap; all clones see the same records. Writers are serialised
/// by an internal lock that is held through persistence.
#[derive(Clone)]
pub struct QuestionStore {
    storage: Arc<dyn QuestionStorage>,
    records: Arc<Mutex<Vec<QuestionRecord>>>,
}

impl QuestionStore {
    /// Load the records held by `storage`, seeding and saving the default
    /// set when the storage is empty.
    pub fn load(storage: impl QuestionStorage + 'static) -> Result<Self> {
        let records = match storage.load()? {
            Some(records) => {
                tracing::info!("Loaded {} questions", records.len());
                records
            }
            None => {
                let defaults = default_questions();
                storage.save(&defaults)?;
                tracing::info!("No stored questions found, seeded {} defaults", defaults.len());
                defaults
            }
        };

        Ok(Self {
            storage: Arc::new(storage),
            records: Arc::new(Mutex::new(records)),
        })
    }

    /// Open a store backed by a JSON file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::load(FileStorage::new(path))
    }

    /// Open a store that never touches the disk.
    pub fn open_memory() -> Result<Self> {
        Self::load(MemoryStorage::new())
    }

    /// Pick one record uniformly at random.
    pub fn random(&self) -> Result<QuestionRecord> {
        let records = self.lock()?;
        records
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(StoreError::EmptyStore)
    }

    /// Validate and append a record, then persist the whole list.
    ///
    /// Both fields are trimmed first. If saving fails the record is removed
    /// again so memory never runs ahead of storage.
    pub fn add(&self, question: &str, answer: &str) -> Result<QuestionRecord> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return Err(StoreError::Validation);
        }

        let mut records = self.lock()?;
        if records.iter().any(|r| r.same_question(question)) {
            return Err(StoreError::Duplicate);
        }

        let record = QuestionRecord::new(question, answer);
        records.push(record.clone());

        if let Err(e) = self.storage.save(&records) {
            records.pop();
            return Err(e);
        }

        tracing::info!("Added question: {}", record.question);
        Ok(record)
    }

    /// Snapshot of every record in insertion order.
    pub fn all(&self) -> Result<Vec<QuestionRecord>> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<QuestionRecord>>> {
        self.records.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl std::fmt::Debug for QuestionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self.records.lock().map(|r| r.len()).unwrap_or_default();
        f.debug_struct("QuestionStore").field("len", &len).finish()
    }
}
