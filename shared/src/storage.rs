use std::collections::HashMap;
use thiserror::Error;

/// Flag key: holds the literal string `"true"` once a vote has been cast.
pub const VOTED_KEY: &str = "election-voted";
/// Tally key: JSON array of `{id, votes}` pairs, rewritten on every vote.
pub const VOTES_KEY: &str = "election-votes";
/// Set to `"true"` when the user asked not to see the open-in-app prompt again.
pub const DISMISS_OPEN_APP_KEY: &str = "dismiss-open-app-modal";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("durable storage is unavailable in this environment")]
    Unavailable,
    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

/// Origin-scoped durable key-value storage, the one external collaborator of
/// the election widget. Availability is optional: an implementation backed by
/// a missing store reports `is_available() == false` and fails every access
/// with [`StoreError::Unavailable`], and the widget degrades to no-ops.
pub trait VoteStore {
    fn is_available(&self) -> bool;
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and any host without durable storage. Construct
/// with [`MemoryStore::unavailable`] to model the store being absent.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    available: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { entries: HashMap::new(), available: true }
    }

    pub fn unavailable() -> Self {
        Self { entries: HashMap::new(), available: false }
    }
}

impl VoteStore for MemoryStore {
    fn is_available(&self) -> bool {
        self.available
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        self.entries.remove(key);
        Ok(())
    }
}
