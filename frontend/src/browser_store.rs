use shared::storage::{StoreError, VoteStore};

/// [`VoteStore`] over the origin's `localStorage`. A host without it (old
/// webview, storage disabled) is reported as unavailable rather than an
/// error, and the election widget degrades to no-ops.
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

impl BrowserStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VoteStore for BrowserStore {
    fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        Ok(storage.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::WriteFailed(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|e| StoreError::WriteFailed(format!("{e:?}")))
    }
}
