use aurora_types::{User, users_from_json, users_to_json};
use tracing::{debug, warn};

use crate::Result;
use crate::storage::Storage;

/// Fixed key the collection is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "aurora_people_users_v1";

/// The whole collection as one serialized blob under one key.
pub struct UserStore {
    storage: Box<dyn Storage>,
    key: String,
}

impl UserStore {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: impl Storage + 'static, key: impl Into<String>) -> Self {
        Self {
            storage: Box::new(storage),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// `Ok(None)` when the blob is absent, unparsable, or not an array.
    ///
    /// Only failures of the storage medium itself are errors.
    pub fn load(&self) -> Result<Option<Vec<User>>> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };

        match users_from_json(&raw) {
            Ok(users) => {
                debug!(count = users.len(), "loaded collection");
                Ok(Some(users))
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "stored collection is unreadable");
                Ok(None)
            }
        }
    }

    /// Overwrite the blob with the full collection.
    pub fn save(&mut self, users: &[User]) -> Result<()> {
        let raw = users_to_json(users)?;
        self.storage.set_item(&self.key, &raw)?;
        debug!(count = users.len(), "saved collection");
        Ok(())
    }

    /// Drop the blob so the next read starts uninitialized.
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove_item(&self.key)
    }
}
