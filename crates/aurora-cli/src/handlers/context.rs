use aurora_store::{FileStorage, UserRepository, UserStore};
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Everything a handler needs: where the data lives and how it is configured.
pub struct HandlerContext {
    data_dir: PathBuf,
    pub config: Config,
}

impl HandlerContext {
    pub fn new(data_dir: PathBuf, config: Config) -> Self {
        Self { data_dir, config }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Repository over `<data_dir>/storage.json` under the configured key.
    pub fn repository(&self) -> UserRepository {
        let storage = FileStorage::in_dir(&self.data_dir);
        UserRepository::new(UserStore::with_key(storage, &self.config.storage_key))
    }
}
