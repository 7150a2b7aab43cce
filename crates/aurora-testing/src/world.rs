//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use aurora_store::{DEFAULT_STORAGE_KEY, FileStorage, UserStore};
use aurora_types::User;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated data directory for one test.
///
/// # Example
/// ```ignore
/// use assert_cmd::cargo::cargo_bin_cmd;
/// use aurora_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let mut cmd = cargo_bin_cmd!("aurora");
/// world.configure_command(&mut cmd).arg("list");
/// assert!(cmd.output().unwrap().status.success());
/// ```
pub struct TestWorld {
    /// Removed on drop.
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".aurora");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn storage_path(&self) -> PathBuf {
        FileStorage::in_dir(&self.data_dir).path().to_path_buf()
    }

    /// Store `users` under the default key, as a previous run would have.
    pub fn with_users(self, users: &[User]) -> Self {
        self.store_users(DEFAULT_STORAGE_KEY, users)
            .expect("Failed to store users");
        self
    }

    /// Write `config.toml` verbatim.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
        self
    }

    pub fn store_users(&self, key: &str, users: &[User]) -> Result<()> {
        let mut store = UserStore::with_key(FileStorage::in_dir(&self.data_dir), key);
        store.save(users)?;
        Ok(())
    }

    /// Users currently stored under `key`, `None` when absent or unreadable.
    pub fn load_users(&self, key: &str) -> Result<Option<Vec<User>>> {
        let store = UserStore::with_key(FileStorage::in_dir(&self.data_dir), key);
        Ok(store.load()?)
    }

    /// Point a CLI command at this world's data directory.
    ///
    /// The caller provides the base command (e.g., from `cargo_bin_cmd!("aurora")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("AURORA_PATH");

        cmd
    }
}
