use anyhow::{Context, Result, anyhow};
use aurora_store::DEFAULT_STORAGE_KEY;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::types::LogLevel;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_NOTIFICATION_MS: u64 = 2200;
pub const DEFAULT_NOTIFICATION_FADE_MS: u64 = 180;

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. AURORA_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.aurora
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("AURORA_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("aurora"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".aurora"));
    }

    Err(anyhow!(
        "Could not determine data directory: no HOME directory or XDG data directory found"
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key the user collection is stored under.
    pub storage_key: String,
    /// How long a notification stays fully visible.
    pub notification_ms: u64,
    /// Fade-out after `notification_ms` before it is removed.
    pub notification_fade_ms: u64,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            notification_ms: DEFAULT_NOTIFICATION_MS,
            notification_fade_ms: DEFAULT_NOTIFICATION_FADE_MS,
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn notification_fade(&self) -> Duration {
        Duration::from_millis(self.notification_fade_ms)
    }
}
