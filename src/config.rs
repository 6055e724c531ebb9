// src/config.rs

//! Application configuration.
//!
//! Read from `determined.yaml` in the working directory (or the file named by
//! `DETERMINED_CONFIG`). Every field has a default, so a missing file or a
//! partial file is fine. A handful of environment variables override the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DeterminedError, Result};

pub const CONFIG_PATH_ENV: &str = "DETERMINED_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "determined.yaml";

pub const AVATAR_CACHE_KEY: &str = "determined_user_avatar";

const DEFAULT_AVATAR_PROMPT: &str = "A relatable meme style cat that looks extremely tired, \
with heavy dark under-eye circles, looking straight at the camera, digital illustration, \
simple clean background, expressive and humorous.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    /// Simulated round-trip before a new quest replaces the current one.
    pub create_latency_ms: u64,
    /// Simulated round-trip before a penalty lands.
    pub penalty_latency_ms: u64,
    /// Calendar days after this date with no check-in render as missed.
    /// Stand-in for a real commitment start date.
    pub missed_after: NaiveDate,
    pub avatar: AvatarConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub model: String,
    pub prompt: String,
    pub cache_key: String,
    pub timeout_secs: u64,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("./db/determined.db"),
            log_dir: PathBuf::from("./logs"),
            create_latency_ms: 1500,
            penalty_latency_ms: 800,
            missed_after: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            avatar: AvatarConfig::default(),
        }
    }
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            prompt: DEFAULT_AVATAR_PROMPT.to_string(),
            cache_key: AVATAR_CACHE_KEY.to_string(),
            timeout_secs: 30,
            api_key: None,
        }
    }
}

impl AppConfig {
    /// Load from the configured path, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = Self::load_from(&path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Read `path` if it exists, defaults otherwise.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Environment lookups go through `lookup` so tests need not touch the
    /// process environment.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")) {
            self.avatar.api_key = Some(key);
        }
        if let Some(path) = non_empty("DETERMINED_DB_PATH") {
            self.database_path = PathBuf::from(path);
        }
        if let Some(dir) = non_empty("DETERMINED_LOG_DIR") {
            self.log_dir = PathBuf::from(dir);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.avatar.enabled && self.avatar.endpoint.trim().is_empty() {
            return Err(DeterminedError::ConfigError(
                "avatar.endpoint must be set when the avatar is enabled".to_string(),
            ));
        }
        if self.avatar.cache_key.trim().is_empty() {
            return Err("avatar.cache_key must not be empty".into());
        }
        Ok(())
    }

    pub fn create_latency(&self) -> Duration {
        Duration::from_millis(self.create_latency_ms)
    }

    pub fn penalty_latency(&self) -> Duration {
        Duration::from_millis(self.penalty_latency_ms)
    }
}
