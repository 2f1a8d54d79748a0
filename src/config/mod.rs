//! Configuration management for the typewriter

mod keys;

pub use keys::{Action, KeyBindings, key_to_string};

use crate::app::Mode;
use crate::paths;
use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Cursor blink half-period, matching the usual terminal caret rate
pub const DEFAULT_BLINK_INTERVAL_MS: u64 = 530;

/// Shortest blink interval accepted; the event loop polls at this rate
pub const MIN_BLINK_INTERVAL_MS: u64 = 50;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Backspace mode selected at startup
    #[serde(default)]
    pub mode: Mode,

    /// How long the cursor stays on (and off) per blink, in milliseconds
    #[serde(default = "default_blink_interval")]
    pub blink_interval_ms: u64,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

const fn default_blink_interval() -> u64 {
    DEFAULT_BLINK_INTERVAL_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            blink_interval_ms: default_blink_interval(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Check values serde cannot constrain
    ///
    /// # Errors
    ///
    /// Returns an error if the blink interval is below [`MIN_BLINK_INTERVAL_MS`]
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.blink_interval_ms >= MIN_BLINK_INTERVAL_MS,
            "blink_interval_ms must be at least {MIN_BLINK_INTERVAL_MS}, got {}",
            self.blink_interval_ms
        );
        Ok(())
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = self.to_json()?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Write this configuration as a new config file
    ///
    /// An existing file is left alone unless `force` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists and `force` is not set, or if writing fails
    pub fn init_file(&self, path: &Path, force: bool) -> Result<()> {
        ensure!(
            force || !path.exists(),
            "Config already exists at {} (pass --force to overwrite)",
            path.display()
        );
        self.save_to(path)?;
        info!(path = %path.display(), "Wrote config");
        Ok(())
    }

    /// Pretty-printed JSON form of this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("typewriter")
            .join("config.json")
    }
}
