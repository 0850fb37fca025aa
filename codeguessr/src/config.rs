// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::round::MAX_GUESSES_PER_ROUND;
use crate::core::scanner::{MIN_LINES, ScanOptions};
use crate::core::session::{NUM_ROUNDS, SessionSettings};
use crate::error::GameError;

/// File looked up in the game directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "codeguessr.toml";

/// Game settings, as read from `codeguessr.toml`. Missing keys keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub rounds: usize,
    pub max_guesses: usize,
    pub min_lines: usize,
    pub min_line_chars: usize,
    pub include_pattern: Option<String>,
    pub ignore_pattern: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: NUM_ROUNDS,
            max_guesses: MAX_GUESSES_PER_ROUND,
            min_lines: MIN_LINES,
            min_line_chars: 1,
            include_pattern: None,
            ignore_pattern: None,
        }
    }
}

impl GameConfig {
    /// Loads the config for a game over `directory`.
    ///
    /// # Arguments
    ///
    /// * `explicit` - Path given on the command line; must exist
    /// * `directory` - Game directory, searched for [`CONFIG_FILE_NAME`]
    ///
    /// # Returns
    ///
    /// * `Ok(GameConfig)` - The parsed file, or defaults when no file is
    ///   found
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * `explicit` cannot be read
    /// * The file is not valid TOML or has unknown keys
    /// * The values fail [`GameConfig::validate`]
    pub fn load(explicit: Option<&Path>, directory: &Path) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = directory.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML for this struct or its
    /// values fail [`GameConfig::validate`].
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.include_pattern = non_blank(config.include_pattern);
        config.ignore_pattern = non_blank(config.ignore_pattern);
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`GameError::InvalidSettings`] when `rounds` or `max_guesses`
    /// is zero.
    pub fn validate(&self) -> Result<(), GameError> {
        self.session_settings().validate()
    }

    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            min_lines: self.min_lines,
            include_pattern: self.include_pattern.clone(),
            ignore_pattern: self.ignore_pattern.clone(),
        }
    }

    #[must_use]
    pub const fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            rounds: self.rounds,
            max_guesses: self.max_guesses,
            min_line_chars: self.min_line_chars,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
