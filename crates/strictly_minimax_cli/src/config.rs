//! Play configuration loaded from TOML and overridden by flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::Player;
use tracing::{debug, info, instrument};

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Mark the human plays in `play`.
    human: Player,

    /// Games to play in `selfplay` and `random`.
    games: u32,

    /// Seed for the random player.
    seed: Option<u64>,

    /// Search root actions in parallel.
    parallel: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: Player::X,
            games: 1,
            seed: None,
            parallel: false,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.games == 0 {
            return Err(ConfigError::new("games must be at least 1"));
        }
        Ok(config)
    }

    /// Overrides the human's mark.
    pub fn with_human(mut self, human: Option<Player>) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        self
    }

    /// Overrides the number of games.
    ///
    /// # Errors
    ///
    /// Rejects zero, as [`PlayConfig::from_toml`] does.
    pub fn with_games(mut self, games: Option<u32>) -> Result<Self, ConfigError> {
        if let Some(games) = games {
            if games == 0 {
                return Err(ConfigError::new("games must be at least 1"));
            }
            self.games = games;
        }
        Ok(self)
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Turns parallel search on; a `false` flag leaves the file value alone.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel |= parallel;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
