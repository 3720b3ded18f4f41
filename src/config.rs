use std::path::Path;

use tracing::warn;

use crate::ai::{Difficulty, SelectorKind};
use crate::arena::ArenaConfig;
use crate::error::ConfigError;
use crate::game::{GameConfig, SeatConfig};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub red: SeatConfig,
    pub yellow: SeatConfig,
    pub arena: ArenaConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            game: GameConfig::default(),
            red: SeatConfig::computer(SelectorKind::Competitive, Difficulty::Medium),
            yellow: SeatConfig::Human,
            arena: ArenaConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.rows == 0 {
            return Err(ConfigError::Validation("game.rows must be >= 1".into()));
        }
        if self.game.cols == 0 {
            return Err(ConfigError::Validation("game.cols must be >= 1".into()));
        }
        if self.game.win_length < 2 {
            return Err(ConfigError::Validation(
                "game.win_length must be >= 2".into(),
            ));
        }
        if self.game.win_length > self.game.rows.max(self.game.cols) {
            return Err(ConfigError::Validation(
                "game.win_length must fit on the board".into(),
            ));
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be > 0".into()));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
