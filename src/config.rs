use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{PieceColor, Player, DEFAULT_COLS, DEFAULT_ROWS};

/// Largest board side the terminal view is laid out for.
pub const MAX_DIMENSION: usize = 20;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub player_one: PieceColor,
    pub player_two: PieceColor,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            player_one: PieceColor::player_one_default(),
            player_two: PieceColor::player_two_default(),
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
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Set a player's colour from a `#rrggbb` string.
    pub fn set_color(&mut self, player: Player, value: &str) -> Result<(), ConfigError> {
        let color: PieceColor = value.parse()?;
        match player {
            Player::One => self.players.player_one = color,
            Player::Two => self.players.player_two = color,
        }
        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DIMENSION).contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in 1..={MAX_DIMENSION}"
            )));
        }
        if !(1..=MAX_DIMENSION).contains(&self.board.cols) {
            return Err(ConfigError::Validation(format!(
                "board.cols must be in 1..={MAX_DIMENSION}"
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
