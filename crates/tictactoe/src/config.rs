//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::{GameMode, Player, SideLabels};
use tracing::{debug, info, instrument};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for the terminal application.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// File the game history is appended to.
    #[serde(default = "default_history_path")]
    history_path: PathBuf,

    /// Pause before showing the computer's reply, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Pause between moves during replay, in milliseconds.
    #[serde(default = "default_replay_delay_ms")]
    replay_delay_ms: u64,

    /// Marker the computer plays.
    #[serde(default = "default_computer_player")]
    computer_player: Player,

    /// Display name for the X side.
    #[serde(default)]
    player_x_name: Option<String>,

    /// Display name for the O side.
    #[serde(default)]
    player_o_name: Option<String>,
}

fn default_history_path() -> PathBuf {
    PathBuf::from("tictactoe_history.jsonl")
}

fn default_computer_delay_ms() -> u64 {
    100
}

fn default_replay_delay_ms() -> u64 {
    500
}

fn default_computer_player() -> Player {
    Player::O
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
            computer_delay_ms: default_computer_delay_ms(),
            replay_delay_ms: default_replay_delay_ms(),
            computer_player: default_computer_player(),
            player_x_name: None,
            player_o_name: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(history = %config.history_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the computer's marker.
    pub fn with_computer_player(mut self, player: Player) -> Self {
        self.computer_player = player;
        self
    }

    /// Overrides the history file.
    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = path.into();
        self
    }

    /// Sets both delays to zero.
    pub fn without_delays(mut self) -> Self {
        self.computer_delay_ms = 0;
        self.replay_delay_ms = 0;
        self
    }

    /// Side labels for `mode`, with configured names taking precedence.
    pub fn side_labels(&self, mode: GameMode) -> SideLabels {
        let mut labels = SideLabels::for_mode(mode, self.computer_player);
        if let Some(name) = &self.player_x_name {
            labels.x = name.clone();
        }
        if let Some(name) = &self.player_o_name {
            labels.o = name.clone();
        }
        labels
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
    /// Creates a new configuration error.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(*config.computer_delay_ms(), 100);
        assert_eq!(*config.computer_player(), Player::O);
    }

    #[test]
    fn test_names_override_labels() {
        let config = AppConfig::from_toml("player_x_name = \"Ada\"").unwrap();
        let labels = config.side_labels(GameMode::HumanVsComputer);
        assert_eq!(labels.x, "Ada");
        assert_eq!(labels.o, "AI");
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let config = AppConfig::from_toml("history_path = \"a.jsonl\"\nreplay_delay_ms = 20")
            .unwrap()
            .with_history_path("b.jsonl")
            .with_computer_player(Player::X)
            .without_delays();
        assert_eq!(config.history_path(), &PathBuf::from("b.jsonl"));
        assert_eq!(*config.replay_delay_ms(), 0);
        assert_eq!(*config.computer_player(), Player::X);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let err = AppConfig::from_toml("computer_delay_ms = \"soon\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
