use std::path::{Path, PathBuf};

use crate::board::BoardConfig;
use crate::error::SettingsError;
use crate::grid::Player;
use crate::persist::DEFAULT_SAVE_FILE;

/// Settings for the computer opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiSettings {
    /// The seat the computer takes when asked to play
    pub player: Player,
}

impl Default for AiSettings {
    fn default() -> Self {
        AiSettings { player: Player::Two }
    }
}

/// Top-level application settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub verbose: bool,
    pub save_file: PathBuf,
    pub board: BoardConfig,
    pub ai: AiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            verbose: false,
            save_file: PathBuf::from(DEFAULT_SAVE_FILE),
            board: BoardConfig::default(),
            ai: AiSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load(path)
        } else {
            crate::vlog!("settings file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.board.validate()?;
        Ok(())
    }

    /// Generate a TOML string with all default values
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Settings::default()).unwrap_or_default()
    }
}
