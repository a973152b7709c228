//! Game configuration
//!
//! Optional RON file read once at startup. Physics, window size and title
//! are fixed; only pacing, seeding, volume and asset locations can change.

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::game::FpsLimit;

/// Default location, relative to the working directory
pub const CONFIG_PATH: &str = "assets/config/game.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where the load-once assets live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: String,
    pub platform: String,
    pub player: String,
    pub font: String,
    pub jump_sound: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: "images/sea.png".to_string(),
            platform: "images/platform.png".to_string(),
            player: "images/character.png".to_string(),
            font: "fonts/DoodleJumpBold_v2.ttf".to_string(),
            jump_sound: "sounds/sound_jump.wav".to_string(),
        }
    }
}

impl AssetPaths {
    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("background", self.background.as_str()),
            ("platform", self.platform.as_str()),
            ("player", self.player.as_str()),
            ("font", self.font.as_str()),
            ("jump_sound", self.jump_sound.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub fps_limit: FpsLimit,
    /// Fixed RNG seed; None seeds from the wall clock
    pub seed: Option<u64>,
    /// Jump sound volume, 0.0..=1.0
    pub sound_volume: f32,
    pub assets: AssetPaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps_limit: FpsLimit::default(),
            seed: None,
            sound_volume: 1.0,
            assets: AssetPaths::default(),
        }
    }
}

impl GameConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, falling back to defaults when it is missing or bad.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.sound_volume) {
            return Err(ConfigError::ValidationError(format!(
                "sound_volume must be in 0.0..=1.0, got {}",
                self.sound_volume
            )));
        }
        for (name, path) in self.assets.entries() {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "asset path '{}' is empty",
                    name
                )));
            }
        }
        Ok(())
    }
}
