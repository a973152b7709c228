//! Load-once game assets
//!
//! Images are best-effort: a missing image is logged and drawn as a blank
//! texture. The font and the jump sound are required; failing to load
//! either aborts startup.

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;
use crate::config::AssetPaths;

/// Error type for required assets
#[derive(Debug)]
pub enum AssetError {
    Font(String),
    Sound(String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Font(msg) => write!(f, "Failed to load font: {}", msg),
            AssetError::Sound(msg) => write!(f, "Failed to load sound: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}

pub struct GameAssets {
    pub background: Texture2D,
    pub platform: Texture2D,
    pub player: Texture2D,
    pub font: Font,
    pub jump_sound: Sound,
}

impl GameAssets {
    pub async fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        let background = load_image_or_blank(&paths.background).await;
        let platform = load_image_or_blank(&paths.platform).await;
        let player = load_image_or_blank(&paths.player).await;

        let font = load_ttf_font(&paths.font)
            .await
            .map_err(|e| AssetError::Font(format!("{}: {}", paths.font, e)))?;

        let jump_sound = load_sound(&paths.jump_sound)
            .await
            .map_err(|e| AssetError::Sound(format!("{}: {}", paths.jump_sound, e)))?;

        log::info!("Loaded assets");
        Ok(Self {
            background,
            platform,
            player,
            font,
            jump_sound,
        })
    }
}

async fn load_image_or_blank(path: &str) -> Texture2D {
    match load_texture(path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Nearest);
            log::debug!("Loaded texture {}", path);
            tex
        }
        Err(e) => {
            log::warn!("Failed to load texture {}: {}, drawing blank", path, e);
            Texture2D::empty()
        }
    }
}
