//! Game Renderer
//!
//! Maps game state to macroquad draw calls. Layout decisions (which text,
//! where, how big) are computed by `text_overlay` without touching the GPU,
//! so they can be checked in tests; `draw_game` only issues the calls.

use macroquad::prelude::*;
use ::rand::Rng;
use crate::assets::GameAssets;
use super::entity::EntityKind;
use super::runtime::{Game, Phase};

pub const SCORE_POS: Vec2 = Vec2::new(10.0, 10.0);
pub const SCORE_SIZE: u16 = 30;

pub const GAME_OVER_TEXT: &str = "Game Over!";
pub const GAME_OVER_POS: Vec2 = Vec2::new(150.0, 300.0);
pub const GAME_OVER_SIZE: u16 = 48;

pub const RETRY_TEXT: &str = "Press R to Retry or Esc to Exit";
pub const RETRY_POS: Vec2 = Vec2::new(120.0, 400.0);
pub const RETRY_SIZE: u16 = 28;

/// One line of text, positioned by its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub position: Vec2,
    pub size: u16,
    pub color: Color,
}

impl TextItem {
    fn new(text: impl Into<String>, position: Vec2, size: u16, color: Color) -> Self {
        Self {
            text: text.into(),
            position,
            size,
            color,
        }
    }
}

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

/// Text to draw this frame: the score while playing, the game-over
/// prompt otherwise.
pub fn text_overlay<R: Rng>(game: &Game<R>) -> Vec<TextItem> {
    match game.phase() {
        Phase::Playing => {
            vec![TextItem::new(score_label(game.score), SCORE_POS, SCORE_SIZE, BLACK)]
        }
        Phase::GameOver => vec![
            TextItem::new(GAME_OVER_TEXT, GAME_OVER_POS, GAME_OVER_SIZE, RED),
            TextItem::new(RETRY_TEXT, RETRY_POS, RETRY_SIZE, BLACK),
        ],
    }
}

fn sprite_for(assets: &GameAssets, kind: EntityKind) -> &Texture2D {
    match kind {
        EntityKind::Player => &assets.player,
        EntityKind::Platform => &assets.platform,
    }
}

/// Draw one full frame: background, then either entities and score or
/// the game-over screen.
pub fn draw_game<R: Rng>(game: &Game<R>, assets: &GameAssets) {
    clear_background(BLACK);
    draw_texture(&assets.background, 0.0, 0.0, WHITE);

    if !game.is_game_over() {
        for entity in game.entities() {
            let pos = entity.position();
            draw_texture(sprite_for(assets, entity.kind()), pos.x, pos.y, WHITE);
        }
    }

    for item in text_overlay(game) {
        // macroquad places text by its baseline
        draw_text_ex(
            &item.text,
            item.position.x,
            item.position.y + item.size as f32,
            TextParams {
                font: Some(&assets.font),
                font_size: item.size,
                color: item.color,
                ..Default::default()
            },
        );
    }
}
