//! Entity Set
//!
//! The game has exactly two kinds of entity, so instead of an open
//! trait-object hierarchy they are a closed tagged union. Every entity
//! has a position (top-left of its sprite, y grows downward).
//!
//! The renderer walks `Game::entities()` and picks a sprite from `kind()`;
//! nothing in the simulation needs to know how an entity is drawn.

use macroquad::prelude::Vec2;
use super::platform::Platform;
use super::player::Player;

/// Which sprite an entity is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Platform,
}

/// Borrowed view of one entity, used for drawing and inspection.
/// Drawing dispatches on `kind()` in `renderer::draw_game`; per-frame
/// updates go through `Player::update` and `Platform::move_by`.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Player(&'a Player),
    Platform(&'a Platform),
}

impl<'a> EntityRef<'a> {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Player(_) => EntityKind::Player,
            EntityRef::Platform(_) => EntityKind::Platform,
        }
    }

    pub fn position(&self) -> Vec2 {
        match self {
            EntityRef::Player(player) => player.position,
            EntityRef::Platform(platform) => platform.position,
        }
    }
}
