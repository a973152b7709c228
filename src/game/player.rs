//! Player
//!
//! Horizontal movement is a direct position nudge per held key; vertical
//! motion is semi-implicit Euler with a constant per-frame gravity and no
//! terminal velocity. The only way to gain upward speed is a bounce.

use macroquad::prelude::Vec2;

/// Spawn point, also used on retry
pub const SPAWN: Vec2 = Vec2::new(200.0, 200.0);

/// Horizontal nudge per frame per held direction key
pub const MOVE_STEP: f32 = 5.0;

/// Added to vertical velocity every simulated frame
pub const GRAVITY: f32 = 0.2;

/// Vertical velocity assigned on a bounce (negative is up)
pub const BOUNCE_VELOCITY: f32 = -8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec2,
    /// Signed vertical speed in pixels per frame
    pub velocity_y: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            position: SPAWN,
            velocity_y: 0.0,
        }
    }

    /// No screen-edge clamping: the player may walk off either side.
    pub fn move_left(&mut self) {
        self.position.x -= MOVE_STEP;
    }

    pub fn move_right(&mut self) {
        self.position.x += MOVE_STEP;
    }

    /// Accumulate, then apply.
    pub fn apply_gravity(&mut self) {
        self.velocity_y += GRAVITY;
        self.position.y += self.velocity_y;
    }

    /// Overwrites whatever vertical velocity the player had.
    pub fn jump(&mut self) {
        self.velocity_y = BOUNCE_VELOCITY;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn update(&mut self) {
        self.apply_gravity();
    }

    pub fn is_falling(&self) -> bool {
        self.velocity_y > 0.0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_accumulates_then_applies() {
        let mut player = Player::new();
        player.apply_gravity();
        assert_eq!(player.velocity_y, 0.2);
        assert_eq!(player.position.y, 200.2);

        let prev_v = player.velocity_y;
        let prev_y = player.position.y;
        player.update();
        assert_eq!(player.velocity_y, prev_v + GRAVITY);
        assert_eq!(player.position.y, prev_y + player.velocity_y);
    }

    #[test]
    fn test_horizontal_steps_are_unclamped() {
        let mut player = Player::new();
        for _ in 0..100 {
            player.move_left();
        }
        assert_eq!(player.position.x, 200.0 - 500.0);

        player.move_right();
        player.move_right();
        assert_eq!(player.position.x, 200.0 - 490.0);
        // Horizontal input never touches vertical state
        assert_eq!(player.velocity_y, 0.0);
    }

    #[test]
    fn test_jump_overwrites_velocity() {
        let mut player = Player::new();
        player.velocity_y = 13.7;
        player.jump();
        assert_eq!(player.velocity_y, BOUNCE_VELOCITY);

        player.velocity_y = -2.0;
        player.jump();
        assert_eq!(player.velocity_y, -8.0);
    }

    #[test]
    fn test_reset_restores_spawn() {
        let mut player = Player::new();
        player.move_right();
        player.apply_gravity();
        player.jump();
        player.reset();
        assert_eq!(player, Player::new());
        assert_eq!(player.position, SPAWN);
        assert!(!player.is_falling());
    }
}
