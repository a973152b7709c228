//! Collision & Scroll
//!
//! Per-frame passes over the player and the platform pool:
//! - scroll clamp: the player never rises above `SCROLL_LINE`; the world
//!   moves down instead
//! - platform pass: move every platform by the player's velocity and
//!   recycle the ones that left the view
//! - landing pass: bounce the player off any platform its feet land in
//!
//! Hitboxes are tuned to the sprites, not to their full extents. The
//! player's "feet" are a horizontal segment 70px below its origin, and a
//! platform only catches feet in its top 14px band.

use rand::Rng;
use super::event::{EventQueue, GameEvent};
use super::platform::Platform;
use super::player::Player;

/// Highest on-screen y the player may reach
pub const SCROLL_LINE: f32 = 300.0;

/// Player y beyond this ends the round
pub const GAME_OVER_THRESHOLD: f32 = 700.0;

/// Feet segment relative to the player origin
pub mod feet {
    pub const LEFT: f32 = 20.0;
    pub const RIGHT: f32 = 50.0;
    pub const Y: f32 = 70.0;
}

/// Landing band relative to the platform origin
pub mod band {
    pub const WIDTH: f32 = 68.0;
    pub const HEIGHT: f32 = 14.0;
}

/// Axis-aligned box with open-interval overlap.
/// A box may be degenerate (zero height) to model a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Hitbox {
    pub fn player_feet(player: &Player) -> Self {
        let p = player.position;
        let y = p.y + feet::Y;
        Self {
            left: p.x + feet::LEFT,
            right: p.x + feet::RIGHT,
            top: y,
            bottom: y,
        }
    }

    pub fn platform_band(platform: &Platform) -> Self {
        let p = platform.position;
        Self {
            left: p.x,
            right: p.x + band::WIDTH,
            top: p.y,
            bottom: p.y + band::HEIGHT,
        }
    }

    /// Strict on every edge: touching boxes do not overlap.
    /// A degenerate box must lie strictly inside the other vertically.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }
}

/// Would this platform catch the player this frame?
/// Only while falling; rising through a platform from below never bounces.
pub fn lands_on(player: &Player, platform: &Platform) -> bool {
    player.is_falling()
        && Hitbox::player_feet(player).overlaps(&Hitbox::platform_band(platform))
}

/// Bounce off every qualifying platform.
///
/// Every platform is tested, with no de-duplication. The falling gate is
/// re-read per platform, and a bounce leaves the player rising, so at most
/// one bounce lands per frame: the first qualifying platform in pool order.
/// Returns the number of bounces.
pub fn resolve_collisions(
    player: &mut Player,
    platforms: &[Platform],
    events: &mut EventQueue<GameEvent>,
) -> usize {
    let mut bounces = 0;
    for (index, platform) in platforms.iter().enumerate() {
        if lands_on(player, platform) {
            player.jump();
            events.send(GameEvent::Bounce { platform: index });
            bounces += 1;
        }
    }
    bounces
}

/// Pin the player to `SCROLL_LINE` and push the world down by the overshoot.
/// Returns the offset applied, if any.
pub fn clamp_scroll(player: &mut Player, platforms: &mut [Platform]) -> Option<f32> {
    if player.position.y >= SCROLL_LINE {
        return None;
    }

    let offset = SCROLL_LINE - player.position.y;
    player.position.y = SCROLL_LINE;
    for platform in platforms.iter_mut() {
        platform.move_by(-offset);
    }
    Some(offset)
}

/// Move platforms with the player's velocity and recycle any that dropped
/// out of view, adding one point per recycle. Returns the recycle count.
pub fn update_platforms<R: Rng + ?Sized>(
    platforms: &mut [Platform],
    velocity_y: f32,
    score: &mut u32,
    rng: &mut R,
    events: &mut EventQueue<GameEvent>,
) -> u32 {
    let mut recycled = 0;
    for (index, platform) in platforms.iter_mut().enumerate() {
        platform.move_by(velocity_y);

        if platform.is_below_view() {
            platform.recycle(rng);
            *score += 1;
            recycled += 1;
            events.send(GameEvent::Recycled { platform: index, score: *score });
        }
    }
    recycled
}

pub fn has_fallen(player: &Player) -> bool {
    player.position.y > GAME_OVER_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Player positioned so its feet sit `depth` px into the platform band
    fn player_above(platform: &Platform, depth: f32, velocity_y: f32) -> Player {
        let mut player = Player::new();
        player.position = Vec2::new(
            platform.position.x,
            platform.position.y + depth - feet::Y,
        );
        player.velocity_y = velocity_y;
        player
    }

    #[test]
    fn test_lands_when_falling_into_band() {
        let platform = Platform::new(100.0, 400.0);
        let player = player_above(&platform, 5.0, 3.0);
        assert!(lands_on(&player, &platform));
    }

    #[test]
    fn test_no_landing_while_rising() {
        let platform = Platform::new(100.0, 400.0);
        let player = player_above(&platform, 5.0, -3.0);
        assert!(!lands_on(&player, &platform));

        let resting = player_above(&platform, 5.0, 0.0);
        assert!(!lands_on(&resting, &platform));
    }

    #[test]
    fn test_band_edges_are_exclusive() {
        let platform = Platform::new(100.0, 400.0);
        assert!(!lands_on(&player_above(&platform, 0.0, 1.0), &platform));
        assert!(!lands_on(&player_above(&platform, 14.0, 1.0), &platform));
        assert!(lands_on(&player_above(&platform, 13.9, 1.0), &platform));
    }

    #[test]
    fn test_horizontal_overlap_uses_feet_span() {
        let platform = Platform::new(100.0, 400.0);

        // Feet span [x+20, x+50] must overlap (100, 168)
        let mut player = player_above(&platform, 5.0, 1.0);
        player.position.x = 50.0; // feet right edge == platform left
        assert!(!lands_on(&player, &platform));
        player.position.x = 50.5;
        assert!(lands_on(&player, &platform));
        player.position.x = 148.0; // feet left edge == platform right
        assert!(!lands_on(&player, &platform));
        player.position.x = 147.5;
        assert!(lands_on(&player, &platform));
    }

    #[test]
    fn test_resolve_bounces_and_reports() {
        let platforms = vec![Platform::new(0.0, 0.0), Platform::new(100.0, 400.0)];
        let mut player = player_above(&platforms[1], 5.0, 6.3);
        let mut events = EventQueue::new();

        let bounces = resolve_collisions(&mut player, &platforms, &mut events);
        assert_eq!(bounces, 1);
        assert_eq!(player.velocity_y, -8.0);
        assert_eq!(events.drain().collect::<Vec<_>>(), vec![GameEvent::Bounce { platform: 1 }]);
    }

    #[test]
    fn test_resolve_without_contact_leaves_velocity() {
        let platforms = vec![Platform::new(400.0, 100.0)];
        let mut player = Player::new();
        player.velocity_y = 2.5;
        let mut events = EventQueue::new();

        assert_eq!(resolve_collisions(&mut player, &platforms, &mut events), 0);
        assert_eq!(player.velocity_y, 2.5);
        assert!(events.is_empty());
    }

    #[test]
    fn test_overlapping_platforms_bounce_once_in_pool_order() {
        let platforms = vec![Platform::new(100.0, 400.0), Platform::new(110.0, 402.0)];
        let mut player = Player::new();
        player.position = Vec2::new(100.0, 335.0);
        player.velocity_y = 4.0;
        assert!(platforms.iter().all(|p| lands_on(&player, p)));

        let mut events = EventQueue::new();
        let bounces = resolve_collisions(&mut player, &platforms, &mut events);
        assert_eq!(bounces, 1);
        assert_eq!(player.velocity_y, -8.0);
        assert_eq!(events.drain().collect::<Vec<_>>(), vec![GameEvent::Bounce { platform: 0 }]);
    }

    #[test]
    fn test_clamp_pins_player_and_shifts_world() {
        let mut player = Player::new();
        player.position.y = 280.5;
        let mut platforms = vec![Platform::new(0.0, 10.0), Platform::new(50.0, 600.0)];

        let offset = clamp_scroll(&mut player, &mut platforms);
        assert_eq!(offset, Some(19.5));
        assert_eq!(player.position.y, 300.0);
        assert_eq!(platforms[0].position.y, 29.5);
        assert_eq!(platforms[1].position.y, 619.5);
    }

    #[test]
    fn test_clamp_ignores_player_below_line() {
        let mut player = Player::new();
        player.position.y = 300.0;
        let mut platforms = vec![Platform::new(0.0, 10.0)];
        assert_eq!(clamp_scroll(&mut player, &mut platforms), None);
        assert_eq!(platforms[0].position.y, 10.0);
    }

    #[test]
    fn test_update_platforms_recycles_and_scores() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut events = EventQueue::new();
        let mut score = 4;
        let mut platforms = vec![
            Platform::new(10.0, 695.0),
            Platform::new(20.0, 100.0),
            Platform::new(30.0, 699.0),
        ];

        // Rising player (negative velocity) pushes platforms down by 6
        let recycled = update_platforms(&mut platforms, -6.0, &mut score, &mut rng, &mut events);

        assert_eq!(recycled, 2);
        assert_eq!(score, 6);
        assert_eq!(platforms[0].position.y, 0.0);
        assert_eq!(platforms[1].position.y, 106.0);
        assert_eq!(platforms[2].position.y, 0.0);
        for p in &platforms {
            assert!(p.position.x >= 0.0 && p.position.x < 500.0);
        }
        assert_eq!(
            events.drain().collect::<Vec<_>>(),
            vec![
                GameEvent::Recycled { platform: 0, score: 5 },
                GameEvent::Recycled { platform: 2, score: 6 },
            ]
        );
    }

    #[test]
    fn test_has_fallen_is_strict() {
        let mut player = Player::new();
        player.position.y = 700.0;
        assert!(!has_fallen(&player));
        player.position.y = 700.1;
        assert!(has_fallen(&player));
    }
}
