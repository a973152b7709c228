//! Platforms
//!
//! A fixed pool of platforms. They never get destroyed: once one drops
//! below the view it is recycled to a random column at the top.

use macroquad::prelude::Vec2;
use rand::Rng;

/// Number of platforms alive at any time
pub const PLATFORM_COUNT: usize = 10;

/// Platforms spawn and recycle at x in `[0, SPAWN_WIDTH)`
pub const SPAWN_WIDTH: u32 = 500;

/// Initial layout uses y in `[0, SPAWN_HEIGHT)`
pub const SPAWN_HEIGHT: u32 = 700;

/// A platform whose y exceeds this is recycled
pub const RECYCLE_THRESHOLD: f32 = 700.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub position: Vec2,
}

impl Platform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }

    /// Random position anywhere in the view
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = rng.gen_range(0..SPAWN_WIDTH) as f32;
        let y = rng.gen_range(0..SPAWN_HEIGHT) as f32;
        Self::new(x, y)
    }

    /// Shift against `dy`. Fed the player's vertical velocity every frame,
    /// so a rising player pushes platforms down.
    pub fn move_by(&mut self, dy: f32) {
        self.position.y -= dy;
    }

    pub fn is_below_view(&self) -> bool {
        self.position.y > RECYCLE_THRESHOLD
    }

    /// Move back to the top of the view at a random column.
    pub fn recycle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let x = rng.gen_range(0..SPAWN_WIDTH) as f32;
        self.position = Vec2::new(x, 0.0);
    }
}

/// Fresh layout of `PLATFORM_COUNT` platforms.
pub fn spawn_layout<R: Rng + ?Sized>(rng: &mut R) -> Vec<Platform> {
    (0..PLATFORM_COUNT).map(|_| Platform::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_move_by_subtracts() {
        let mut p = Platform::new(10.0, 100.0);
        p.move_by(4.0);
        assert_eq!(p.position.y, 96.0);
        p.move_by(-6.5);
        assert_eq!(p.position.y, 102.5);
        assert_eq!(p.position.x, 10.0);
    }

    #[test]
    fn test_recycle_goes_to_top() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut p = Platform::new(10.0, 701.0);
        assert!(p.is_below_view());

        for _ in 0..50 {
            p.recycle(&mut rng);
            assert_eq!(p.position.y, 0.0);
            assert!(p.position.x >= 0.0 && p.position.x < 500.0);
            assert_eq!(p.position.x.fract(), 0.0);
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!Platform::new(0.0, 700.0).is_below_view());
        assert!(Platform::new(0.0, 700.01).is_below_view());
    }

    #[test]
    fn test_spawn_layout_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let layout = spawn_layout(&mut rng);
        assert_eq!(layout.len(), PLATFORM_COUNT);
        for p in &layout {
            assert!(p.position.x >= 0.0 && p.position.x < 500.0);
            assert!(p.position.y >= 0.0 && p.position.y < 700.0);
        }
    }
}
