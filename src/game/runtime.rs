//! Game Runtime
//!
//! The `Game` controller owns the player, the platform pool, the score and
//! the random source, and runs the two-state machine:
//!
//! ```text
//!   Playing ──player.y > 700──> GameOver ──R──> Playing (fresh round)
//!                                   └──Esc──> exit
//! ```
//!
//! One call to `Game::frame` is one frame of the game loop. The order
//! inside a playing frame is fixed: input, gravity, game-over check, scroll
//! clamp, platform move/recycle, landing. The frame in which the player
//! falls still runs to the end; simulation is suspended from the next one.

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::input::FrameInput;
use super::collision::{clamp_scroll, has_fallen, resolve_collisions, update_platforms};
use super::entity::EntityRef;
use super::event::{EventQueue, GameEvent};
use super::platform::{spawn_layout, Platform, PLATFORM_COUNT};
use super::player::Player;

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    /// 30 FPS
    Fps30,
    /// 60 FPS (the game's physics are tuned per frame at this rate)
    #[default]
    Fps60,
    /// Unlocked (as fast as possible)
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            FpsLimit::Fps30 => "30",
            FpsLimit::Fps60 => "60",
            FpsLimit::Unlocked => "Unlocked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// What the frame loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Game<R: Rng = StdRng> {
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub score: u32,
    /// Events raised this frame; drained by the frame loop
    pub events: EventQueue<GameEvent>,
    phase: Phase,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Start a round with a fresh platform layout drawn from `rng`.
    pub fn new(rng: R) -> Self {
        let mut game = Self {
            player: Player::new(),
            platforms: Vec::with_capacity(PLATFORM_COUNT),
            score: 0,
            events: EventQueue::new(),
            phase: Phase::Playing,
            rng,
        };
        game.reset();
        game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Respawn the player, zero the score and lay out new platforms.
    /// The random source is not reseeded, so each layout continues the
    /// same sequence.
    pub fn reset(&mut self) {
        self.player.reset();
        self.score = 0;
        self.phase = Phase::Playing;
        self.platforms = spawn_layout(&mut self.rng);
    }

    /// Run one frame.
    pub fn frame(&mut self, input: &FrameInput) -> Flow {
        if input.close_requested {
            return Flow::Exit;
        }

        // Retry and quit are only read on the game-over screen
        if self.is_game_over() {
            if input.retry {
                self.reset();
                self.events.send(GameEvent::Reset);
            } else if input.quit {
                return Flow::Exit;
            }
        }

        if !self.is_game_over() {
            self.simulate(input);
        }

        Flow::Continue
    }

    fn simulate(&mut self, input: &FrameInput) {
        if input.move_left {
            self.player.move_left();
        }
        if input.move_right {
            self.player.move_right();
        }

        self.player.update();

        let fell = has_fallen(&self.player);
        if fell {
            self.phase = Phase::GameOver;
        }

        clamp_scroll(&mut self.player, &mut self.platforms);
        update_platforms(
            &mut self.platforms,
            self.player.velocity_y,
            &mut self.score,
            &mut self.rng,
            &mut self.events,
        );
        resolve_collisions(&mut self.player, &self.platforms, &mut self.events);

        if fell {
            self.events.send(GameEvent::GameOver { score: self.score });
        }
    }

    /// Everything drawable, in draw order: player first, then platforms.
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        std::iter::once(EntityRef::Player(&self.player))
            .chain(self.platforms.iter().map(EntityRef::Platform))
    }
}
