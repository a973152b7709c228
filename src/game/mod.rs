//! Game Module
//!
//! The simulation core and its rendering adapter.
//!
//! Key concepts:
//! - Entity: closed set of drawable things (player, platform)
//! - Collision: landing, scroll clamp and platform recycling passes
//! - Event: what happened this frame, for audio and logging
//! - Runtime: the `Game` controller and its Playing/GameOver state machine
//!
//! Everything except `renderer` runs without a window or audio device.

pub mod entity;
pub mod player;
pub mod platform;
pub mod event;
pub mod collision;
pub mod runtime;
pub mod renderer;

// Re-export main types
pub use event::GameEvent;
pub use runtime::{FpsLimit, Flow, Game};
pub use renderer::draw_game;
