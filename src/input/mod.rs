//! Keyboard input
//!
//! Maps macroquad key state to game actions, then folds the actions for
//! one frame into a plain `FrameInput` snapshot. The simulation only ever
//! sees the snapshot, so it can be driven from tests without a window.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
