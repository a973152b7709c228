//! Input state management
//!
//! Polls the keyboard through macroquad once per frame.

use macroquad::prelude::*;
use super::{Action, FrameInput};

/// Keyboard input state.
///
/// Owns the window-close interception: macroquad is told not to quit on
/// its own, and a close request is reported through `FrameInput` so the
/// frame loop decides when to stop.
pub struct InputState;

impl InputState {
    /// Must be created inside the macroquad main.
    pub fn new() -> Self {
        prevent_quit();
        Self
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        is_key_down(action.key())
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        is_key_pressed(action.key())
    }

    /// Snapshot this frame's input
    pub fn poll(&self) -> FrameInput {
        FrameInput::from_actions(is_quit_requested(), |action| {
            if action.is_held() {
                self.action_down(action)
            } else {
                self.action_pressed(action)
            }
        })
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
