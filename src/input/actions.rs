//! Game action definitions

use macroquad::prelude::KeyCode;

/// All possible game actions that can be triggered by input
///
/// Key mappings:
/// - Left/Right arrows = move (held)
/// - R = retry (game-over screen only)
/// - Escape = quit (game-over screen only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Retry,
    Quit,
}

impl Action {
    /// Keyboard key bound to this action
    pub fn key(&self) -> KeyCode {
        match self {
            Action::MoveLeft => KeyCode::Left,
            Action::MoveRight => KeyCode::Right,
            Action::Retry => KeyCode::R,
            Action::Quit => KeyCode::Escape,
        }
    }

    /// Continuous actions act every frame the key is held;
    /// the others fire once per key press.
    pub fn is_held(&self) -> bool {
        matches!(self, Action::MoveLeft | Action::MoveRight)
    }
}

/// Everything the simulation needs to know about input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub move_left: bool,
    pub move_right: bool,
    pub retry: bool,
    pub quit: bool,
    /// The window's close button was pressed
    pub close_requested: bool,
}

impl FrameInput {
    /// Build a snapshot from a predicate telling which actions are active.
    pub fn from_actions(close_requested: bool, active: impl Fn(Action) -> bool) -> Self {
        Self {
            move_left: active(Action::MoveLeft),
            move_right: active(Action::MoveRight),
            retry: active(Action::Retry),
            quit: active(Action::Quit),
            close_requested,
        }
    }
}
