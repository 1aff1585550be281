//! Keyboard, mouse and touch input mapping
//!
//! DOM handlers translate raw events through these functions and write the
//! result into [`TickInput`], which the simulation reads once per step.

use crate::consts::CANVAS_WIDTH;
pub use crate::sim::tick::TickInput;

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveLeft,
    MoveRight,
    TogglePause,
    ToggleAutopilot,
}

/// Map a `KeyboardEvent.key` value; unrecognized keys map to `None`
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "Left" | "ArrowLeft" => Some(KeyAction::MoveLeft),
        "Right" | "ArrowRight" => Some(KeyAction::MoveRight),
        "p" | "P" => Some(KeyAction::TogglePause),
        "i" | "I" => Some(KeyAction::ToggleAutopilot),
        _ => None,
    }
}

/// Convert a pointer x (relative to the canvas left edge) to a paddle
/// center. Positions outside the canvas are ignored.
pub fn pointer_to_paddle_x(relative_x: f32) -> Option<f32> {
    (relative_x > 0.0 && relative_x < CANVAS_WIDTH).then_some(relative_x)
}

impl TickInput {
    /// Record a key press; returns the action for one-shot handling
    pub fn key_down(&mut self, key: &str) -> Option<KeyAction> {
        let action = key_action(key)?;
        match action {
            KeyAction::MoveLeft => self.left = true,
            KeyAction::MoveRight => self.right = true,
            KeyAction::ToggleAutopilot => {
                self.autopilot = !self.autopilot;
                log::info!("Autopilot: {}", self.autopilot);
            }
            KeyAction::TogglePause => {}
        }
        Some(action)
    }

    /// Record a key release
    pub fn key_up(&mut self, key: &str) {
        match key_action(key) {
            Some(KeyAction::MoveLeft) => self.left = false,
            Some(KeyAction::MoveRight) => self.right = false,
            _ => {}
        }
    }

    /// Record a pointer/touch move relative to the canvas left edge
    pub fn pointer_moved(&mut self, relative_x: f32) {
        if let Some(x) = pointer_to_paddle_x(relative_x) {
            self.pointer_x = Some(x);
        }
    }

    /// Forget held keys and pending pointer moves (on restart)
    pub fn clear_motion(&mut self) {
        self.left = false;
        self.right = false;
        self.pointer_x = None;
    }
}
