//! HUD state
//!
//! What the page around the canvas should show: the score and lives
//! readouts and which of the start / pause / restart buttons are visible.

use crate::sim::{GamePhase, GameState};

pub const PAUSE_LABEL: &str = "Pause Game";
pub const RESUME_LABEL: &str = "Resume Game";

/// Snapshot of the DOM-side HUD for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    pub score: String,
    pub lives: String,
    pub start_visible: bool,
    pub pause_visible: bool,
    pub pause_label: &'static str,
    pub restart_visible: bool,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        let (start_visible, pause_visible, restart_visible) = match state.phase {
            GamePhase::Idle => (true, false, false),
            GamePhase::Running | GamePhase::Paused => (false, true, true),
            GamePhase::GameOver | GamePhase::Won => (false, false, true),
        };
        let pause_label = if state.phase == GamePhase::Paused {
            RESUME_LABEL
        } else {
            PAUSE_LABEL
        };

        Self {
            score: state.score.to_string(),
            lives: state.lives.to_string(),
            start_visible,
            pause_visible,
            pause_label,
            restart_visible,
        }
    }
}

/// CSS `display` value for a button
pub fn display_value(visible: bool) -> &'static str {
    if visible { "inline-block" } else { "none" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_button_visibility_by_phase() {
        let mut state = GameState::new(1, Tuning::default());

        let hud = HudView::from_state(&state);
        assert!(hud.start_visible);
        assert!(!hud.pause_visible);
        assert!(!hud.restart_visible);

        state.start();
        let hud = HudView::from_state(&state);
        assert!(!hud.start_visible);
        assert!(hud.pause_visible);
        assert!(hud.restart_visible);
        assert_eq!(hud.pause_label, PAUSE_LABEL);

        state.toggle_pause();
        let hud = HudView::from_state(&state);
        assert!(hud.pause_visible);
        assert_eq!(hud.pause_label, RESUME_LABEL);

        state.phase = GamePhase::GameOver;
        let hud = HudView::from_state(&state);
        assert!(!hud.start_visible);
        assert!(!hud.pause_visible);
        assert!(hud.restart_visible);
    }

    #[test]
    fn test_readouts() {
        let mut state = GameState::new(1, Tuning::default());
        state.score = 70;
        state.lives = 2;
        let hud = HudView::from_state(&state);
        assert_eq!(hud.score, "70");
        assert_eq!(hud.lives, "2");
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(true), "inline-block");
        assert_eq!(display_value(false), "none");
    }
}
