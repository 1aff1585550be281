//! Game instance driven by the host's frame callback
//!
//! `App` owns the simulation state, the input state written by event
//! handlers, and the fixed-timestep clock. The browser glue and the tests
//! drive it the same way: feed it timestamps, draw what it composes.

use crate::platform::{FixedTimestep, KeyAction, TickInput};
use crate::renderer::{DrawList, compose};
use crate::sim::{GameEvent, GamePhase, GameState, tick};
use crate::tuning::Tuning;
use crate::ui::HudView;

/// Whether the host should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stop,
}

pub struct App {
    pub state: GameState,
    pub input: TickInput,
    clock: FixedTimestep,
    events: Vec<GameEvent>,
}

impl App {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::new(seed, tuning),
            input: TickInput::default(),
            clock: FixedTimestep::default(),
            events: Vec::new(),
        }
    }

    /// Start button
    pub fn start(&mut self) {
        self.state.start();
        self.input.pointer_x = None;
        self.clock.reset();
    }

    /// Pause button or `P`
    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
        // A move made while paused must not jump the paddle on resume
        self.input.pointer_x = None;
        self.clock.reset();
    }

    /// Restart button
    pub fn restart(&mut self) {
        self.state.restart();
        self.input.clear_motion();
        self.clock.reset();
    }

    /// Key-down handler entry point
    pub fn key_down(&mut self, key: &str) {
        if self.input.key_down(key) == Some(KeyAction::TogglePause) {
            self.toggle_pause();
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Mouse/touch x relative to the canvas left edge. Ignored unless running.
    pub fn pointer_moved(&mut self, relative_x: f32) {
        if self.state.phase == GamePhase::Running {
            self.input.pointer_moved(relative_x);
        }
    }

    /// Run the steps due at `time_ms` (an rAF timestamp)
    pub fn frame(&mut self, time_ms: f64) -> FrameOutcome {
        if self.state.phase == GamePhase::Running {
            let steps = self.clock.advance_to(time_ms);
            for _ in 0..steps {
                tick(&mut self.state, &self.input);
                // Pointer moves are one-shot
                self.input.pointer_x = None;
                if self.state.phase != GamePhase::Running {
                    break;
                }
            }
        } else {
            self.clock.reset();
        }

        self.events.extend(self.state.drain_events());

        if self.state.phase.is_live() {
            FrameOutcome::Continue
        } else {
            FrameOutcome::Stop
        }
    }

    /// Compose the current frame
    pub fn draw(&self, list: &mut DrawList) {
        compose(&self.state, list);
    }

    pub fn hud(&self) -> HudView {
        HudView::from_state(&self.state)
    }

    /// Events produced by frames since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[test]
    fn test_idle_frame_stops() {
        let mut app = App::new(1, Tuning::default());
        assert_eq!(app.frame(0.0), FrameOutcome::Stop);
        assert_eq!(app.state.phase, GamePhase::Idle);
    }

    #[test]
    fn test_running_frames_advance_ball() {
        let mut app = App::new(1, Tuning::default());
        app.start();
        let start = app.state.ball.pos;

        for i in 0..10 {
            assert_eq!(app.frame(i as f64 * FRAME_MS), FrameOutcome::Continue);
        }
        assert_eq!(app.state.time_ticks, 10);
        assert_ne!(app.state.ball.pos, start);
    }

    #[test]
    fn test_p_key_toggles_pause() {
        let mut app = App::new(1, Tuning::default());
        app.start();
        app.key_down("p");
        assert_eq!(app.state.phase, GamePhase::Paused);
        assert_eq!(app.frame(0.0), FrameOutcome::Continue);
        app.key_down("P");
        assert_eq!(app.state.phase, GamePhase::Running);
    }

    #[test]
    fn test_pointer_is_consumed() {
        let mut app = App::new(1, Tuning::default());
        app.start();
        app.pointer_moved(100.0);
        app.frame(0.0);
        assert_eq!(app.state.paddle.x, 50.0);
        assert_eq!(app.input.pointer_x, None);
    }

    #[test]
    fn test_pointer_move_while_paused_is_dropped() {
        let mut app = App::new(1, Tuning::default());
        app.start();
        app.frame(0.0);
        let before = app.state.paddle.x;

        app.toggle_pause();
        app.pointer_moved(700.0);
        app.frame(FRAME_MS);
        app.toggle_pause();
        app.frame(2.0 * FRAME_MS);

        assert_eq!(app.state.phase, GamePhase::Running);
        assert_eq!(app.state.paddle.x, before);
    }

    #[test]
    fn test_unconsumed_pointer_move_dropped_on_pause() {
        let mut app = App::new(1, Tuning::default());
        app.start();
        app.frame(0.0);
        let before = app.state.paddle.x;

        app.pointer_moved(700.0);
        app.toggle_pause();
        app.toggle_pause();
        app.frame(FRAME_MS);

        assert_eq!(app.state.paddle.x, before);
        assert_eq!(app.input.pointer_x, None);
    }

    #[test]
    fn test_restart_clears_held_keys() {
        let mut app = App::new(1, Tuning::default());
        app.start();
        app.key_down("ArrowLeft");
        app.restart();
        assert!(!app.input.left);
        assert_eq!(app.state.phase, GamePhase::Running);
    }
}
