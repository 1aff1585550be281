//! Fixed timestep simulation tick
//!
//! Core game step that advances the simulation deterministically.
//!
//! Every collision check looks at the ball's projected next position
//! (`pos + vel`) using the velocity as already updated by the earlier checks
//! of the same step.

use serde::{Deserialize, Serialize};

use super::collision::{
    crosses_bottom_wall, crosses_paddle, crosses_side_wall, crosses_top_wall, paddle_hit_offset,
};
use super::state::{BrickStatus, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input state for a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Requested paddle center from the latest pointer/touch move (one-shot)
    pub pointer_x: Option<f32>,
    /// Demo mode - the paddle follows the ball on its own
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep. Does nothing unless the game
/// is running.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    move_paddle(state, input);

    if resolve_bricks(state) {
        return;
    }

    let radius = state.ball.radius;

    // Side walls
    if crosses_side_wall(state.ball.next_pos(), radius, CANVAS_WIDTH) {
        state.ball.vel.x = -state.ball.vel.x;
        state.push_event(GameEvent::WallBounce);
    }

    // Top wall
    if crosses_top_wall(state.ball.next_pos(), radius) {
        state.ball.vel.y = -state.ball.vel.y;
        state.push_event(GameEvent::WallBounce);
    }

    // Paddle: angle depends on where the ball lands
    let next = state.ball.next_pos();
    if crosses_paddle(state.ball.pos, next, radius, &state.paddle) {
        let hit = paddle_hit_offset(next.x, &state.paddle);
        state.ball.vel.x = hit * state.tuning.paddle_bounce_factor;
        state.ball.vel.y = -state.ball.vel.y;
        state.push_event(GameEvent::PaddleHit);
    }

    // Bottom: lose a life
    if crosses_bottom_wall(state.ball.next_pos(), radius, CANVAS_HEIGHT) {
        lose_life(state);
        return;
    }

    state.ball.pos += state.ball.vel;
}

/// Apply pointer, autopilot and held-key movement, then clamp to the canvas
fn move_paddle(state: &mut GameState, input: &TickInput) {
    let paddle = &mut state.paddle;

    if input.autopilot {
        // Drift the contact point across the paddle so rallies vary in angle
        let t = state.time_ticks as f32 * 0.01;
        let offset = (t.sin() * 0.5 + (t * 0.7).sin() * 0.25) * paddle.width / 2.0;
        paddle.center_on(state.ball.pos.x + offset);
    } else if let Some(x) = input.pointer_x {
        paddle.center_on(x);
    }

    // Right wins when both arrows are held
    if input.right {
        paddle.x += paddle.step;
    } else if input.left {
        paddle.x -= paddle.step;
    }

    paddle.clamp_to_canvas();
}

/// Destroy every active brick the ball is about to overlap. Returns true if
/// the last brick went and the game is won.
fn resolve_bricks(state: &mut GameState) -> bool {
    let next = state.ball.next_pos();
    let radius = state.ball.radius;

    let mut hits = Vec::new();
    for ((col, row), brick) in state.bricks.iter_mut() {
        if brick.is_active() && brick.bounds().overlaps_circle(next, radius) {
            brick.status = BrickStatus::Destroyed;
            hits.push((col, row));
        }
    }

    if hits.is_empty() {
        return false;
    }

    // One bounce no matter how many bricks were hit this step
    state.ball.vel.y = -state.ball.vel.y;

    for (col, row) in hits {
        state.score += state.tuning.score_per_brick;
        state.bricks_destroyed += 1;
        state.push_event(GameEvent::BrickDestroyed { col, row });
        log::debug!("Brick ({col}, {row}) destroyed, score {}", state.score);
    }

    if state.bricks_destroyed >= state.total_bricks() {
        state.phase = GamePhase::Won;
        state.push_event(GameEvent::Won);
        log::info!("All bricks destroyed! Final score: {}", state.score);
        return true;
    }

    false
}

fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.push_event(GameEvent::LifeLost {
        remaining: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::GameOver);
        log::info!("Game over! Final score: {}", state.score);
    } else {
        log::debug!("Life lost, {} remaining", state.lives);
        state.reserve();
    }
}
