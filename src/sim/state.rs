//! Game state and core simulation types
//!
//! Everything a game needs between steps lives in [`GameState`]. Input
//! handlers never touch it directly; they write to
//! [`TickInput`](crate::platform::input::TickInput) or call the phase
//! commands below.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::palette::{self, Color};
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Welcome screen, nothing simulated yet
    Idle,
    /// Active gameplay
    Running,
    /// Game is paused
    Paused,
    /// Lives exhausted
    GameOver,
    /// Every brick destroyed
    Won,
}

impl GamePhase {
    /// Whether the frame loop should keep rescheduling itself
    pub fn is_live(self) -> bool {
        matches!(self, GamePhase::Running | GamePhase::Paused)
    }
}

/// Something that happened during a step, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickDestroyed { col: usize, row: usize },
    WallBounce,
    PaddleHit,
    LifeLost { remaining: u32 },
    GameOver,
    Won,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Units per step
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            radius,
            color: palette::BALL,
        }
    }

    /// Position after one more step at the current velocity
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }

    /// Place at canvas center heading up, horizontal direction chosen by `rng`
    pub fn serve(&mut self, speed: f32, rng: &mut Pcg32) {
        let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.pos = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
        self.vel = Vec2::new(speed * dir, -speed);
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal distance per step while a key is held
    pub step: f32,
    pub color: Color,
}

impl Paddle {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: (CANVAS_WIDTH - tuning.paddle_width) / 2.0,
            y: tuning.paddle_top(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            step: tuning.paddle_step,
            color: palette::PADDLE,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center(&mut self) {
        self.x = (CANVAS_WIDTH - self.width) / 2.0;
    }

    /// Move so the paddle center sits at `x`
    pub fn center_on(&mut self, x: f32) {
        self.x = x - self.width / 2.0;
    }

    /// Keep the paddle fully on the canvas
    pub fn clamp_to_canvas(&mut self) {
        self.x = self.x.clamp(0.0, CANVAS_WIDTH - self.width);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
        )
    }
}

/// Whether a brick is still in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStatus {
    Active,
    Destroyed,
}

/// A single brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub status: BrickStatus,
    pub color: Color,
}

impl Brick {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == BrickStatus::Active
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + self.size)
    }
}

/// Fixed grid of bricks, stored column-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    cols: usize,
    rows: usize,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out a fresh grid; every brick starts active
    pub fn new(tuning: &Tuning) -> Self {
        let cols = tuning.brick_cols;
        let rows = tuning.brick_rows;
        let size = Vec2::new(tuning.brick_width, tuning.brick_height);
        let mut bricks = Vec::with_capacity(cols * rows);
        for c in 0..cols {
            for r in 0..rows {
                let x = c as f32 * (tuning.brick_width + tuning.brick_padding)
                    + tuning.brick_offset_left;
                let y = r as f32 * (tuning.brick_height + tuning.brick_padding)
                    + tuning.brick_offset_top;
                bricks.push(Brick {
                    pos: Vec2::new(x, y),
                    size,
                    status: BrickStatus::Active,
                    color: palette::brick_color(r),
                });
            }
        }
        Self { cols, rows, bricks }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Brick> {
        if col < self.cols && row < self.rows {
            self.bricks.get(col * self.rows + row)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut Brick> {
        if col < self.cols && row < self.rows {
            self.bricks.get_mut(col * self.rows + row)
        } else {
            None
        }
    }

    /// All bricks with their (col, row), column by column
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Brick)> {
        let rows = self.rows;
        self.bricks
            .iter()
            .enumerate()
            .map(move |(i, b)| ((i / rows, i % rows), b))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = ((usize, usize), &mut Brick)> {
        let rows = self.rows;
        self.bricks
            .iter_mut()
            .enumerate()
            .map(move |(i, b)| ((i / rows, i % rows), b))
    }

    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_active()).count()
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub bricks_destroyed: u32,
    /// Steps simulated while running
    pub time_ticks: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Events since the host last drained them
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game waiting on the welcome screen
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ball: Ball::new(tuning.ball_radius),
            paddle: Paddle::new(&tuning),
            bricks: BrickGrid::new(&tuning),
            tuning,
            phase: GamePhase::Idle,
            score: 0,
            lives: 0,
            bricks_destroyed: 0,
            time_ticks: 0,
            events: Vec::new(),
        };
        state.reset();
        state
    }

    /// Re-initialize every entity for a fresh game; the phase is untouched
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.tuning.initial_lives;
        self.bricks_destroyed = 0;
        self.time_ticks = 0;
        self.bricks = BrickGrid::new(&self.tuning);
        self.ball = Ball::new(self.tuning.ball_radius);
        self.ball.serve(self.tuning.ball_speed, &mut self.rng);
        self.paddle = Paddle::new(&self.tuning);
    }

    /// Start button: begins a game, or resumes a paused one
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Idle | GamePhase::GameOver | GamePhase::Won => {
                self.reset();
                self.phase = GamePhase::Running;
                log::info!("Game started");
            }
            GamePhase::Paused => self.toggle_pause(),
            GamePhase::Running => {}
        }
    }

    /// Pause button or `P`; ignored unless a game is in progress
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => {
                log::debug!("Pause ignored in {other:?}");
                return;
            }
        };
        log::info!("Game paused: {}", self.phase == GamePhase::Paused);
    }

    /// Restart button: full reset straight into play
    pub fn restart(&mut self) {
        self.reset();
        self.phase = GamePhase::Running;
        log::info!("Game restarted");
    }

    pub fn total_bricks(&self) -> u32 {
        self.bricks.len() as u32
    }

    /// Put the ball back in the middle and center the paddle after a miss
    pub fn reserve(&mut self) {
        self.ball.serve(self.tuning.ball_speed, &mut self.rng);
        self.paddle.center();
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
