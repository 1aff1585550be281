//! Data-driven game balance
//!
//! Layout and physics numbers for one game. Defaults reproduce the classic
//! 9×5 layout; a host page may override any subset through JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Largest brick grid an override may ask for
pub const MAX_BRICKS: usize = 10_000;

/// Tunable constants for bricks, paddle, ball and scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Bricks ===
    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the canvas bottom to the paddle top
    pub paddle_bottom_margin: f32,
    /// Horizontal distance moved per step while an arrow key is held
    pub paddle_step: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis serve speed (units per step)
    pub ball_speed: f32,
    /// Horizontal speed at the very edge of the paddle
    pub paddle_bounce_factor: f32,

    // === Rules ===
    pub initial_lives: u32,
    pub score_per_brick: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            brick_rows: 5,
            brick_cols: 9,
            brick_width: 80.0,
            brick_height: 20.0,
            brick_padding: 10.0,
            brick_offset_top: 60.0,
            brick_offset_left: 35.0,

            paddle_width: 100.0,
            paddle_height: 15.0,
            paddle_bottom_margin: 30.0,
            paddle_step: 8.0,

            ball_radius: 10.0,
            ball_speed: 4.0,
            paddle_bounce_factor: 5.0,

            initial_lives: 3,
            score_per_brick: 10,
        }
    }
}

/// Why a tuning override was rejected
#[derive(Debug)]
pub enum TuningError {
    /// JSON was malformed or had wrongly typed fields
    Parse(serde_json::Error),
    /// A value is out of range
    Invalid(&'static str),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "tuning JSON did not parse: {e}"),
            TuningError::Invalid(reason) => write!(f, "invalid tuning: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse an override, falling back to defaults with a warning
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning override");
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(TuningError::Invalid("brick grid must not be empty"));
        }
        match self.brick_rows.checked_mul(self.brick_cols) {
            Some(count) if count <= MAX_BRICKS => {}
            _ => return Err(TuningError::Invalid("brick grid has too many bricks")),
        }
        if self.brick_width <= 0.0 || self.brick_height <= 0.0 || self.brick_padding < 0.0 {
            return Err(TuningError::Invalid("brick dimensions must be positive"));
        }
        // The classic layout lets the last column hang past the right edge, so
        // only the left edge of every column has to be on the canvas.
        let last_col_left = self.brick_offset_left
            + (self.brick_cols - 1) as f32 * (self.brick_width + self.brick_padding);
        let grid_bottom = self.brick_offset_top
            + self.brick_rows as f32 * (self.brick_height + self.brick_padding)
            - self.brick_padding;
        if self.brick_offset_left < 0.0 || last_col_left >= CANVAS_WIDTH {
            return Err(TuningError::Invalid("brick grid is wider than the canvas"));
        }
        if self.brick_offset_top < 0.0 || grid_bottom >= self.paddle_top() {
            return Err(TuningError::Invalid("brick grid overlaps the paddle"));
        }
        if self.paddle_width <= 0.0 || self.paddle_width >= CANVAS_WIDTH {
            return Err(TuningError::Invalid("paddle must be narrower than the canvas"));
        }
        if self.paddle_height <= 0.0 {
            return Err(TuningError::Invalid("paddle height must be positive"));
        }
        if self.paddle_step < 0.0 {
            return Err(TuningError::Invalid("paddle step must not be negative"));
        }
        if self.paddle_bottom_margin < self.paddle_height
            || self.paddle_bottom_margin >= CANVAS_HEIGHT / 2.0
        {
            return Err(TuningError::Invalid("paddle margin is out of range"));
        }
        if self.ball_radius <= 0.0 || self.ball_speed <= 0.0 {
            return Err(TuningError::Invalid("ball radius and speed must be positive"));
        }
        if self.initial_lives == 0 {
            return Err(TuningError::Invalid("at least one life is required"));
        }
        Ok(())
    }

    /// Total bricks in the grid. Saturates for grids `validate` would reject.
    pub fn total_bricks(&self) -> u32 {
        self.brick_rows
            .checked_mul(self.brick_cols)
            .and_then(|count| u32::try_from(count).ok())
            .unwrap_or(u32::MAX)
    }

    /// Y coordinate of the paddle top edge
    pub fn paddle_top(&self) -> f32 {
        CANVAS_HEIGHT - self.paddle_bottom_margin
    }

    /// Highest score a single game can reach
    pub fn max_score(&self) -> u64 {
        self.total_bricks() as u64 * self.score_per_brick
    }
}
