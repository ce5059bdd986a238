//! Data-driven game balance
//!
//! Defaults come from [`crate::consts`]; any field can be overridden from a
//! JSON document, missing fields keep their default.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors from loading or validating tuning data
#[derive(Debug)]
pub enum TuningError {
    /// Document is not valid JSON for [`Tuning`]
    Parse(serde_json::Error),
    /// Document parsed but a value is out of range
    Invalid(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "failed to parse tuning: {}", e),
            TuningError::Invalid(msg) => write!(f, "invalid tuning: {}", msg),
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

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Launch speed (pixels per tick)
    pub ball_speed: f32,
    /// Steepest accepted launch drag, degrees away from straight down
    pub max_strike_angle_deg: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_bottom_offset: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_gap: f32,
    pub brick_top_offset: f32,
    /// Chance (0-1) that a grid slot is left empty
    pub brick_gap_chance: f32,
    pub layout_seed: u64,

    // === Rules ===
    pub starting_lives: u8,
    pub points_per_brick: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            max_strike_angle_deg: MAX_STRIKE_ANGLE_DEG,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,
            brick_top_offset: BRICK_TOP_OFFSET,
            brick_gap_chance: 0.0,
            layout_seed: 0,

            starting_lives: STARTING_LIVES,
            points_per_brick: POINTS_PER_BRICK,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning ({} x {} bricks)", tuning.brick_cols, tuning.brick_rows);
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Max strike angle in radians
    pub fn max_strike_angle(&self) -> f32 {
        self.max_strike_angle_deg.to_radians()
    }

    /// Bottom edge of the brick grid
    pub fn grid_bottom(&self) -> f32 {
        let rows = self.brick_rows as f32;
        self.brick_top_offset + rows * self.brick_height + (rows - 1.0).max(0.0) * self.brick_gap
    }

    /// Total width of the brick grid
    pub fn grid_width(&self) -> f32 {
        let cols = self.brick_cols as f32;
        cols * self.brick_width + (cols - 1.0).max(0.0) * self.brick_gap
    }

    /// Top edge of the paddle
    pub fn paddle_top(&self) -> f32 {
        self.playfield_height - self.paddle_bottom_offset - self.paddle_height
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::Invalid(format!("{} must be positive, got {}", name, value)));
            }
        }

        if !(0.0..90.0).contains(&self.max_strike_angle_deg) || self.max_strike_angle_deg == 0.0 {
            return Err(TuningError::Invalid(format!(
                "max_strike_angle_deg must be within (0, 90), got {}",
                self.max_strike_angle_deg
            )));
        }
        if !(0.0..1.0).contains(&self.brick_gap_chance) {
            return Err(TuningError::Invalid(format!(
                "brick_gap_chance must be within [0, 1), got {}",
                self.brick_gap_chance
            )));
        }
        let non_negative = [
            ("brick_gap", self.brick_gap),
            ("brick_top_offset", self.brick_top_offset),
            ("paddle_bottom_offset", self.paddle_bottom_offset),
        ];
        for (name, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(TuningError::Invalid(format!("{} must not be negative, got {}", name, value)));
            }
        }
        if self.starting_lives == 0 {
            return Err(TuningError::Invalid("starting_lives must be at least 1".into()));
        }
        if self.paddle_width > self.playfield_width {
            return Err(TuningError::Invalid("paddle is wider than the playfield".into()));
        }
        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(TuningError::Invalid("brick grid must have at least one row and column".into()));
        }
        if self.grid_width() > self.playfield_width {
            return Err(TuningError::Invalid(format!(
                "brick grid is {} wide, playfield is {}",
                self.grid_width(),
                self.playfield_width
            )));
        }
        // Leave room for the resting ball between the grid and the paddle
        if self.grid_bottom() + self.ball_radius * 2.0 >= self.paddle_top() {
            return Err(TuningError::Invalid("brick grid overlaps the paddle area".into()));
        }
        Ok(())
    }
}
