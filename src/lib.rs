//! Brick Breaker - A breakout-style arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, game state)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels, origin top-left, y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 640.0;
    pub const PLAYFIELD_HEIGHT: f32 = 480.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 6.0;
    /// Launch speed in pixels per tick
    pub const BALL_SPEED: f32 = 5.0;

    /// Maximum drag angle away from straight down (degrees)
    pub const MAX_STRIKE_ANGLE_DEG: f32 = 80.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 90.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    /// Pixels per tick
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Gap between paddle bottom and playfield bottom
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 6;
    pub const BRICK_COLS: u32 = 10;
    pub const BRICK_WIDTH: f32 = 58.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 4.0;
    pub const BRICK_TOP_OFFSET: f32 = 50.0;

    /// Starting lives
    pub const STARTING_LIVES: u8 = 3;
    pub const POINTS_PER_BRICK: u64 = 10;

    /// Tolerance for comparing brick centres
    pub const CENTER_EPSILON: f32 = 0.01;
}
