//! Game state and core simulation types
//!
//! Everything a round needs lives in [`GameState`], which is serializable so
//! a round can be snapshotted and replayed deterministically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, Playfield};
use super::layout::generate_layout;
use super::rect::{HasRect, Rect};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting on paddle, waiting for a launch gesture
    Serve,
    /// Ball in flight
    Playing,
    /// Every brick destroyed
    LevelCleared,
    /// Out of lives
    GameOver,
}

/// Something the surrounding game (scoring, audio, UI) may react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball left the paddle with this velocity
    Launched { vel: Vec2 },
    /// A launch gesture was rejected; the ball stays on the paddle
    LaunchRejected,
    WallBounce,
    PaddleBounce,
    BrickDestroyed { id: u32, points: u64 },
    BallLost { lives_left: u8 },
    LevelCleared,
    GameOver,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Maximum horizontal travel per tick
    pub speed: f32,
}

impl Paddle {
    /// Paddle centred horizontally near the bottom of the playfield
    pub fn new(tuning: &Tuning) -> Self {
        let x = (tuning.playfield_width - tuning.paddle_width) / 2.0;
        let y = tuning.playfield_height - tuning.paddle_bottom_offset - tuning.paddle_height;
        Self {
            rect: Rect::new(x, y, tuning.paddle_width, tuning.paddle_height),
            speed: tuning.paddle_speed,
        }
    }

    /// Slide toward a target centre x, limited by speed and the playfield
    pub fn move_toward(&mut self, target_x: f32, field: &Playfield) {
        let delta = (target_x - self.rect.center_x()).clamp(-self.speed, self.speed);
        let max_x = (field.width - self.rect.width).max(0.0);
        self.rect.x = (self.rect.x + delta).clamp(0.0, max_x);
    }

    /// Deflect a falling ball back upward.
    ///
    /// Returns true if the ball bounced. Only a ball moving down can bounce,
    /// and it is lifted to sit on the paddle so it cannot re-trigger.
    pub fn deflect(&self, ball: &mut Ball) -> bool {
        if !ball.in_play || ball.vel.y <= 0.0 || !ball.rect().intersects(&self.rect) {
            return false;
        }
        ball.vel.y = -ball.vel.y;
        ball.pos.y = self.rect.top() - ball.radius;
        true
    }
}

/// A brick; it is alive for as long as it sits in [`GameState::bricks`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub rect: Rect,
}

impl HasRect for Brick {
    fn rect(&self) -> Rect {
        self.rect
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub field: Playfield,
    pub phase: GamePhase,
    pub lives: u8,
    pub score: u64,
    /// Level index (0-based), also mixed into the layout seed
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Active bricks, sorted by id
    pub bricks: Vec<Brick>,
}

impl GameState {
    /// Create a new game with the first level laid out
    pub fn new(tuning: Tuning) -> Self {
        let field = Playfield::new(tuning.playfield_width, tuning.playfield_height);
        let paddle = Paddle::new(&tuning);
        let mut ball = Ball::new(tuning.ball_radius);
        ball.reset(&paddle.rect);
        let bricks = generate_layout(&tuning, tuning.layout_seed);

        Self {
            lives: tuning.starting_lives,
            tuning,
            field,
            phase: GamePhase::Serve,
            score: 0,
            level: 0,
            time_ticks: 0,
            paddle,
            ball,
            bricks,
        }
    }

    /// Lay out the next level and put the ball back on the paddle
    pub fn next_level(&mut self) {
        self.level += 1;
        let seed = self.tuning.layout_seed.wrapping_add(u64::from(self.level));
        self.bricks = generate_layout(&self.tuning, seed);
        self.ball.reset(&self.paddle.rect);
        self.phase = GamePhase::Serve;
        log::info!("Level {}: {} bricks", self.level, self.bricks.len());
    }
}
