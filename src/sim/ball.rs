//! Ball entity and per-tick motion integration
//!
//! Motion is a plain Euler step with no delta time: one velocity unit moves
//! the ball one pixel per tick. Walls bounce the ball on the top, left and
//! right edges of the playfield; the bottom is open and only reported.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{BALL_RADIUS, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Visible play area, anchored at the screen origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Walls the ball bounced off during one wall check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub top: bool,
    pub left: bool,
    pub right: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.top || self.left || self.right
    }
}

/// Outcome of advancing the ball by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Ball is resting on the paddle; nothing moved
    Resting,
    /// Ball moved and is still inside the playfield
    Moved(WallHit),
    /// Ball crossed the open bottom edge
    Lost,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Centre position
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
    /// False while resting on the paddle waiting for launch
    pub in_play: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(BALL_RADIUS)
    }
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            in_play: false,
        }
    }

    /// Bounding square of the ball
    pub fn rect(&self) -> Rect {
        let size = self.radius * 2.0;
        Rect::from_center(self.pos, size, size)
    }

    /// Park the ball on top of the paddle (resting balls only)
    pub fn follow_paddle(&mut self, paddle: &Rect) {
        if !self.in_play {
            self.pos = Vec2::new(paddle.center_x(), paddle.top() - self.radius - 1.0);
        }
    }

    /// Take the ball out of play and put it back on the paddle
    pub fn reset(&mut self, paddle: &Rect) {
        self.in_play = false;
        self.vel = Vec2::ZERO;
        self.follow_paddle(paddle);
    }

    /// Launch a resting ball along `direction` at `speed` pixels per tick.
    ///
    /// Returns false (and leaves the ball alone) if it is already in play or
    /// the direction is degenerate.
    pub fn launch(&mut self, direction: Vec2, speed: f32) -> bool {
        if self.in_play {
            return false;
        }
        let vel = direction.normalize_or_zero() * speed;
        if vel == Vec2::ZERO {
            return false;
        }
        self.vel = vel;
        self.in_play = true;
        true
    }

    /// Advance one tick and bounce off the walls
    pub fn update(&mut self, field: &Playfield) -> Motion {
        if !self.in_play {
            return Motion::Resting;
        }

        self.pos += self.vel;
        let hit = self.resolve_walls(field);

        if self.rect().bottom() >= field.height {
            return Motion::Lost;
        }
        Motion::Moved(hit)
    }

    /// Bounce off the top, left and right walls.
    ///
    /// A component only flips while the ball is moving into the wall, and the
    /// position is clamped back inside, so repeating the check is a no-op.
    pub fn resolve_walls(&mut self, field: &Playfield) -> WallHit {
        let mut hit = WallHit::default();
        let r = self.rect();

        if r.top() <= 0.0 {
            if self.vel.y < 0.0 {
                self.vel.y = -self.vel.y;
                hit.top = true;
            }
            self.pos.y = self.radius;
        }

        if r.left() <= 0.0 {
            if self.vel.x < 0.0 {
                self.vel.x = -self.vel.x;
                hit.left = true;
            }
            self.pos.x = self.radius;
        } else if r.right() >= field.width {
            if self.vel.x > 0.0 {
                self.vel.x = -self.vel.x;
                hit.right = true;
            }
            self.pos.x = field.width - self.radius;
        }

        if hit.any() {
            log::debug!("Wall bounce {:?} -> vel {:?}", hit, self.vel);
        }
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: 5.0,
            in_play: true,
        }
    }

    #[test]
    fn test_update_moves_one_velocity_unit() {
        let field = Playfield::new(200.0, 200.0);
        let mut ball = ball_at(100.0, 100.0, 3.0, -2.0);
        assert_eq!(ball.update(&field), Motion::Moved(WallHit::default()));
        assert_eq!(ball.pos, Vec2::new(103.0, 98.0));
        assert_eq!(ball.vel, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_resting_ball_does_not_move() {
        let field = Playfield::default();
        let mut ball = Ball::new(5.0);
        ball.pos = Vec2::new(50.0, 50.0);
        assert_eq!(ball.update(&field), Motion::Resting);
        assert_eq!(ball.pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_top_wall_bounce() {
        let field = Playfield::new(200.0, 200.0);
        let mut ball = ball_at(100.0, 6.0, 0.0, -3.0);
        let motion = ball.update(&field);
        assert!(matches!(motion, Motion::Moved(hit) if hit.top));
        assert!(ball.vel.y > 0.0);
        assert_eq!(ball.vel.y, 3.0);
        assert!(ball.rect().top() >= 0.0);
    }

    #[test]
    fn test_side_wall_bounces() {
        let field = Playfield::new(200.0, 200.0);

        let mut left = ball_at(5.0, 100.0, -2.0, 1.0);
        let hit = left.resolve_walls(&field);
        assert!(hit.left);
        assert_eq!(left.vel.x, 2.0);

        let mut right = ball_at(195.0, 100.0, 2.0, 1.0);
        let hit = right.resolve_walls(&field);
        assert!(hit.right);
        assert_eq!(right.vel.x, -2.0);

        let mut interior = ball_at(100.0, 100.0, -2.0, -1.0);
        assert!(!interior.resolve_walls(&field).any());
        assert_eq!(interior.vel, Vec2::new(-2.0, -1.0));
    }

    #[test]
    fn test_overshoot_is_clamped_inside() {
        let field = Playfield::new(200.0, 200.0);
        let mut ball = ball_at(198.0, 3.0, 4.0, -4.0);
        ball.update(&field);
        let r = ball.rect();
        assert!(r.right() <= field.width);
        assert!(r.top() >= 0.0);
        assert_eq!(ball.vel, Vec2::new(-4.0, 4.0));
    }

    #[test]
    fn test_wall_check_is_idempotent() {
        let field = Playfield::new(200.0, 200.0);
        let mut ball = ball_at(2.0, 2.0, -1.0, -1.0);
        let first = ball.resolve_walls(&field);
        assert!(first.top && first.left);
        let vel = ball.vel;
        let second = ball.resolve_walls(&field);
        assert!(!second.any());
        assert_eq!(ball.vel, vel);
    }

    proptest::proptest! {
        #[test]
        fn prop_walls_settle_after_one_check(
            x in -20.0f32..220.0,
            y in -20.0f32..150.0,
            vx in -8.0f32..8.0,
            vy in -8.0f32..8.0,
        ) {
            let field = Playfield::new(200.0, 200.0);
            let mut ball = ball_at(x, y, vx, vy);
            ball.resolve_walls(&field);
            let (pos, vel) = (ball.pos, ball.vel);

            let r = ball.rect();
            proptest::prop_assert!(r.left() >= 0.0 && r.right() <= field.width && r.top() >= 0.0);
            proptest::prop_assert!(!ball.resolve_walls(&field).any());
            proptest::prop_assert_eq!(ball.pos, pos);
            proptest::prop_assert_eq!(ball.vel, vel);
        }
    }

    #[test]
    fn test_bottom_exit_is_reported() {
        let field = Playfield::new(200.0, 200.0);
        let mut ball = ball_at(100.0, 193.0, 0.0, 3.0);
        assert_eq!(ball.update(&field), Motion::Lost);
        // Not bounced
        assert_eq!(ball.vel.y, 3.0);
    }

    #[test]
    fn test_launch_and_reset() {
        let paddle = Rect::new(50.0, 180.0, 40.0, 10.0);
        let mut ball = Ball::new(5.0);
        ball.reset(&paddle);
        assert_eq!(ball.pos, Vec2::new(70.0, 174.0));

        assert!(!ball.launch(Vec2::ZERO, 5.0));
        assert!(!ball.in_play);

        assert!(ball.launch(Vec2::new(0.0, -2.0), 5.0));
        assert_eq!(ball.vel, Vec2::new(0.0, -5.0));
        // Already in play
        assert!(!ball.launch(Vec2::new(1.0, 0.0), 5.0));

        ball.reset(&paddle);
        assert!(!ball.in_play);
        assert_eq!(ball.vel, Vec2::ZERO);
    }
}
