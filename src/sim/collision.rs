//! Brick collision response
//!
//! The response depends only on how many bricks the ball overlaps this tick:
//! - one brick: the ball edge touching it picks the axis
//! - two bricks: their layout (stacked, side by side, diagonal) picks the axis
//! - three or more: the ball is wedged into a corner and reverses both axes
//!
//! Each case is handled by exactly one arm of a single match.

use glam::Vec2;

use super::ball::Ball;
use super::rect::{HasRect, Rect};
use crate::consts::CENTER_EPSILON;

/// Which edge midpoint of the ball touched a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Right,
    Left,
    Top,
    Bottom,
}

impl Contact {
    /// Priority order used when picking the contact edge
    const ORDER: [Contact; 4] = [Contact::Right, Contact::Left, Contact::Top, Contact::Bottom];

    fn anchor(self, ball: &Rect) -> Vec2 {
        match self {
            Contact::Right => ball.mid_right(),
            Contact::Left => ball.mid_left(),
            Contact::Top => ball.mid_top(),
            Contact::Bottom => ball.mid_bottom(),
        }
    }

    /// How far this edge of the ball has crossed the brick face it meets
    fn depth(self, ball: &Rect, brick: &Rect) -> f32 {
        match self {
            Contact::Right => ball.right() - brick.left(),
            Contact::Left => brick.right() - ball.left(),
            Contact::Top => brick.bottom() - ball.top(),
            Contact::Bottom => ball.bottom() - brick.top(),
        }
    }
}

/// Velocity response to the bricks hit in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounce {
    None,
    /// Single brick touched by one edge of the ball
    Edge(Contact),
    FlipX,
    FlipY,
    FlipBoth,
}

impl Bounce {
    /// Apply to a velocity; magnitudes never change
    pub fn apply(self, vel: Vec2) -> Vec2 {
        match self {
            Bounce::None => vel,
            Bounce::Edge(Contact::Right) => Vec2::new(-vel.x.abs(), vel.y),
            Bounce::Edge(Contact::Left) => Vec2::new(vel.x.abs(), vel.y),
            Bounce::Edge(Contact::Top) => Vec2::new(vel.x, vel.y.abs()),
            Bounce::Edge(Contact::Bottom) => Vec2::new(vel.x, -vel.y.abs()),
            Bounce::FlipX => Vec2::new(-vel.x, vel.y),
            Bounce::FlipY => Vec2::new(vel.x, -vel.y),
            Bounce::FlipBoth => -vel,
        }
    }
}

/// Edge of the ball in contact with a single brick.
///
/// Among the edge midpoints inside the brick, the one that went in the least
/// deep wins, so a fast ball that sank past the brick edge still bounces off
/// the face it came through. For a pure corner touch (no midpoint inside)
/// the midpoint closest to the brick is used. Ties keep `ORDER`.
pub fn contact_edge(ball: &Rect, brick: &Rect) -> Contact {
    let mut inside: Option<(Contact, f32)> = None;
    for contact in Contact::ORDER {
        if !brick.contains_point(contact.anchor(ball)) {
            continue;
        }
        let depth = contact.depth(ball, brick);
        if inside.is_none_or(|(_, best)| depth < best) {
            inside = Some((contact, depth));
        }
    }
    if let Some((contact, _)) = inside {
        return contact;
    }

    let mut best = Contact::ORDER[0];
    let mut best_dist = f32::INFINITY;
    for contact in Contact::ORDER {
        let dist = brick.distance_to_point(contact.anchor(ball));
        if dist < best_dist {
            best = contact;
            best_dist = dist;
        }
    }
    best
}

/// Response for the set of bricks overlapping the ball this tick
pub fn bounce_response(ball: &Rect, hits: &[Rect]) -> Bounce {
    match hits {
        [] => Bounce::None,
        [brick] => Bounce::Edge(contact_edge(ball, brick)),
        [a, b] => {
            if (a.center_x() - b.center_x()).abs() <= CENTER_EPSILON {
                // Stacked in a column: the ball met their shared vertical face
                Bounce::FlipX
            } else if (a.center_y() - b.center_y()).abs() <= CENTER_EPSILON {
                // Side by side in a row
                Bounce::FlipY
            } else {
                Bounce::FlipBoth
            }
        }
        _ => Bounce::FlipBoth,
    }
}

/// Indices of the bricks overlapping `ball`, in collection order
pub fn overlapping<B: HasRect>(ball: &Rect, bricks: &[B]) -> Vec<usize> {
    bricks
        .iter()
        .enumerate()
        .filter(|(_, b)| b.rect().intersects(ball))
        .map(|(i, _)| i)
        .collect()
}

/// Bounce the ball off every brick it overlaps and remove those bricks.
///
/// Returns the destroyed bricks in their original order so the caller can
/// score them. A ball that is not in play never collides.
pub fn handle_brick_collisions<B: HasRect>(ball: &mut Ball, bricks: &mut Vec<B>) -> Vec<B> {
    if !ball.in_play {
        return Vec::new();
    }

    let ball_rect = ball.rect();
    let hit_indices = overlapping(&ball_rect, bricks);
    if hit_indices.is_empty() {
        return Vec::new();
    }

    let hit_rects: Vec<Rect> = hit_indices.iter().map(|&i| bricks[i].rect()).collect();
    let bounce = bounce_response(&ball_rect, &hit_rects);
    ball.vel = bounce.apply(ball.vel);
    log::debug!(
        "Brick hit x{} -> {:?}, vel {:?}",
        hit_indices.len(),
        bounce,
        ball.vel
    );

    // Remove back to front so earlier indices stay valid
    let mut destroyed: Vec<B> = hit_indices
        .iter()
        .rev()
        .map(|&i| bricks.remove(i))
        .collect();
    destroyed.reverse();
    destroyed
}
