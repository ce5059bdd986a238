//! Axis-aligned rectangle geometry for the ball, paddle and bricks
//!
//! Screen convention: origin at the top-left, x grows right, y grows down.
//! Rectangles are closed on every edge: a point on the boundary is inside, and
//! two rectangles that share only an edge overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (origin = top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on `center`
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    /// Midpoint of the top edge
    pub fn mid_top(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.top())
    }

    /// Midpoint of the bottom edge
    pub fn mid_bottom(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.bottom())
    }

    /// Midpoint of the left edge
    pub fn mid_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.center_y())
    }

    /// Midpoint of the right edge
    pub fn mid_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.center_y())
    }

    /// Check if a point is inside the rectangle (edges included)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// AABB overlap test: both axis projections must intersect (edges included)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Euclidean distance from a point to the rectangle (0 when inside)
    pub fn distance_to_point(&self, p: Vec2) -> f32 {
        let dx = (self.left() - p.x).max(0.0).max(p.x - self.right());
        let dy = (self.top() - p.y).max(0.0).max(p.y - self.bottom());
        Vec2::new(dx, dy).length()
    }
}

/// Anything that occupies an axis-aligned rectangle
pub trait HasRect {
    fn rect(&self) -> Rect;
}

impl HasRect for Rect {
    fn rect(&self) -> Rect {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_midpoints() {
        let r = Rect::new(10.0, 20.0, 40.0, 10.0);
        assert_eq!(r.mid_top(), Vec2::new(30.0, 20.0));
        assert_eq!(r.mid_bottom(), Vec2::new(30.0, 30.0));
        assert_eq!(r.mid_left(), Vec2::new(10.0, 25.0));
        assert_eq!(r.mid_right(), Vec2::new(50.0, 25.0));
        assert_eq!(r.center(), Vec2::new(30.0, 25.0));
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(100.0, 50.0), 12.0, 12.0);
        assert_eq!(r.left(), 94.0);
        assert_eq!(r.top(), 44.0);
        assert_eq!(r.right(), 106.0);
        assert_eq!(r.bottom(), 56.0);
    }

    #[test]
    fn test_intersects_closed_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x = 10 edge
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        // Corner touch at (10, 10)
        let corner = Rect::new(10.0, 10.0, 5.0, 5.0);
        let apart = Rect::new(10.5, 0.0, 10.0, 10.0);

        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
        assert!(a.intersects(&corner));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_intersects_needs_both_axes() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Overlaps on x only
        let below = Rect::new(2.0, 20.0, 4.0, 4.0);
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_contains_point_and_distance() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Vec2::new(10.0, 5.0)));
        assert!(!r.contains_point(Vec2::new(10.1, 5.0)));
        assert_eq!(r.distance_to_point(Vec2::new(5.0, 5.0)), 0.0);
        assert!((r.distance_to_point(Vec2::new(13.0, 14.0)) - 5.0).abs() < 1e-5);
    }
}
