//! Launch-angle calculation from a drag gesture
//!
//! A drag is only a valid strike when it moves down the screen (positive y)
//! and stays within `MAX_STRIKE_ANGLE_DEG` of straight down. Angles are
//! measured from the vertical-down axis: 0 is straight down, positive leans
//! right, negative leans left.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_STRIKE_ANGLE_DEG;

/// A pointer-down / pointer-up pair in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragGesture {
    pub start: Vec2,
    pub end: Vec2,
}

impl DragGesture {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Strike angle for this drag using the default angle limit
    pub fn strike_angle(&self) -> Option<f32> {
        calculate_strike_angle(self.start, self.end)
    }
}

/// Strike angle (radians from straight down) for a drag, or `None` when the
/// drag is not downward or leans too far toward horizontal.
pub fn calculate_strike_angle(start: Vec2, end: Vec2) -> Option<f32> {
    calculate_strike_angle_within(start, end, MAX_STRIKE_ANGLE_DEG.to_radians())
}

/// Same as [`calculate_strike_angle`] with an explicit limit (radians)
pub fn calculate_strike_angle_within(start: Vec2, end: Vec2, max_angle: f32) -> Option<f32> {
    let drag = end - start;
    if drag.y <= 0.0 {
        return None;
    }

    let angle = drag.x.atan2(drag.y);
    if angle.abs() > max_angle {
        return None;
    }
    Some(angle)
}

/// Unit direction for a strike angle: y is always positive (downward) and the
/// sign of x follows the angle.
#[inline]
pub fn strike_direction(angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), angle.cos())
}
