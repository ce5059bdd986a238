//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick displacement, no delta time
//! - Seeded RNG only (brick layout)
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod launch;
pub mod layout;
pub mod rect;
pub mod state;
pub mod tick;

pub use ball::{Ball, Motion, Playfield, WallHit};
pub use collision::{Bounce, Contact, bounce_response, handle_brick_collisions, overlapping};
pub use launch::{DragGesture, calculate_strike_angle, calculate_strike_angle_within, strike_direction};
pub use layout::generate_layout;
pub use rect::{HasRect, Rect};
pub use state::{Brick, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
