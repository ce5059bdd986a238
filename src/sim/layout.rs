//! Brick grid generation
//!
//! Rows of equal bricks centred horizontally under the top wall. Slots can be
//! left empty at random, driven only by the seed so a level always lays out
//! the same way.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::state::Brick;
use crate::tuning::Tuning;

/// Lay out a level's bricks (ids start at 1, row-major order)
pub fn generate_layout(tuning: &Tuning, seed: u64) -> Vec<Brick> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let left = ((tuning.playfield_width - tuning.grid_width()) / 2.0).max(0.0);
    let step_x = tuning.brick_width + tuning.brick_gap;
    let step_y = tuning.brick_height + tuning.brick_gap;

    let mut bricks = Vec::with_capacity((tuning.brick_rows * tuning.brick_cols) as usize);
    let mut next_id = 1;
    for row in 0..tuning.brick_rows {
        for col in 0..tuning.brick_cols {
            let id = next_id;
            next_id += 1;

            // Always roll so every slot consumes the same RNG draw
            let roll: f32 = rng.random();
            if roll < tuning.brick_gap_chance {
                continue;
            }

            bricks.push(Brick {
                id,
                rect: Rect::new(
                    left + col as f32 * step_x,
                    tuning.brick_top_offset + row as f32 * step_y,
                    tuning.brick_width,
                    tuning.brick_height,
                ),
            });
        }
    }

    // A level with no bricks would clear instantly
    if bricks.is_empty() && tuning.brick_rows > 0 && tuning.brick_cols > 0 {
        bricks.push(Brick {
            id: 1,
            rect: Rect::new(left, tuning.brick_top_offset, tuning.brick_width, tuning.brick_height),
        });
    }

    log::debug!("Generated {} bricks (seed {})", bricks.len(), seed);
    bricks
}
