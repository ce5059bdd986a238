//! Per-frame simulation tick
//!
//! Order within a tick: paddle → launch → ball motion and walls → paddle
//! deflection → bricks. Every step is deterministic for a given input.

use super::ball::Motion;
use super::collision::handle_brick_collisions;
use super::launch::{DragGesture, calculate_strike_angle_within, strike_direction};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Desired paddle centre x (from pointer or keys)
    pub paddle_target_x: Option<f32>,
    /// Completed launch drag, consumed while serving
    pub drag: Option<DragGesture>,
}

/// Advance the game by one tick and report what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::GameOver => return events,
        GamePhase::LevelCleared => {
            state.next_level();
            return events;
        }
        _ => {}
    }

    state.time_ticks += 1;

    if let Some(target_x) = input.paddle_target_x {
        state.paddle.move_toward(target_x, &state.field);
    }

    match state.phase {
        GamePhase::Serve => {
            state.ball.follow_paddle(&state.paddle.rect);

            if let Some(drag) = input.drag {
                launch(state, &drag, &mut events);
            }
        }

        GamePhase::Playing => {
            match state.ball.update(&state.field) {
                Motion::Resting => {}
                Motion::Moved(hit) => {
                    if hit.any() {
                        events.push(GameEvent::WallBounce);
                    }
                }
                Motion::Lost => {
                    lose_ball(state, &mut events);
                    return events;
                }
            }

            if state.paddle.deflect(&mut state.ball) {
                events.push(GameEvent::PaddleBounce);
            }

            let destroyed = handle_brick_collisions(&mut state.ball, &mut state.bricks);
            for brick in destroyed {
                let points = state.tuning.points_per_brick;
                state.score += points;
                events.push(GameEvent::BrickDestroyed {
                    id: brick.id,
                    points,
                });
            }

            if state.bricks.is_empty() {
                log::info!("Level {} cleared, score {}", state.level, state.score);
                state.phase = GamePhase::LevelCleared;
                events.push(GameEvent::LevelCleared);
            }
        }

        GamePhase::LevelCleared | GamePhase::GameOver => {}
    }

    events
}

/// Fire the resting ball from a drag, slingshot style: the drag pulls down
/// and the ball flies the opposite way, up toward the bricks.
fn launch(state: &mut GameState, drag: &DragGesture, events: &mut Vec<GameEvent>) {
    let max_angle = state.tuning.max_strike_angle();
    let Some(angle) = calculate_strike_angle_within(drag.start, drag.end, max_angle) else {
        log::debug!("Rejected launch drag {:?} -> {:?}", drag.start, drag.end);
        events.push(GameEvent::LaunchRejected);
        return;
    };

    let direction = -strike_direction(angle);
    if state.ball.launch(direction, state.tuning.ball_speed) {
        log::info!(
            "Ball launched at {:.1} deg, vel {:?}",
            angle.to_degrees(),
            state.ball.vel
        );
        state.phase = GamePhase::Playing;
        events.push(GameEvent::Launched {
            vel: state.ball.vel,
        });
    }
}

/// Ball fell out of the bottom: lose a life, then serve again or end the game
fn lose_ball(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    events.push(GameEvent::BallLost {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        log::info!("Game over, final score {}", state.score);
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
    } else {
        log::info!("Ball lost, {} lives left", state.lives);
        state.ball.reset(&state.paddle.rect);
        state.phase = GamePhase::Serve;
    }
}
