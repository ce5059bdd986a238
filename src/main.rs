//! Brick Breaker entry point
//!
//! Native headless runner: plays a scripted session against the simulation
//! with a paddle that chases the ball, logging every game event.
//!
//! Usage: `brick-breaker [tuning.json] [max_ticks]`

use brick_breaker::Tuning;
use brick_breaker::sim::{DragGesture, GameEvent, GamePhase, GameState, TickInput, tick};
use glam::Vec2;

const DEFAULT_MAX_TICKS: u64 = 20_000;

fn load_tuning(path: Option<&str>) -> Result<Tuning, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(Tuning::from_json(&json)?)
        }
        None => Ok(Tuning::default()),
    }
}

/// Alternate launch drags so consecutive serves do not repeat exactly
fn serve_drag(serve: u32) -> DragGesture {
    let lean = [-40.0, 25.0, 0.0, 55.0, -15.0][serve as usize % 5];
    DragGesture::new(Vec2::new(320.0, 240.0), Vec2::new(320.0 + lean, 320.0))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let tuning = match load_tuning(args.get(1).map(String::as_str)) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let max_ticks = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_TICKS);

    log::info!("Brick Breaker (headless) starting, {} ticks max", max_ticks);
    let mut state = GameState::new(tuning);
    let mut serves = 0;
    let mut destroyed = 0;

    while state.time_ticks < max_ticks && state.phase != GamePhase::GameOver {
        let mut input = TickInput::default();
        if state.phase == GamePhase::Serve {
            input.drag = Some(serve_drag(serves));
            serves += 1;
        } else {
            input.paddle_target_x = Some(state.ball.pos.x);
        }

        for event in tick(&mut state, &input) {
            match event {
                GameEvent::BrickDestroyed { id, .. } => {
                    destroyed += 1;
                    log::debug!("Brick {} destroyed", id);
                }
                GameEvent::WallBounce | GameEvent::PaddleBounce => {}
                other => log::info!("{:?}", other),
            }
        }
    }

    println!(
        "ticks={} level={} score={} lives={} bricks_destroyed={} phase={:?}",
        state.time_ticks, state.level, state.score, state.lives, destroyed, state.phase
    );
}
