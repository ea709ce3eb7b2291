//! Brickbreak entry point
//!
//! A headless frame driver: it initializes logging, loads tuning, then
//! plays one full game at the fixed tick rate, steering the paddle toward
//! the ball with the nudge buttons. Doubles as a smoke run and as a
//! reference for wiring a real renderer/input host to the core.

use brickbreak::Tuning;
use brickbreak::consts::TICK_HZ;
use brickbreak::sim::{GameState, GameStatus, tick};

const PLAYFIELD_W: f32 = 400.0;
const PLAYFIELD_H: f32 = 600.0;

/// Give up after two minutes of simulated time
const MAX_FRAMES: u32 = TICK_HZ * 120;

fn main() {
    env_logger::init();

    let tuning = Tuning::load();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Brickbreak starting with seed {}", seed);

    let mut game = GameState::new(seed, tuning);
    game.on_playfield_sized(PLAYFIELD_W, PLAYFIELD_H);
    game.click_toggle_status();

    let mut last_status = game.status;
    for frame in 0..MAX_FRAMES {
        autopilot(&mut game);
        tick(&mut game);

        if game.status != last_status {
            log::info!(
                "frame {}: {:?} -> {:?} (score {}, {} bricks left)",
                frame,
                last_status,
                game.status,
                game.score,
                game.bricks.remaining()
            );
            last_status = game.status;
        }
        if matches!(game.status, GameStatus::GameOver | GameStatus::GameClear) {
            break;
        }
    }

    let snap = game.snapshot();
    match serde_json::to_string(&snap) {
        Ok(json) => log::debug!("final snapshot: {}", json),
        Err(e) => log::warn!("snapshot serialization failed: {}", e),
    }
    println!(
        "{:?} - score {}, {} bricks left",
        game.status,
        game.score,
        game.bricks.remaining()
    );
}

/// Keep the paddle under the ball using the discrete nudge buttons
fn autopilot(game: &mut GameState) {
    let (Some(ball), Some(paddle)) = (game.ball.center, game.paddle.rect) else {
        return;
    };
    let offset = ball.x - paddle.center().x;
    if offset.abs() > paddle.width() / 2.0 {
        if offset < 0.0 {
            game.click_left();
        } else {
            game.click_right();
        }
    }
}
