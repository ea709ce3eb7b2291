//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one frame. The collision order is
//! fixed: walls, then the bottom-out check, then paddle, then bricks, then
//! the clear check. A tick that finds the game not `Playing`, or any
//! entity still unplaced, does nothing at all.

use super::state::{GameState, GameStatus};

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState) {
    if state.status != GameStatus::Playing {
        return;
    }
    let (Some(playfield), Some(paddle_rect), Some(_)) =
        (state.playfield, state.paddle.rect, state.ball.center)
    else {
        return;
    };

    state.ball.advance(state.tuning.ball_step);
    let Some(hit_box) = state.ball.hit_box(state.tuning.ball_size) else {
        return;
    };

    // Walls: horizontal first, then top; both can fire on a corner
    state.ball.reflect_walls(hit_box, playfield);

    // Bottom-out ends the game before any paddle/brick resolution
    if hit_box.bottom() >= playfield.bottom() {
        log::info!("ball out, final score {}", state.score);
        state.set_status(GameStatus::GameOver, false);
        return;
    }

    if hit_box.intersects(&paddle_rect) {
        state.ball.bounce_up();
    }

    // At most one brick falls per tick
    if state.bricks.hit_test(hit_box).is_some() {
        state.ball.flip_vertical();
        state.score += 1;
    }

    if state.bricks.all_destroyed() {
        log::info!("all bricks cleared, final score {}", state.score);
        state.set_status(GameStatus::GameClear, false);
    }
}
