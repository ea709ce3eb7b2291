//! Brickbreak - a single-screen breakout arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, physics, brick grid)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input plumbing and the frame timer are external collaborators:
//! a host calls the command methods on [`sim::GameState`], drives
//! [`sim::tick`] at [`consts::TICK_HZ`], and draws from
//! [`sim::GameState::snapshot`]. The bundled binary is a headless frame
//! driver that plays the game by itself.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Frame driver cadence (ticks per second)
    pub const TICK_HZ: u32 = 30;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;

    /// Default brick grid shape
    pub const GRID_ROWS: usize = 5;
    pub const GRID_COLS: usize = 4;

    /// Ball defaults - the hit box is a square, the step is per tick per axis
    pub const BALL_SIZE: f32 = 8.0;
    pub const BALL_STEP_X: f32 = 5.0;
    pub const BALL_STEP_Y: f32 = 5.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;

    /// Horizontal playfield padding the brick tiling stays inside
    pub const SIDE_PADDING: f32 = 8.0;

    /// Paddle nudge distance as a fraction of playfield width
    pub const NUDGE_FRACTION: f32 = 0.2;

    /// Side of the square probe used to pick up a paddle drag.
    /// Independent of paddle size, so drags starting just off the paddle
    /// still register.
    pub const TOUCH_PROBE: f32 = 48.0;
}
