//! Data-driven game balance
//!
//! Every gameplay number a designer might want to tweak lives here, with
//! defaults matching `consts`. The binary can load overrides from a JSON
//! file; the library never touches the filesystem itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Brick grid shape
    pub rows: usize,
    pub cols: usize,
    /// Side of the ball's square hit box
    pub ball_size: f32,
    /// Per-axis distance the ball covers each tick (magnitudes; direction
    /// is carried by the ball's sign pair)
    pub ball_step: Vec2,
    /// Paddle dimensions
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal padding the brick tiling stays inside
    pub side_padding: f32,
    /// Nudge distance as a fraction of playfield width
    pub nudge_fraction: f32,
    /// Side of the square drag pick-up probe
    pub touch_probe: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            rows: consts::GRID_ROWS,
            cols: consts::GRID_COLS,
            ball_size: consts::BALL_SIZE,
            ball_step: Vec2::new(consts::BALL_STEP_X, consts::BALL_STEP_Y),
            paddle_width: consts::PADDLE_WIDTH,
            paddle_height: consts::PADDLE_HEIGHT,
            side_padding: consts::SIDE_PADDING,
            nudge_fraction: consts::NUDGE_FRACTION,
            touch_probe: consts::TOUCH_PROBE,
        }
    }
}

impl Tuning {
    /// Environment variable naming an overrides file
    pub const ENV_PATH: &'static str = "BRICKBREAK_TUNING";

    /// Load tuning from the file named by `BRICKBREAK_TUNING`, falling
    /// back to defaults when unset or unreadable. Unknown values fall back
    /// field by field via `#[serde(default)]`.
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_PATH) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring malformed tuning file {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
