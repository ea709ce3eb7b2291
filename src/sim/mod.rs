//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Fixed row-major brick scan order
//! - No rendering or platform dependencies

pub mod ball;
pub mod bricks;
pub mod geom;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use bricks::{Brick, BrickColor, BrickGrid};
pub use geom::Rect;
pub use paddle::{NudgeDirection, Paddle};
pub use state::{GameState, GameStatus, Snapshot};
pub use tick::tick;
