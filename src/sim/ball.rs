//! Ball position and velocity direction
//!
//! The ball's speed never changes: each axis advances by a constant step
//! per tick, and collisions only manipulate the sign pair. Reflection is
//! resolved a tick after boundary contact - the ball is never snapped back
//! inside, it simply turns around on the next step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;

/// The ball. `center = None` means not yet placed for the current game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub center: Option<Vec2>,
    /// Direction sign pair, componentwise -1 or +1 (y = +1 is downward)
    pub sign: Vec2,
}

impl Ball {
    /// A fresh, unplaced ball. The horizontal sign is the caller's roll;
    /// the vertical sign always starts downward.
    pub fn new(sign_x: f32) -> Self {
        debug_assert!(sign_x == 1.0 || sign_x == -1.0);
        Self {
            center: None,
            sign: Vec2::new(sign_x, 1.0),
        }
    }

    /// Place at the playfield's geometric center
    pub fn place_default(&mut self, playfield: Rect) {
        self.center = Some(playfield.center());
    }

    /// One tick of motion: `center += step * sign`. No-op while unplaced.
    pub fn advance(&mut self, step: Vec2) {
        if let Some(center) = self.center.as_mut() {
            *center += step * self.sign;
        }
    }

    /// Square hit box around the current center
    pub fn hit_box(&self, size: f32) -> Option<Rect> {
        self.center
            .map(|c| Rect::from_center_size(c, Vec2::splat(size)))
    }

    /// Wall reflection: turn around horizontally when either side edge is
    /// out of bounds, vertically when the top edge is. The horizontal
    /// check runs first; both can fire in the same tick (a corner).
    pub fn reflect_walls(&mut self, hit_box: Rect, playfield: Rect) {
        if hit_box.left() < playfield.left() || hit_box.right() > playfield.right() {
            self.sign.x = -self.sign.x;
        }
        if hit_box.top() < playfield.top() {
            self.sign.y = -self.sign.y;
        }
    }

    /// Paddle response: send the ball upward no matter which way it was
    /// going. An assignment, not a flip - a ball already rising keeps
    /// rising instead of double-reflecting.
    pub fn bounce_up(&mut self) {
        self.sign.y = -self.sign.y.abs();
    }

    /// Brick response: a plain vertical flip
    pub fn flip_vertical(&mut self) {
        self.sign.y = -self.sign.y;
    }
}
