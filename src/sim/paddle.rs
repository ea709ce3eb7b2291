//! Paddle placement and movement
//!
//! The paddle moves only horizontally. Both input modalities - continuous
//! drag and discrete nudge buttons - clamp the left edge to
//! `[0, playfield_width - paddle_width]`; the vertical position is fixed
//! at placement and never changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::tuning::Tuning;

/// Discrete-button movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NudgeDirection {
    Left,
    Right,
}

/// The player's paddle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paddle {
    /// `None` until placed for the current game
    pub rect: Option<Rect>,
    /// True between a successful drag pick-up and the matching release
    pub dragging: bool,
}

impl Paddle {
    /// Bottom-center placement: horizontally centered, offset up from the
    /// playfield bottom by `paddle_height + paddle_width / 2`
    pub fn place_default(&mut self, playfield: Rect, tuning: &Tuning) {
        let size = Vec2::new(tuning.paddle_width, tuning.paddle_height);
        let origin = Vec2::new(
            playfield.left() + (playfield.width() - size.x) / 2.0,
            playfield.bottom() - (size.y + size.x / 2.0),
        );
        self.rect = Some(Rect::from_origin_size(origin, size));
        self.dragging = false;
    }

    /// Start dragging if a fixed-size probe square around the touch point
    /// reaches the paddle (inclusive). The probe is independent of paddle
    /// size, so near-misses still pick up.
    pub fn begin_drag(&mut self, point: Vec2, tuning: &Tuning) {
        let Some(rect) = self.rect else {
            return;
        };
        let probe = Rect::from_center_size(point, Vec2::splat(tuning.touch_probe));
        if probe.intersects(&rect) {
            self.dragging = true;
        }
    }

    /// Follow the touch while dragging: left edge tracks
    /// `x - paddle_width / 2`, clamped to the playfield
    pub fn drag_to(&mut self, x: f32, playfield: Rect) {
        if !self.dragging {
            return;
        }
        if let Some(rect) = self.rect {
            self.set_left_clamped(x - rect.width() / 2.0, playfield);
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Discrete step of `nudge_fraction` of the playfield width; available
    /// whether or not a drag is active
    pub fn nudge(&mut self, direction: NudgeDirection, playfield: Rect, tuning: &Tuning) {
        let Some(rect) = self.rect else {
            return;
        };
        let step = playfield.width() * tuning.nudge_fraction;
        let step = match direction {
            NudgeDirection::Left => -step,
            NudgeDirection::Right => step,
        };
        self.set_left_clamped(rect.left() + step, playfield);
    }

    fn set_left_clamped(&mut self, left: f32, playfield: Rect) {
        if let Some(rect) = self.rect.as_mut() {
            let max_left = playfield.right() - rect.width();
            rect.origin.x = left.clamp(playfield.left(), max_left);
        }
    }
}
