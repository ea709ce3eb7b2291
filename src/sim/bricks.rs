//! Brick grid lifecycle and hit testing
//!
//! The grid owns every brick from (re)start to reset. Layout is computed
//! once per grid lifetime: bricks tile the top half of the playfield in a
//! slot grid, with one spare slot column split into the side margins and
//! one spare slot row left at the top for the score readout. A brick that
//! has collided is terminal - it is never laid out, drawn or tested again.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::tuning::Tuning;

/// Brick tint, assigned once at allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickColor {
    Red,
    Blue,
}

/// A destructible target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Layout slot; stays `None` until the first layout pass, and forever
    /// for bricks that collided before layout ran
    pub rect: Option<Rect>,
    /// Terminal once true
    pub collided: bool,
    pub color: BrickColor,
}

/// Fixed-size grid of destructible bricks, row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    cols: usize,
    bricks: Vec<Brick>,
    layout_computed: bool,
}

impl BrickGrid {
    /// Allocate `rows x cols` bricks, coloring each via `picker`.
    ///
    /// Panics if either dimension is zero; that is a programmer error, not
    /// a runtime condition.
    pub fn new(rows: usize, cols: usize, mut picker: impl FnMut() -> BrickColor) -> Self {
        assert!(rows > 0 && cols > 0, "brick grid needs at least 1x1");
        let bricks = (0..rows * cols)
            .map(|_| Brick {
                rect: None,
                collided: false,
                color: picker(),
            })
            .collect();
        Self {
            rows,
            cols,
            bricks,
            layout_computed: false,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Tile the grid into the top half of the playfield. Idempotent; rects
    /// of bricks already collided are left uncomputed.
    pub fn compute_layout_if_needed(&mut self, playfield: Rect, tuning: &Tuning) {
        if self.layout_computed {
            return;
        }

        let slot_w = (playfield.width() - 2.0 * tuning.side_padding) / (self.cols as f32 + 1.0);
        let slot_h = playfield.height() / 2.0 / (self.rows as f32 + 1.0);
        // Center the tiling; the spare slot width becomes the side margins
        let left = playfield.left() + (playfield.width() - self.cols as f32 * slot_w) / 2.0;
        let size = Vec2::new(slot_w, slot_h);

        for row in 0..self.rows {
            for col in 0..self.cols {
                let brick = &mut self.bricks[row * self.cols + col];
                if brick.collided {
                    continue;
                }
                // Row 0 starts one slot down: the top slot holds the score
                let origin = Vec2::new(
                    left + col as f32 * slot_w,
                    playfield.top() + (row as f32 + 1.0) * slot_h,
                );
                brick.rect = Some(Rect::from_origin_size(origin, size));
            }
        }

        self.layout_computed = true;
        log::debug!(
            "brick layout: {}x{} slots of {:.1}x{:.1}",
            self.rows,
            self.cols,
            slot_w,
            slot_h
        );
    }

    /// Row-major scan for the first live brick touching `hit_box`
    /// (inclusive). The hit brick is marked collided - at most one brick
    /// falls per call, even if the box overlaps several.
    pub fn hit_test(&mut self, hit_box: Rect) -> Option<BrickColor> {
        for brick in &mut self.bricks {
            if brick.collided {
                continue;
            }
            let Some(rect) = brick.rect else {
                continue;
            };
            if rect.intersects(&hit_box) {
                brick.collided = true;
                return Some(brick.color);
            }
        }
        None
    }

    pub fn all_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| b.collided)
    }

    /// Number of bricks still standing
    pub fn remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.collided).count()
    }

    /// Live bricks with their layout rects, in row-major order. Bricks
    /// whose rect was never computed are skipped (they are not drawable).
    pub fn live_bricks(&self) -> impl Iterator<Item = (Rect, BrickColor)> + '_ {
        self.bricks
            .iter()
            .filter(|b| !b.collided)
            .filter_map(|b| b.rect.map(|r| (r, b.color)))
    }
}
