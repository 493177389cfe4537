// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Board geometry: square size, square rectangles and point → label lookup.

use kurbo::{Point, Rect};

use crate::types::SquareLabel;

/// Pixel geometry of a square board with its origin at `(0, 0)`.
///
/// Pure function of the board size; it carries no game state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardGeometry {
    size: f64,
}

impl BoardGeometry {
    /// Board size used when none is configured.
    pub const DEFAULT_SIZE: f64 = 400.0;

    /// Create geometry for a board `size` pixels wide and tall.
    ///
    /// Negative or non-finite sizes are treated as an empty board.
    pub fn new(size: f64) -> Self {
        let size = if size.is_finite() && size > 0.0 {
            size
        } else {
            0.0
        };
        Self { size }
    }

    /// Overall board size in pixels.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Edge length of one square.
    pub fn square_size(&self) -> f64 {
        self.size / 8.0
    }

    /// Bounds of the whole board.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size, self.size)
    }

    /// Rectangle covered by `label`.
    pub fn square_rect(&self, label: SquareLabel) -> Rect {
        let s = self.square_size();
        let x0 = f64::from(label.col()) * s;
        let y0 = f64::from(label.row()) * s;
        Rect::new(x0, y0, x0 + s, y0 + s)
    }

    /// The label under `pt`, or `None` when the point is off the board.
    ///
    /// Squares are half-open: the right and bottom edges belong to the next square.
    pub fn label_at(&self, pt: Point) -> Option<SquareLabel> {
        let inside = pt.x >= 0.0 && pt.y >= 0.0 && pt.x < self.size && pt.y < self.size;
        if !inside {
            return None;
        }
        let s = self.square_size();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "coordinates are checked to lie inside the board, so the quotient is below 8."
        )]
        let (row, col) = ((pt.y / s) as u8, (pt.x / s) as u8);
        SquareLabel::from_row_col(row.min(7), col.min(7))
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}
