// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Board configuration.

use checkerboard_grid::BoardGeometry;
use checkerboard_input::GestureRecognizer;

use crate::theme::PieceTheme;

/// Settings fixed when a board is created.
///
/// ```
/// use checkerboard_widget::{BoardConfig, PieceTheme};
///
/// let config = BoardConfig::default()
///     .with_size(480.0)
///     .with_piece_theme(PieceTheme::template("img/chesspieces/wikipedia/{piece}.png"));
/// assert_eq!(config.size, 480.0);
/// ```
#[derive(Debug)]
pub struct BoardConfig {
    /// Board edge length in pixels.
    pub size: f64,
    /// How pieces resolve to images.
    pub piece_theme: PieceTheme,
    /// Pointer travel in pixels before a press on a piece turns into a drag.
    pub drag_threshold: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: BoardGeometry::DEFAULT_SIZE,
            piece_theme: PieceTheme::default(),
            drag_threshold: GestureRecognizer::DEFAULT_THRESHOLD,
        }
    }
}

impl BoardConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the piece theme.
    #[must_use]
    pub fn with_piece_theme(mut self, theme: PieceTheme) -> Self {
        self.piece_theme = theme;
        self
    }

    /// Set the drag threshold.
    #[must_use]
    pub fn with_drag_threshold(mut self, threshold: f64) -> Self {
        self.drag_threshold = threshold;
        self
    }
}
