// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input and output types of the recognizer: raw pointer events and board gestures.

use checkerboard_grid::SquareLabel;
use kurbo::{Point, Vec2};

/// A raw pointer event in board space.
///
/// Toolkits translate their own mouse or touch events into these, after
/// subtracting the board's origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Down(Point),
    /// Pointer moved (pressed or not).
    Move(Point),
    /// Primary button released.
    Up(Point),
    /// The toolkit aborted the interaction (focus loss, pointer left the window).
    Cancel,
}

/// A board-level gesture recognized from pointer events.
///
/// Every gesture that names a square carries the square's label.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Gesture {
    /// Press and release on the same square without dragging.
    Click(SquareLabel),
    /// A press on a glyph moved past the drag threshold.
    DragStart(SquareLabel),
    /// An active drag was released over a square. This also ends the drag.
    Drop(SquareLabel),
    /// An active drag ended without a drop (released off the board, or canceled).
    DragEnd,
}

/// State of an active drag.
///
/// Exposed so a toolkit can draw the floating glyph under the pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragState {
    /// Square the drag started from.
    pub origin: SquareLabel,
    /// Pointer position where the button went down.
    pub start: Point,
    /// Latest pointer position.
    pub current: Point,
}

impl DragState {
    /// Total offset from the press position.
    pub fn offset(&self) -> Vec2 {
        self.current - self.start
    }
}
