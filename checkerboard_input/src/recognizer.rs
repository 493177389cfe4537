// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture recognizer implementation.
//!
//! ## Overview
//!
//! Hit-tests each pointer event against a [`Grid`] and folds the results into
//! at most one [`Gesture`] per event.
//!
//! ## Rules
//!
//! - A press remembers the square under the pointer and whether a glyph was hit.
//! - Only presses on glyphs can become drags; travel beyond the threshold starts one.
//! - Releasing a press that never became a drag on the same square is a click.
//! - Releasing a drag over the board is a drop; off the board, it is a drag end.
//! - A new press or a cancel while dragging ends the previous drag.

use checkerboard_grid::{Grid, HitTarget, SquareLabel};
use kurbo::Point;

use crate::types::{DragState, Gesture, PointerEvent};

#[derive(Copy, Clone, Debug, PartialEq)]
struct Press {
    label: SquareLabel,
    origin: Point,
    on_glyph: bool,
}

/// Turns raw pointer events into board gestures.
///
/// ## Usage
///
/// - Construct with [`GestureRecognizer::new`] or [`GestureRecognizer::with_threshold`].
/// - Feed every pointer event through [`GestureRecognizer::handle`] together with
///   the grid that was last rendered.
/// - Forward the returned [`Gesture`] to the board's interaction state machine.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    threshold: f64,
    press: Option<Press>,
    drag: Option<DragState>,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRecognizer {
    /// Default pointer travel, in pixels, before a press becomes a drag.
    pub const DEFAULT_THRESHOLD: f64 = 4.0;

    /// Create a recognizer with [`Self::DEFAULT_THRESHOLD`].
    pub fn new() -> Self {
        Self::with_threshold(Self::DEFAULT_THRESHOLD)
    }

    /// Create a recognizer with a custom drag threshold. Negative values act as zero.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.max(0.0),
            press: None,
            drag: None,
        }
    }

    /// Drag threshold in pixels.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The active drag, if any.
    pub fn dragging(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Forget any press or drag without reporting a gesture.
    pub fn reset(&mut self) {
        self.press = None;
        self.drag = None;
    }

    /// Handle one pointer event.
    pub fn handle(&mut self, grid: &Grid, event: PointerEvent) -> Option<Gesture> {
        match event {
            PointerEvent::Down(pt) => {
                let ended = self.drag.take().map(|_| Gesture::DragEnd);
                self.press = grid.hit_test_point(pt).map(|hit| Press {
                    label: hit.label,
                    origin: pt,
                    on_glyph: matches!(hit.target, HitTarget::Glyph(_)),
                });
                ended
            }
            PointerEvent::Move(pt) => {
                if let Some(drag) = &mut self.drag {
                    drag.current = pt;
                    return None;
                }
                let press = self.press?;
                if press.on_glyph && self.beyond_threshold(press.origin, pt) {
                    self.press = None;
                    self.drag = Some(DragState {
                        origin: press.label,
                        start: press.origin,
                        current: pt,
                    });
                    return Some(Gesture::DragStart(press.label));
                }
                None
            }
            PointerEvent::Up(pt) => {
                let target = grid.hit_test_point(pt).map(|hit| hit.label);
                if self.drag.take().is_some() {
                    self.press = None;
                    return Some(match target {
                        Some(label) => Gesture::Drop(label),
                        None => Gesture::DragEnd,
                    });
                }
                let press = self.press.take()?;
                (target == Some(press.label)).then_some(Gesture::Click(press.label))
            }
            PointerEvent::Cancel => {
                self.press = None;
                self.drag.take().map(|_| Gesture::DragEnd)
            }
        }
    }

    fn beyond_threshold(&self, from: Point, to: Point) -> bool {
        (to - from).hypot2() > self.threshold * self.threshold
    }
}
