// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=checkerboard_input --heading-base-level=0

//! Checkerboard Input: a deterministic, `no_std` gesture recognizer for board grids.
//!
//! ## Overview
//!
//! Toolkits deliver raw [`PointerEvent`]s in board space. The
//! [`GestureRecognizer`] hit-tests them against a
//! [`Grid`](checkerboard_grid::Grid) and emits board-level [`Gesture`]s:
//! click, drag-start, drop and drag-end. Each gesture names the square by its
//! label, taken straight from the grid's hit result.
//!
//! ## Layering
//!
//! The recognizer only classifies input. Selection, highlighting and move
//! attempts belong to the widget layer that consumes the gestures.
//!
//! ## Example
//!
//! ```
//! use checkerboard_grid::Grid;
//! use checkerboard_input::{Gesture, GestureRecognizer, PointerEvent};
//! use kurbo::Point;
//!
//! let mut grid = Grid::new(400.0);
//! let e2 = "e2".parse().unwrap();
//! grid.place_glyph(e2, "wP", "");
//!
//! let mut recognizer = GestureRecognizer::new();
//! recognizer.handle(&grid, PointerEvent::Down(Point::new(225.0, 325.0)));
//! let started = recognizer.handle(&grid, PointerEvent::Move(Point::new(225.0, 250.0)));
//! assert_eq!(started, Some(Gesture::DragStart(e2)));
//!
//! let dropped = recognizer.handle(&grid, PointerEvent::Up(Point::new(225.0, 225.0)));
//! assert_eq!(dropped, Some(Gesture::Drop("e4".parse().unwrap())));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod recognizer;
mod types;

pub use recognizer::GestureRecognizer;
pub use types::{DragState, Gesture, PointerEvent};
