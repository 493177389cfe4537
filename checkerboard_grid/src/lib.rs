// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=checkerboard_grid --heading-base-level=0

//! Checkerboard Grid: the square grid model behind a board widget.
//!
//! This crate owns the visual structure of an 8×8 board and nothing else.
//!
//! - [`SquareLabel`]: the 64 fixed coordinates `a1`..`h8`, computed once and never invalid.
//! - [`BoardGeometry`]: square rectangles and point → label lookup for a board size.
//! - [`Grid`]: one [`Cell`] per label, plus [`Glyph`] nodes placed on cells and
//!   addressed by generational [`GlyphId`]s.
//!
//! It has no game semantics: which token sits on which square, and which squares
//! are highlighted, is decided by the caller (usually a renderer).
//!
//! ## Labels travel with every element
//!
//! Cells and glyphs both record the square they belong to, and [`Grid::hit_test_point`]
//! returns a [`Hit`] carrying the label whichever element was under the pointer.
//! Callers never have to climb from a glyph to its cell to find out where a press landed.
//!
//! ## Damage
//!
//! Updates are batched. [`Grid::commit`] returns a [`Damage`] listing the rectangles of
//! cells touched since the previous commit, which is enough to bound a repaint.
//!
//! ## Minimal usage
//!
//! ```
//! use checkerboard_grid::{CellFlags, Grid, HitTarget, SquareLabel};
//! use kurbo::Point;
//!
//! let mut grid = Grid::new(400.0);
//! let e2: SquareLabel = "e2".parse().unwrap();
//!
//! let glyph = grid.place_glyph(e2, "wP", "chess_pieces/wP.png");
//! grid.insert_flags(e2, CellFlags::SELECTED);
//! let damage = grid.commit();
//! assert!(damage.union_rect().is_some());
//!
//! let hit = grid.hit_test_point(Point::new(225.0, 325.0)).unwrap();
//! assert_eq!(hit.label, e2);
//! assert_eq!(hit.target, HitTarget::Glyph(glyph));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
mod geometry;
mod grid;
mod types;

pub use damage::Damage;
pub use geometry::BoardGeometry;
pub use grid::{Cell, Glyph, Grid, Hit, HitTarget};
pub use types::{CellFlags, GlyphId, ParseSquareError, SquareLabel};
