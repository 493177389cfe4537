// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=checkerboard_widget --heading-base-level=0

//! Checkerboard Widget: an interactive 8×8 board that knows nothing about chess.
//!
//! ## Overview
//!
//! A [`Board`] draws pieces from a [`Position`] onto a
//! [`Grid`](checkerboard_grid::Grid) and lets the user move them by clicking
//! or dragging. It never decides whether a move is legal: each interaction
//! ends in a move attempt that the host resolves through [`BoardHost`].
//!
//! ## Flow
//!
//! 1) Input: raw [`PointerEvent`](checkerboard_input::PointerEvent)s go
//!    through the gesture recognizer; toolkits with their own drag-and-drop
//!    can call [`Board::click`], [`Board::drag_start`], [`Board::drop_on`] and
//!    [`Board::drag_end`] directly.
//! 2) Interaction: a click-select or drag state machine tracks the
//!    [`Selection`], the [`HighlightSet`] the host reported through
//!    [`BoardHost::show_moves`], and the active [`DragSession`].
//! 3) Move attempt: [`BoardHost::on_drop`] returns a [`MoveVerdict`]. On
//!    accept the board adopts [`BoardHost::pull_position`] when the host
//!    supplies one; on reject or snapback the position stays as it was.
//! 4) Render: the grid is brought in line with the position and interaction
//!    state, and [`Board::take_damage`] reports what to repaint.
//!
//! ## Errors
//!
//! Hook failures never escape a board call. They are logged with `tracing`,
//! handed to [`BoardHost::report_error`], and the interaction counts as
//! rejected.
//!
//! ## Example
//!
//! ```
//! use checkerboard_widget::{Board, BoardConfig, Callbacks, MoveVerdict, Selection};
//! use checkerboard_grid::SquareLabel;
//!
//! let sq = |s: &str| s.parse::<SquareLabel>().unwrap();
//!
//! let host = Callbacks::new()
//!     .with_show_moves(|_from| Ok(vec!["e3".parse()?, "e4".parse()?]))
//!     .with_drop(|_from, _to| Ok(MoveVerdict::Accept))
//!     .with_position(move || Ok([(sq("e4"), "wP")].into_iter().collect()));
//!
//! let mut board = Board::new(BoardConfig::default(), host);
//! board.set_position([(sq("e2"), "wP")].into_iter().collect());
//!
//! board.click(sq("e2"));
//! assert_eq!(board.highlights().len(), 2);
//!
//! let outcome = board.click(sq("e4")).unwrap();
//! assert!(outcome.verdict.is_accept());
//! assert_eq!(board.selection(), Selection::Idle);
//! assert_eq!(board.grid().glyph_at(sq("e4")).map(|g| g.token()), Some("wP"));
//! assert!(board.grid().glyph_at(sq("e2")).is_none());
//! ```

mod board;
mod config;
mod coordinator;
mod error;
mod host;
mod interaction;
mod position;
mod registry;
mod render;
mod theme;

pub use board::Board;
pub use config::BoardConfig;
pub use coordinator::MoveOutcome;
pub use error::{BoardError, HookError, HookKind};
pub use host::{BoardHost, Callbacks, MoveVerdict, NoHost};
pub use interaction::{
    DragSession, HighlightSet, Interaction, MoveAttempt, Selection, Transition,
};
pub use position::{PieceId, Position, PositionStore};
pub use registry::BoardRegistry;
pub use render::{RenderInput, render};
pub use theme::{PieceTheme, ResolverFn};
