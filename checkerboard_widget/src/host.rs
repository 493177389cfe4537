// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host contract: legality queries, move verdicts, position pulls and error reporting.
//!
//! ## Overview
//!
//! The board never decides whether a move is legal. It asks its host through
//! [`BoardHost`], synchronously, and applies the answer. Every method has a
//! default standing for "hook not provided":
//!
//! | Method | Default |
//! |---|---|
//! | [`BoardHost::show_moves`] | no legal destinations |
//! | [`BoardHost::on_drop`] | [`MoveVerdict::Accept`] |
//! | [`BoardHost::pull_position`] | `None`: keep the board's position |
//! | [`BoardHost::report_error`] | ignore (errors are still logged) |
//!
//! Implement the trait on your game type, or assemble a host from closures
//! with [`Callbacks`].

use std::fmt;

use checkerboard_grid::SquareLabel;

use crate::error::{BoardError, HookError};
use crate::position::Position;

/// The host's decision on a proposed move.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum MoveVerdict {
    /// The move happened; the board adopts the host's resulting position.
    #[default]
    Accept,
    /// The move is refused.
    Reject,
    /// The move is refused and any optimistic display should spring back.
    Snapback,
}

impl MoveVerdict {
    /// Map a textual reply: an empty reply or `"snapback"` snaps back, `"reject"`
    /// refuses, anything else accepts.
    pub fn from_reply(reply: &str) -> Self {
        match reply {
            "" | "snapback" => Self::Snapback,
            "reject" => Self::Reject,
            _ => Self::Accept,
        }
    }

    /// True for [`MoveVerdict::Accept`].
    pub fn is_accept(self) -> bool {
        self == Self::Accept
    }
}

impl From<bool> for MoveVerdict {
    /// `true` accepts; `false` snaps back.
    fn from(accepted: bool) -> Self {
        if accepted { Self::Accept } else { Self::Snapback }
    }
}

/// Hooks a board calls into. All calls are synchronous and must return promptly.
///
/// A host that validates asynchronously should accept (or snap back)
/// immediately and later call [`Board::set_position`](crate::Board::set_position)
/// with the confirmed position.
pub trait BoardHost {
    /// Legal destinations for the piece on `square`.
    fn show_moves(&mut self, square: SquareLabel) -> Result<Vec<SquareLabel>, HookError> {
        let _ = square;
        Ok(Vec::new())
    }

    /// Decide on the move `from` → `to`.
    fn on_drop(&mut self, from: SquareLabel, to: SquareLabel) -> Result<MoveVerdict, HookError> {
        let _ = (from, to);
        Ok(MoveVerdict::Accept)
    }

    /// The authoritative position after an accepted move, or `None` to keep the
    /// board's current position until the host calls `set_position` itself.
    fn pull_position(&mut self) -> Result<Option<Position>, HookError> {
        Ok(None)
    }

    /// The embedding application's error channel.
    fn report_error(&mut self, error: &BoardError) {
        let _ = error;
    }
}

/// A host with no hooks: nothing is highlighted and every move is accepted.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHost;

impl BoardHost for NoHost {}

impl<H: BoardHost + ?Sized> BoardHost for Box<H> {
    fn show_moves(&mut self, square: SquareLabel) -> Result<Vec<SquareLabel>, HookError> {
        (**self).show_moves(square)
    }

    fn on_drop(&mut self, from: SquareLabel, to: SquareLabel) -> Result<MoveVerdict, HookError> {
        (**self).on_drop(from, to)
    }

    fn pull_position(&mut self) -> Result<Option<Position>, HookError> {
        (**self).pull_position()
    }

    fn report_error(&mut self, error: &BoardError) {
        (**self).report_error(error);
    }
}

type ShowMovesFn = dyn FnMut(SquareLabel) -> Result<Vec<SquareLabel>, HookError>;
type DropFn = dyn FnMut(SquareLabel, SquareLabel) -> Result<MoveVerdict, HookError>;
type PullFn = dyn FnMut() -> Result<Position, HookError>;
type ErrorFn = dyn FnMut(&BoardError);

/// A [`BoardHost`] built from optional closures.
///
/// ```
/// use checkerboard_widget::{Callbacks, MoveVerdict};
///
/// let host = Callbacks::new()
///     .with_show_moves(|_square| Ok(vec!["e3".parse()?, "e4".parse()?]))
///     .with_drop(|_from, _to| Ok(MoveVerdict::from(true)));
/// # let _ = host;
/// ```
#[derive(Default)]
pub struct Callbacks {
    show_moves: Option<Box<ShowMovesFn>>,
    on_drop: Option<Box<DropFn>>,
    pull_position: Option<Box<PullFn>>,
    on_error: Option<Box<ErrorFn>>,
}

impl Callbacks {
    /// A host with no hooks set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the legal-destination query.
    pub fn with_show_moves<F>(mut self, f: F) -> Self
    where
        F: FnMut(SquareLabel) -> Result<Vec<SquareLabel>, HookError> + 'static,
    {
        self.show_moves = Some(Box::new(f));
        self
    }

    /// Set the move verdict hook.
    pub fn with_drop<F>(mut self, f: F) -> Self
    where
        F: FnMut(SquareLabel, SquareLabel) -> Result<MoveVerdict, HookError> + 'static,
    {
        self.on_drop = Some(Box::new(f));
        self
    }

    /// Set the hook that supplies the position after an accepted move.
    pub fn with_position<F>(mut self, f: F) -> Self
    where
        F: FnMut() -> Result<Position, HookError> + 'static,
    {
        self.pull_position = Some(Box::new(f));
        self
    }

    /// Set the error channel.
    pub fn with_error_handler<F>(mut self, f: F) -> Self
    where
        F: FnMut(&BoardError) + 'static,
    {
        self.on_error = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("show_moves", &self.show_moves.is_some())
            .field("on_drop", &self.on_drop.is_some())
            .field("pull_position", &self.pull_position.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

impl BoardHost for Callbacks {
    fn show_moves(&mut self, square: SquareLabel) -> Result<Vec<SquareLabel>, HookError> {
        match &mut self.show_moves {
            Some(f) => f(square),
            None => Ok(Vec::new()),
        }
    }

    fn on_drop(&mut self, from: SquareLabel, to: SquareLabel) -> Result<MoveVerdict, HookError> {
        match &mut self.on_drop {
            Some(f) => f(from, to),
            None => Ok(MoveVerdict::Accept),
        }
    }

    fn pull_position(&mut self) -> Result<Option<Position>, HookError> {
        match &mut self.pull_position {
            Some(f) => f().map(Some),
            None => Ok(None),
        }
    }

    fn report_error(&mut self, error: &BoardError) {
        if let Some(f) = &mut self.on_error {
            f(error);
        }
    }
}
