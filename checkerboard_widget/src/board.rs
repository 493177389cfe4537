// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Board`]: one widget instance wiring store, grid, state machine and host.

use std::fmt;

use checkerboard_grid::{Damage, Grid, SquareLabel};
use checkerboard_input::{DragState, Gesture, GestureRecognizer, PointerEvent};

use crate::config::BoardConfig;
use crate::coordinator::{MoveCoordinator, MoveOutcome, report};
use crate::error::{BoardError, HookKind};
use crate::host::{BoardHost, NoHost};
use crate::interaction::{
    DragSession, HighlightSet, Interaction, MoveAttempt, Selection, Transition,
};
use crate::position::{Position, PositionStore};
use crate::render::{RenderInput, render};

/// An interactive 8×8 board.
///
/// ## Usage
///
/// - Create with [`Board::new`]; the board renders immediately.
/// - Load pieces with [`Board::set_position`].
/// - Feed input either as raw [`PointerEvent`]s through [`Board::pointer`], or
///   as already-recognized gestures ([`Board::click`], [`Board::drag_start`],
///   [`Board::drop_on`], [`Board::drag_end`]).
/// - After each call, repaint what [`Board::take_damage`] reports, reading
///   cells and glyphs from [`Board::grid`].
///
/// Every call that completes an interaction returns the [`MoveOutcome`] of the
/// attempt it produced.
pub struct Board<H: BoardHost = NoHost> {
    config: BoardConfig,
    host: H,
    grid: Grid,
    store: PositionStore,
    interaction: Interaction,
    recognizer: GestureRecognizer,
    damage: Damage,
}

impl<H: BoardHost> fmt::Debug for Board<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("config", &self.config)
            .field("grid", &self.grid)
            .field("position", self.store.peek())
            .field("interaction", &self.interaction)
            .field("recognizer", &self.recognizer)
            .finish_non_exhaustive()
    }
}

impl<H: BoardHost> Board<H> {
    /// Build a board with an empty position and render it.
    pub fn new(config: BoardConfig, host: H) -> Self {
        let mut board = Self {
            grid: Grid::new(config.size),
            recognizer: GestureRecognizer::with_threshold(config.drag_threshold),
            config,
            host,
            store: PositionStore::new(),
            interaction: Interaction::new(),
            damage: Damage::default(),
        };
        board.render();
        board
    }

    /// Replace the displayed position. No legality checks are made.
    ///
    /// Any selection, highlight or drag in progress is dropped.
    pub fn set_position(&mut self, position: Position) {
        tracing::debug!(pieces = position.len(), "set position");
        self.store.set(position);
        self.interaction.reset();
        self.recognizer.reset();
        self.render();
    }

    /// A copy of the displayed position.
    pub fn position(&self) -> Position {
        self.store.get()
    }

    /// Propose `from` → `to` programmatically, through the same host hooks as user moves.
    pub fn move_piece(&mut self, from: SquareLabel, to: SquareLabel) -> MoveOutcome {
        self.interaction.reset();
        self.recognizer.reset();
        self.resolve(MoveAttempt { from, to })
    }

    /// A click on `square`.
    pub fn click(&mut self, square: SquareLabel) -> Option<MoveOutcome> {
        let Self {
            host,
            store,
            interaction,
            ..
        } = self;
        let result = interaction.click(square, store.peek(), |s| legal_moves(host, s));
        tracing::debug!(%square, ?result, "click");
        self.advance(result)
    }

    /// A drag starting on `square`.
    pub fn drag_start(&mut self, square: SquareLabel) {
        let Self {
            host,
            store,
            interaction,
            ..
        } = self;
        let result = interaction.drag_start(square, store.peek(), |s| legal_moves(host, s));
        tracing::debug!(%square, ?result, "drag start");
        if !matches!(result, Ok(Transition::Selected(_))) {
            // No drag session was opened; drop the pointer-level drag with it.
            self.recognizer.reset();
        }
        self.advance(result);
    }

    /// The active drag released over `square`.
    pub fn drop_on(&mut self, square: SquareLabel) -> Option<MoveOutcome> {
        let transition = self.interaction.drop_on(square);
        tracing::debug!(%square, ?transition, "drop");
        self.advance(Ok(transition))
    }

    /// The active drag ended without a drop.
    pub fn drag_end(&mut self) {
        let transition = self.interaction.drag_end();
        tracing::debug!(?transition, "drag end");
        self.advance(Ok(transition));
    }

    /// Apply a recognized gesture.
    pub fn gesture(&mut self, gesture: Gesture) -> Option<MoveOutcome> {
        match gesture {
            Gesture::Click(square) => self.click(square),
            Gesture::DragStart(square) => {
                self.drag_start(square);
                None
            }
            Gesture::Drop(square) => self.drop_on(square),
            Gesture::DragEnd => {
                self.drag_end();
                None
            }
        }
    }

    /// Feed a raw pointer event in board space.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<MoveOutcome> {
        let gesture = self.recognizer.handle(&self.grid, event)?;
        self.gesture(gesture)
    }

    /// Change the board size. Labels and glyphs are kept; everything is repainted.
    pub fn resize(&mut self, size: f64) {
        self.config.size = size;
        self.grid.resize(size);
        self.render();
    }

    /// The rendered grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current selection.
    pub fn selection(&self) -> Selection {
        self.interaction.selection()
    }

    /// Current highlight set.
    pub fn highlights(&self) -> &HighlightSet {
        self.interaction.highlights()
    }

    /// The active drag session, if any.
    pub fn drag_session(&self) -> Option<DragSession> {
        self.interaction.drag()
    }

    /// Pointer-level drag state, for drawing the floating glyph.
    pub fn dragging(&self) -> Option<&DragState> {
        self.recognizer.dragging()
    }

    /// Damage accumulated since the last call.
    pub fn take_damage(&mut self) -> Damage {
        std::mem::take(&mut self.damage)
    }

    /// The configuration the board was built with (size follows [`Board::resize`]).
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Borrow the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the board, returning its host.
    pub fn into_host(self) -> H {
        self.host
    }

    // --- internals ---

    fn advance(&mut self, result: Result<Transition, BoardError>) -> Option<MoveOutcome> {
        match result {
            Ok(Transition::Attempt(attempt)) => Some(self.resolve(attempt)),
            Ok(Transition::Unchanged) => None,
            Ok(Transition::Selected(_) | Transition::Cleared) => {
                self.render();
                None
            }
            Err(error) => {
                report(&mut self.host, &error);
                self.render();
                None
            }
        }
    }

    fn resolve(&mut self, attempt: MoveAttempt) -> MoveOutcome {
        let outcome = MoveCoordinator::new(&mut self.host, &mut self.store).attempt(attempt);
        self.render();
        outcome
    }

    fn render(&mut self) {
        let input = RenderInput {
            position: self.store.peek(),
            selection: self.interaction.selection(),
            highlights: self.interaction.highlights(),
            drag: self.interaction.drag(),
        };
        let damage = render(&mut self.grid, input, &self.config.piece_theme);
        self.damage.extend(damage);
    }
}

fn legal_moves<H: BoardHost>(
    host: &mut H,
    square: SquareLabel,
) -> Result<HighlightSet, BoardError> {
    host.show_moves(square)
        .map(|moves| moves.into_iter().collect())
        .map_err(|source| BoardError::hook(HookKind::ShowMoves, source))
}
