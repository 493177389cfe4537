// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state machine: selection, highlights and drag session.
//!
//! ## Transitions
//!
//! | From | Trigger | Guard | To |
//! |---|---|---|---|
//! | `Idle` | click `S` | `S` occupied | `Selected(S)`, highlights queried |
//! | `Idle` | click `S` | `S` empty | `Idle` |
//! | `Selected(A)` | click `A` | | `Idle` |
//! | `Selected(A)` | click `B` | `B` highlighted | `Idle`, attempt `A → B` |
//! | `Selected(A)` | click `B` | `B` occupied | `Selected(B)`, highlights queried |
//! | `Selected(A)` | click `B` | `B` empty | `Idle` |
//! | any | drag-start `S` | `S` occupied | `Selected(S)` + drag, highlights queried |
//! | `Selected(A)` + drag | drop `B` | | `Idle`, attempt `A → B` |
//! | `Selected(A)` + drag | drag-end | | `Idle` |
//!
//! Click and drag share one selection: a drag is a selection with a session
//! attached, and both exit through the same [`Transition::Attempt`].
//!
//! Legal destinations come from a query closure supplied per call. If the
//! query fails, the machine returns to `Idle` and hands the error back.

use std::collections::BTreeSet;

use checkerboard_grid::SquareLabel;

use crate::error::BoardError;
use crate::position::Position;

/// Squares marked as legal destinations for the selection.
pub type HighlightSet = BTreeSet<SquareLabel>;

/// Current selection.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Idle,
    /// The piece on this square is selected.
    Selected(SquareLabel),
}

impl Selection {
    /// The selected square, if any.
    pub fn square(self) -> Option<SquareLabel> {
        match self {
            Self::Idle => None,
            Self::Selected(square) => Some(square),
        }
    }
}

/// An in-progress drag, from drag-start until drop or drag-end.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DragSession {
    /// Square the drag started from; occupied when the drag began.
    pub origin: SquareLabel,
}

/// A proposed move, handed to the move coordinator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MoveAttempt {
    /// Origin square.
    pub from: SquareLabel,
    /// Destination square.
    pub to: SquareLabel,
}

/// What an input did to the state machine.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Transition {
    /// No state change.
    Unchanged,
    /// A square became selected (fresh or re-selected) and highlights were recomputed.
    Selected(SquareLabel),
    /// Selection, highlights and any drag were cleared.
    Cleared,
    /// The interaction completed with a move attempt; state is back to idle.
    Attempt(MoveAttempt),
}

/// The transient interaction state of one board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
    selection: Selection,
    highlights: HighlightSet,
    drag: Option<DragSession>,
}

impl Interaction {
    /// Idle, with nothing highlighted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Current highlight set; empty whenever the selection is idle.
    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }

    /// The active drag, if any.
    pub fn drag(&self) -> Option<DragSession> {
        self.drag
    }

    /// Return to idle, dropping highlights and any drag.
    pub fn reset(&mut self) {
        self.selection = Selection::Idle;
        self.highlights.clear();
        self.drag = None;
    }

    /// Handle a click on `square`.
    pub fn click<F>(
        &mut self,
        square: SquareLabel,
        position: &Position,
        legal_moves: F,
    ) -> Result<Transition, BoardError>
    where
        F: FnOnce(SquareLabel) -> Result<HighlightSet, BoardError>,
    {
        self.drag = None;
        let selection = self.selection;
        match selection {
            Selection::Idle if position.is_occupied(square) => self.select(square, legal_moves),
            Selection::Idle => Ok(Transition::Unchanged),
            Selection::Selected(from) if from == square => Ok(self.clear()),
            Selection::Selected(from) if self.highlights.contains(&square) => {
                self.reset();
                Ok(Transition::Attempt(MoveAttempt { from, to: square }))
            }
            Selection::Selected(_) if position.is_occupied(square) => {
                self.select(square, legal_moves)
            }
            Selection::Selected(_) => Ok(self.clear()),
        }
    }

    /// Handle the start of a drag on `square`. Empty squares cannot be dragged.
    pub fn drag_start<F>(
        &mut self,
        square: SquareLabel,
        position: &Position,
        legal_moves: F,
    ) -> Result<Transition, BoardError>
    where
        F: FnOnce(SquareLabel) -> Result<HighlightSet, BoardError>,
    {
        if !position.is_occupied(square) {
            return Ok(Transition::Unchanged);
        }
        let transition = self.select(square, legal_moves)?;
        self.drag = Some(DragSession { origin: square });
        Ok(transition)
    }

    /// Handle a drop on `square`. Without an active drag this does nothing.
    pub fn drop_on(&mut self, square: SquareLabel) -> Transition {
        let Some(session) = self.drag.take() else {
            return Transition::Unchanged;
        };
        let from = self.selection.square().unwrap_or(session.origin);
        self.reset();
        Transition::Attempt(MoveAttempt { from, to: square })
    }

    /// Handle the end of a drag that was not dropped. Without an active drag this does nothing.
    pub fn drag_end(&mut self) -> Transition {
        if self.drag.is_none() {
            return Transition::Unchanged;
        }
        self.clear()
    }

    fn select<F>(&mut self, square: SquareLabel, legal_moves: F) -> Result<Transition, BoardError>
    where
        F: FnOnce(SquareLabel) -> Result<HighlightSet, BoardError>,
    {
        match legal_moves(square) {
            Ok(highlights) => {
                self.selection = Selection::Selected(square);
                self.highlights = highlights;
                Ok(Transition::Selected(square))
            }
            Err(err) => {
                self.reset();
                Err(err)
            }
        }
    }

    fn clear(&mut self) -> Transition {
        self.reset();
        Transition::Cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HookKind;

    fn sq(s: &str) -> SquareLabel {
        s.parse().unwrap()
    }

    fn set(squares: &[&str]) -> HighlightSet {
        squares.iter().map(|s| sq(s)).collect()
    }

    fn position() -> Position {
        [(sq("e2"), "wP"), (sq("g1"), "wN"), (sq("e7"), "bP")]
            .into_iter()
            .collect()
    }

    fn moves(
        squares: &'static [&'static str],
    ) -> impl FnOnce(SquareLabel) -> Result<HighlightSet, BoardError> {
        move |_| Ok(set(squares))
    }

    fn no_query(_: SquareLabel) -> Result<HighlightSet, BoardError> {
        panic!("legal moves must not be queried here")
    }

    fn failing(_: SquareLabel) -> Result<HighlightSet, BoardError> {
        Err(BoardError::hook(HookKind::ShowMoves, "rules engine crashed".into()))
    }

    #[test]
    fn idle_click_on_empty_square_stays_idle() {
        let mut m = Interaction::new();
        for square in SquareLabel::all().filter(|s| !position().is_occupied(*s)) {
            assert_eq!(m.click(square, &position(), no_query).unwrap(), Transition::Unchanged);
            assert_eq!(m.selection(), Selection::Idle);
            assert!(m.highlights().is_empty());
        }
    }

    #[test]
    fn idle_click_on_piece_selects_and_highlights() {
        let mut m = Interaction::new();
        let t = m.click(sq("e2"), &position(), moves(&["e3", "e4"])).unwrap();
        assert_eq!(t, Transition::Selected(sq("e2")));
        assert_eq!(m.selection(), Selection::Selected(sq("e2")));
        assert_eq!(m.highlights(), &set(&["e3", "e4"]));
    }

    #[test]
    fn clicking_selection_again_toggles_off() {
        let mut m = Interaction::new();
        m.click(sq("e2"), &position(), moves(&["e3", "e4"])).unwrap();
        assert_eq!(m.click(sq("e2"), &position(), no_query).unwrap(), Transition::Cleared);
        assert_eq!(m.selection(), Selection::Idle);
        assert!(m.highlights().is_empty());
    }

    #[test]
    fn clicking_highlighted_square_attempts_move() {
        let mut m = Interaction::new();
        m.click(sq("e2"), &position(), moves(&["e3", "e4"])).unwrap();
        let t = m.click(sq("e4"), &position(), no_query).unwrap();
        assert_eq!(
            t,
            Transition::Attempt(MoveAttempt {
                from: sq("e2"),
                to: sq("e4")
            })
        );
        assert_eq!(m, Interaction::new(), "back to idle after the attempt");
    }

    #[test]
    fn clicking_other_piece_reselects() {
        let mut m = Interaction::new();
        m.click(sq("e2"), &position(), moves(&["e3", "e4"])).unwrap();
        let t = m.click(sq("g1"), &position(), moves(&["f3", "h3"])).unwrap();
        assert_eq!(t, Transition::Selected(sq("g1")));
        assert_eq!(m.highlights(), &set(&["f3", "h3"]), "highlights follow the latest query");
    }

    #[test]
    fn clicking_unhighlighted_empty_square_clears() {
        let mut m = Interaction::new();
        m.click(sq("e2"), &position(), moves(&["e3", "e4"])).unwrap();
        assert_eq!(m.click(sq("a5"), &position(), no_query).unwrap(), Transition::Cleared);
        assert_eq!(m.selection(), Selection::Idle);
        assert!(m.highlights().is_empty());
    }

    #[test]
    fn without_legal_moves_only_reselect_or_clear() {
        let mut m = Interaction::new();
        m.click(sq("e2"), &position(), moves(&[])).unwrap();
        assert_eq!(m.click(sq("e4"), &position(), no_query).unwrap(), Transition::Cleared);
    }

    #[test]
    fn highlighted_occupied_square_is_a_capture_attempt() {
        let mut m = Interaction::new();
        m.click(sq("e2"), &position(), moves(&["e7"])).unwrap();
        let t = m.click(sq("e7"), &position(), no_query).unwrap();
        assert!(matches!(t, Transition::Attempt(MoveAttempt { to, .. }) if to == sq("e7")));
    }

    #[test]
    fn failed_query_returns_to_idle() {
        let mut m = Interaction::new();
        m.click(sq("e2"), &position(), moves(&["e3"])).unwrap();
        let err = m.click(sq("g1"), &position(), failing).unwrap_err();
        assert_eq!(err.hook_kind(), Some(HookKind::ShowMoves));
        assert_eq!(m, Interaction::new());

        let err = m.drag_start(sq("g1"), &position(), failing).unwrap_err();
        assert_eq!(err.hook_kind(), Some(HookKind::ShowMoves));
        assert!(m.drag().is_none(), "no session after a failed drag-start");
    }

    #[test]
    fn drag_then_drop_attempts_move() {
        let mut m = Interaction::new();
        let t = m.drag_start(sq("e2"), &position(), moves(&["e3", "e4"])).unwrap();
        assert_eq!(t, Transition::Selected(sq("e2")));
        assert_eq!(m.drag(), Some(DragSession { origin: sq("e2") }));
        assert_eq!(m.highlights(), &set(&["e3", "e4"]));

        // Drops are not filtered by the highlight set; the host decides.
        let t = m.drop_on(sq("h5"));
        assert_eq!(
            t,
            Transition::Attempt(MoveAttempt {
                from: sq("e2"),
                to: sq("h5")
            })
        );
        assert_eq!(m, Interaction::new());
        assert_eq!(m.drag_end(), Transition::Unchanged, "drag-end after a drop is a no-op");
    }

    #[test]
    fn drag_end_without_drop_clears() {
        let mut m = Interaction::new();
        m.drag_start(sq("e2"), &position(), moves(&["e3", "e4"])).unwrap();
        assert_eq!(m.drag_end(), Transition::Cleared);
        assert_eq!(m, Interaction::new());
    }

    #[test]
    fn drag_start_replaces_click_selection() {
        let mut m = Interaction::new();
        m.click(sq("e2"), &position(), moves(&["e3"])).unwrap();
        m.drag_start(sq("g1"), &position(), moves(&["f3"])).unwrap();
        assert_eq!(m.selection(), Selection::Selected(sq("g1")));
        assert_eq!(m.drag(), Some(DragSession { origin: sq("g1") }));
        assert_eq!(m.highlights(), &set(&["f3"]));
    }

    #[test]
    fn drag_start_on_empty_square_is_ignored() {
        let mut m = Interaction::new();
        m.click(sq("e2"), &position(), moves(&["e3"])).unwrap();
        assert_eq!(
            m.drag_start(sq("d4"), &position(), no_query).unwrap(),
            Transition::Unchanged
        );
        assert_eq!(m.selection(), Selection::Selected(sq("e2")));
        assert!(m.drag().is_none());
    }

    #[test]
    fn drop_without_drag_is_ignored() {
        let mut m = Interaction::new();
        m.click(sq("e2"), &position(), moves(&["e3"])).unwrap();
        assert_eq!(m.drop_on(sq("e3")), Transition::Unchanged);
        assert_eq!(m.selection(), Selection::Selected(sq("e2")));
    }
}
