// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-and-drop through raw pointer events.
//!
//! Three drags: a legal pawn push, an illegal knight hop that snaps back, and
//! one released off the board.
//!
//! Run:
//! - `cargo run -p checkerboard_demos --bin drag_to_move`

use checkerboard_demos::{PawnReferee, ascii, init_tracing};
use checkerboard_grid::{Grid, SquareLabel};
use checkerboard_input::PointerEvent;
use checkerboard_widget::{Board, BoardConfig, MoveOutcome, Position};
use kurbo::Point;

fn center(grid: &Grid, square: &str) -> Point {
    square
        .parse::<SquareLabel>()
        .map(|label| grid.geometry().square_rect(label).center())
        .unwrap_or_default()
}

/// Press on `from`, move in a few steps toward `to`, and release there.
fn drag(board: &mut Board<PawnReferee>, from: Point, to: Point) -> Option<MoveOutcome> {
    board.pointer(PointerEvent::Down(from));
    for step in 1..=4 {
        let t = f64::from(step) / 4.0;
        board.pointer(PointerEvent::Move(from.lerp(to, t)));
        if let Some(drag) = board.dragging() {
            tracing::debug!(origin = %drag.origin, offset = ?drag.offset(), "dragging");
        }
    }
    board.pointer(PointerEvent::Up(to))
}

fn main() {
    init_tracing();

    let sq = |s: &str| s.parse::<SquareLabel>().ok();
    let start: Position = [("g1", "wN"), ("e2", "wP"), ("e7", "bP")]
        .into_iter()
        .filter_map(|(s, p)| Some((sq(s)?, p)))
        .collect();

    let mut board = Board::new(BoardConfig::default(), PawnReferee::new(start.clone()));
    board.set_position(start);
    println!("== Start ==\n{}", ascii(board.grid()));

    let plans = [
        ("e2", center(board.grid(), "e2"), center(board.grid(), "e4")),
        ("g1", center(board.grid(), "g1"), center(board.grid(), "f3")),
        ("e7", center(board.grid(), "e7"), Point::new(500.0, 500.0)),
    ];
    for (label, from, to) in plans {
        let outcome = drag(&mut board, from, to);
        let damage = board.take_damage();
        println!(
            "== drag {label} -> {:?}, repaint {:?} ==\n{}",
            outcome.map(|o| o.verdict),
            damage.union_rect(),
            ascii(board.grid()),
        );
    }
    println!("accepted moves: {:?}", board.host().history);
}
