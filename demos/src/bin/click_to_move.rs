// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-to-move against a pawn-only referee.
//!
//! The opening position is loaded from JSON, then a few clicks select, move,
//! reselect and toggle off. Set `RUST_LOG=debug` to see board transitions.
//!
//! Run:
//! - `cargo run -p checkerboard_demos --bin click_to_move`

use checkerboard_demos::{PawnReferee, ascii, init_tracing};
use checkerboard_grid::SquareLabel;
use checkerboard_widget::{Board, BoardConfig, PieceTheme, Position};

const OPENING: &str = r#"{
    "e1": "wK", "d1": "wQ", "d2": "wP", "e2": "wP", "f2": "wP",
    "e8": "bK", "d8": "bQ", "d7": "bP", "e7": "bP", "f7": "bP",
    "a4": null
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let opening: Position = serde_json::from_str(OPENING)?;
    let config = BoardConfig::default()
        .with_size(320.0)
        .with_piece_theme(PieceTheme::template("img/chesspieces/wikipedia/{piece}.png"));
    let mut board = Board::new(config, PawnReferee::new(opening.clone()));
    board.set_position(opening);
    println!("== Opening ==\n{}", ascii(board.grid()));

    for square in ["e2", "e4", "d7", "f7", "f7", "d2", "d4"] {
        let square: SquareLabel = square.parse()?;
        let outcome = board.click(square);
        let damage = board.take_damage();
        println!(
            "== click {square} -> {:?}, {} rect(s) to repaint ==\n{}",
            outcome.map(|o| o.verdict),
            damage.dirty_rects.len(),
            ascii(board.grid()),
        );
    }

    println!("accepted moves: {:?}", board.host().history);
    println!("final position: {}", serde_json::to_string(&board.position())?);
    Ok(())
}
