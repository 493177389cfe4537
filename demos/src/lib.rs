// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the demo binaries: a toy referee host and a text printer.

use checkerboard_grid::{CellFlags, Grid, SquareLabel};
use checkerboard_widget::{BoardError, BoardHost, HookError, MoveVerdict, Position};

/// A referee that only knows pawn pushes. Everything else snaps back.
#[derive(Debug, Default)]
pub struct PawnReferee {
    position: Position,
    /// Moves the referee accepted, in order.
    pub history: Vec<(SquareLabel, SquareLabel)>,
}

impl PawnReferee {
    /// Referee for a game starting from `position`.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }

    fn pushes(&self, from: SquareLabel) -> Vec<SquareLabel> {
        let Some(piece) = self.position.get(from) else {
            return Vec::new();
        };
        let (step, home): (i8, u8) = match piece.as_str() {
            "wP" => (1, 1),
            "bP" => (-1, 6),
            _ => return Vec::new(),
        };
        let ahead = |n: i8| {
            let rank = from.rank().checked_add_signed(step * n)?;
            SquareLabel::new(from.file(), rank).filter(|s| !self.position.is_occupied(*s))
        };
        let mut out = Vec::new();
        if let Some(one) = ahead(1) {
            out.push(one);
            if from.rank() == home {
                out.extend(ahead(2));
            }
        }
        out
    }
}

impl BoardHost for PawnReferee {
    fn show_moves(&mut self, square: SquareLabel) -> Result<Vec<SquareLabel>, HookError> {
        Ok(self.pushes(square))
    }

    fn on_drop(&mut self, from: SquareLabel, to: SquareLabel) -> Result<MoveVerdict, HookError> {
        if !self.pushes(from).contains(&to) {
            tracing::info!(%from, %to, "referee: illegal, snapping back");
            return Ok(MoveVerdict::Snapback);
        }
        let piece = self
            .position
            .remove(from)
            .ok_or_else(|| format!("no piece on {from}"))?;
        self.position.insert(to, piece);
        self.history.push((from, to));
        tracing::info!(%from, %to, "referee: accepted");
        Ok(MoveVerdict::Accept)
    }

    fn pull_position(&mut self) -> Result<Option<Position>, HookError> {
        Ok(Some(self.position.clone()))
    }

    fn report_error(&mut self, error: &BoardError) {
        tracing::warn!(%error, "referee received board error");
    }
}

/// Draw the grid as text, rank 8 on top.
///
/// Pieces print as their token; `**` marks a highlighted empty square, `..`
/// and `  ` the dark and light empty squares. The selected square is bracketed.
pub fn ascii(grid: &Grid) -> String {
    let mut out = String::new();
    for (i, cell) in grid.cells().enumerate() {
        if i % 8 == 0 {
            out.push_str(&format!("{} ", cell.label().rank() + 1));
        }
        let body = match grid.glyph_at(cell.label()) {
            Some(glyph) => glyph.token().to_owned(),
            None if cell.is_highlighted() => "**".to_owned(),
            None if cell.flags().contains(CellFlags::LIGHT) => "  ".to_owned(),
            None => "..".to_owned(),
        };
        if cell.flags().contains(CellFlags::SELECTED) {
            out.push_str(&format!("[{body}]"));
        } else {
            out.push_str(&format!(" {body} "));
        }
        if i % 8 == 7 {
            out.push('\n');
        }
    }
    out.push_str("   a   b   c   d   e   f   g   h\n");
    out
}

/// Install a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
