// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the grid: square labels, glyph identifiers and cell flags.

use core::fmt;
use core::str::FromStr;

/// One of the 64 fixed board coordinates, `a1` through `h8`.
///
/// The label set is closed: every value of this type names a real square, so
/// lookups keyed by a `SquareLabel` never fail.
///
/// ## Coordinates
///
/// - `file` is `0..8` for files `a..h`.
/// - `rank` is `0..8` for ranks `1..8`.
/// - Drawing coordinates put rank 8 on the top row, so `row = 7 - rank` and
///   `col = file`.
///
/// Ordering follows [`index`](Self::index): `a1 < b1 < … < h1 < a2 < … < h8`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SquareLabel(u8);

impl SquareLabel {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Create a label from zero-based file and rank. Returns `None` when either is out of range.
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self(rank * 8 + file))
        } else {
            None
        }
    }

    /// Create a label from its dense index (`rank * 8 + file`).
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "index is checked to be below 64."
            )]
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Create a label from drawing coordinates (row 0 is rank 8).
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self((7 - row) * 8 + col))
        } else {
            None
        }
    }

    /// Dense index in `0..64`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based file (`0` is file `a`).
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Zero-based rank (`0` is rank `1`).
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Drawing row; rank 8 is row 0.
    pub const fn row(self) -> u8 {
        7 - self.rank()
    }

    /// Drawing column; file `a` is column 0.
    pub const fn col(self) -> u8 {
        self.file()
    }

    /// Whether the square is drawn with the light color. `a8` and `h1` are light.
    pub const fn is_light(self) -> bool {
        (self.row() + self.col()) % 2 == 0
    }

    /// All 64 labels in drawing order: rank 8 to rank 1, files `a` to `h`.
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..8_u8).flat_map(|row| (0..8_u8).map(move |col| Self((7 - row) * 8 + col)))
    }

    fn file_char(self) -> char {
        char::from(b'a' + self.file())
    }

    fn rank_char(self) -> char {
        char::from(b'1' + self.rank())
    }
}

impl fmt::Display for SquareLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// Error returned when a string does not name a square.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseSquareError {
    /// The input is not exactly two characters long.
    #[error("square label must be two characters, got {0}")]
    Length(usize),
    /// The first character is not a file in `a..h`.
    #[error("invalid file {0:?}")]
    File(char),
    /// The second character is not a rank in `1..8`.
    #[error("invalid rank {0:?}")]
    Rank(char),
}

impl FromStr for SquareLabel {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseSquareError::Length(s.chars().count()));
        };
        let file = match f {
            'a'..='h' => f as u8 - b'a',
            _ => return Err(ParseSquareError::File(f)),
        };
        let rank = match r {
            '1'..='8' => r as u8 - b'1',
            _ => return Err(ParseSquareError::Rank(r)),
        };
        Ok(Self(rank * 8 + file))
    }
}

impl TryFrom<&str> for SquareLabel {
    type Error = ParseSquareError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Identifier for a glyph node placed on a cell (generational).
///
/// Semantics follow a slot arena:
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On removal, the slot is freed and any existing `GlyphId` for it becomes stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `GlyphId`.
///
/// Use [`Grid::is_alive`](crate::Grid::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct GlyphId(pub(crate) u32, pub(crate) u32);

impl GlyphId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Per-cell styling flags.
    ///
    /// `LIGHT` is fixed when the grid is built; the remaining bits make up
    /// [`CellFlags::STYLE`] and are rewritten on every render.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        /// Cell uses the light square color.
        const LIGHT       = 0b0000_0001;
        /// Cell is a legal destination for the current selection.
        const HIGHLIGHTED = 0b0000_0010;
        /// Cell holds the selected piece.
        const SELECTED    = 0b0000_0100;
        /// Cell is the origin of an active drag.
        const DRAG_SOURCE = 0b0000_1000;
        /// All interaction styling bits.
        const STYLE = Self::HIGHLIGHTED.bits() | Self::SELECTED.bits() | Self::DRAG_SOURCE.bits();
    }
}
