// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piece placement: [`PieceId`], [`Position`] and the [`PositionStore`].
//!
//! A `Position` is a plain owned value. The store hands out clones and takes
//! ownership on write, so a host holding a `Position` can never reach the
//! board's internal copy, and the board never observes later host edits.

use std::collections::BTreeMap;
use std::fmt;

use checkerboard_grid::SquareLabel;

/// Opaque token naming a piece kind and color, such as `"wP"`.
///
/// Only the host and the piece theme give it meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct PieceId(String);

impl PieceId {
    /// Wrap a token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PieceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PieceId {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for PieceId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Mapping from occupied squares to pieces. Empty squares are absent.
///
/// Keys are unique, so a square holds at most one piece.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pieces: BTreeMap<SquareLabel, PieceId>,
}

impl Position {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a position from entries whose piece may be missing; `None` entries are dropped.
    ///
    /// ```
    /// use checkerboard_widget::{PieceId, Position};
    ///
    /// let e2 = "e2".parse().unwrap();
    /// let e4 = "e4".parse().unwrap();
    /// let position = Position::from_sparse([(e2, Some(PieceId::from("wP"))), (e4, None)]);
    /// assert_eq!(position.len(), 1);
    /// assert!(!position.is_occupied(e4));
    /// ```
    pub fn from_sparse<I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (SquareLabel, Option<P>)>,
        P: Into<PieceId>,
    {
        entries
            .into_iter()
            .filter_map(|(square, piece)| Some((square, piece?.into())))
            .collect()
    }

    /// Piece on `square`, if any.
    pub fn get(&self, square: SquareLabel) -> Option<&PieceId> {
        self.pieces.get(&square)
    }

    /// Whether a piece stands on `square`.
    pub fn is_occupied(&self, square: SquareLabel) -> bool {
        self.pieces.contains_key(&square)
    }

    /// Put `piece` on `square`, returning the piece it replaced.
    pub fn insert(&mut self, square: SquareLabel, piece: impl Into<PieceId>) -> Option<PieceId> {
        self.pieces.insert(square, piece.into())
    }

    /// Empty `square`, returning the piece that stood there.
    pub fn remove(&mut self, square: SquareLabel) -> Option<PieceId> {
        self.pieces.remove(&square)
    }

    /// Number of occupied squares.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// True for an empty board.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Occupied squares with their pieces, in label order.
    pub fn iter(&self) -> impl Iterator<Item = (SquareLabel, &PieceId)> + '_ {
        self.pieces.iter().map(|(square, piece)| (*square, piece))
    }

    /// Occupied squares in label order.
    pub fn squares(&self) -> impl Iterator<Item = SquareLabel> + '_ {
        self.pieces.keys().copied()
    }
}

impl<P: Into<PieceId>> FromIterator<(SquareLabel, P)> for Position {
    fn from_iter<I: IntoIterator<Item = (SquareLabel, P)>>(iter: I) -> Self {
        Self {
            pieces: iter
                .into_iter()
                .map(|(square, piece)| (square, piece.into()))
                .collect(),
        }
    }
}

impl<P: Into<PieceId>> Extend<(SquareLabel, P)> for Position {
    fn extend<I: IntoIterator<Item = (SquareLabel, P)>>(&mut self, iter: I) {
        for (square, piece) in iter {
            self.pieces.insert(square, piece.into());
        }
    }
}

impl IntoIterator for Position {
    type Item = (SquareLabel, PieceId);
    type IntoIter = std::collections::btree_map::IntoIter<SquareLabel, PieceId>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Position {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.pieces.len()))?;
        for (square, piece) in &self.pieces {
            map.serialize_entry(&square.to_string(), piece)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Position {
    /// Accepts `{"e2": "wP", "e4": null}`; `null` entries mean an empty square.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Option<PieceId>>::deserialize(deserializer)?;
        let mut entries = Vec::with_capacity(raw.len());
        for (label, piece) in raw {
            let square = label.parse().map_err(serde::de::Error::custom)?;
            entries.push((square, piece));
        }
        Ok(Self::from_sparse(entries))
    }
}

/// The board's own copy of the position.
///
/// Written only by [`Board::set_position`](crate::Board::set_position) and the
/// accept path of a move attempt.
#[derive(Clone, Debug, Default)]
pub struct PositionStore {
    current: Position,
}

impl PositionStore {
    /// A store holding an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// An owned copy of the stored position.
    pub fn get(&self) -> Position {
        self.current.clone()
    }

    /// Replace the stored position. No legality checks are made.
    pub fn set(&mut self, position: Position) {
        self.current = position;
    }

    /// Borrow the stored position for rendering and guards.
    pub(crate) fn peek(&self) -> &Position {
        &self.current
    }
}
