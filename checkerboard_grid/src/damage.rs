// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damage summary produced by [`Grid::commit`](crate::Grid::commit).

use alloc::vec::Vec;
use kurbo::Rect;

/// Rectangles that need repainting since the previous commit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Damage {
    /// Board-space rectangles that should be repainted.
    pub dirty_rects: Vec<Rect>,
}

impl Damage {
    /// Returns the union of all damage rects.
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// True when nothing needs repainting.
    pub fn is_empty(&self) -> bool {
        self.dirty_rects.is_empty()
    }

    /// Fold another damage set into this one.
    pub fn extend(&mut self, other: Self) {
        self.dirty_rects.extend(other.dirty_rects);
    }
}
