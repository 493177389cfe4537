// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core grid implementation: cells, glyph slots, updates and queries.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::damage::Damage;
use crate::geometry::BoardGeometry;
use crate::types::{CellFlags, GlyphId, SquareLabel};

/// One visual cell, owned by the grid for the lifetime of the board.
#[derive(Clone, Debug)]
pub struct Cell {
    label: SquareLabel,
    bounds: Rect,
    flags: CellFlags,
    glyph: Option<GlyphId>,
}

impl Cell {
    /// Label of the square this cell draws.
    pub fn label(&self) -> SquareLabel {
        self.label
    }

    /// Board-space bounds of the cell.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Current color and styling flags.
    pub fn flags(&self) -> CellFlags {
        self.flags
    }

    /// Glyph currently placed on this cell, if any.
    pub fn glyph(&self) -> Option<GlyphId> {
        self.glyph
    }

    /// Shorthand for `flags().contains(CellFlags::HIGHLIGHTED)`.
    pub fn is_highlighted(&self) -> bool {
        self.flags.contains(CellFlags::HIGHLIGHTED)
    }
}

/// A piece image placed on a cell.
///
/// The glyph records the label of the cell that owns it, so a hit on the
/// glyph resolves to a square without consulting the cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    owner: SquareLabel,
    token: String,
    image: String,
}

impl Glyph {
    /// Label of the owning cell.
    pub fn owner(&self) -> SquareLabel {
        self.owner
    }

    /// Opaque token the glyph was created for (for example a piece id).
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Image reference to draw. Empty when no image could be resolved.
    pub fn image(&self) -> &str {
        &self.image
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    glyph: Glyph,
}

/// What a hit test landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// The bare cell.
    Cell,
    /// A glyph drawn above the cell.
    Glyph(GlyphId),
}

/// Result of a hit test. Always carries the owning square label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    /// Square under the point.
    pub label: SquareLabel,
    /// Topmost element under the point.
    pub target: HitTarget,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(BoardGeometry::DEFAULT_SIZE)
    }
}

/// The 64-cell board tree.
///
/// Cells are created once in [`Grid::new`] and are never removed; glyphs are
/// placed and cleared by the renderer. Changes are batched until
/// [`Grid::commit`], which reports the touched rectangles.
pub struct Grid {
    geometry: BoardGeometry,
    cells: Vec<Cell>,            // indexed by SquareLabel::index
    slots: Vec<Option<Slot>>,    // glyph slots
    generations: Vec<u32>,       // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    dirty: u64,                  // one bit per SquareLabel::index
    pending: Vec<Rect>,          // extra damage not tied to a current cell rect
    epoch: u64,
}

impl core::fmt::Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let alive = self.slots.iter().filter(|s| s.is_some()).count();
        f.debug_struct("Grid")
            .field("geometry", &self.geometry)
            .field("glyphs_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("dirty", &self.dirty.count_ones())
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl Grid {
    /// Build the 64 cells for a board `size` pixels across.
    pub fn new(size: f64) -> Self {
        let geometry = BoardGeometry::new(size);
        let mut cells: Vec<Cell> = (0..SquareLabel::COUNT)
            .filter_map(SquareLabel::from_index)
            .map(|label| Cell {
                label,
                bounds: geometry.square_rect(label),
                flags: if label.is_light() {
                    CellFlags::LIGHT
                } else {
                    CellFlags::empty()
                },
                glyph: None,
            })
            .collect();
        cells.shrink_to_fit();
        Self {
            geometry,
            cells,
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            dirty: u64::MAX,
            pending: Vec::new(),
            epoch: 0,
        }
    }

    /// Current board geometry.
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// Number of commits performed so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The cell drawing `label`. Never fails: the label set is closed.
    pub fn cell_for(&self, label: SquareLabel) -> &Cell {
        &self.cells[label.index()]
    }

    /// All cells in drawing order (rank 8 first).
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        SquareLabel::all().map(move |label| self.cell_for(label))
    }

    /// Rebuild cell bounds for a new board size.
    ///
    /// Labels, flags and glyph ids survive; every cell is reported as damaged on
    /// the next commit, along with the previous board bounds.
    pub fn resize(&mut self, size: f64) {
        let old = self.geometry.bounds();
        self.geometry = BoardGeometry::new(size);
        for cell in &mut self.cells {
            cell.bounds = self.geometry.square_rect(cell.label);
        }
        if old.width() > 0.0 && old.height() > 0.0 && old != self.geometry.bounds() {
            self.pending.push(old);
        }
        self.dirty = u64::MAX;
    }

    /// Place a glyph on `label`, replacing any glyph already there.
    pub fn place_glyph(
        &mut self,
        label: SquareLabel,
        token: impl Into<String>,
        image: impl Into<String>,
    ) -> GlyphId {
        self.clear_glyph(label);
        let slot = Slot {
            generation: 0,
            glyph: Glyph {
                owner: label,
                token: token.into(),
                image: image.into(),
            },
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(Slot { generation, ..slot });
            #[allow(
                clippy::cast_possible_truncation,
                reason = "GlyphId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Slot { generation, ..slot }));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "GlyphId uses 32-bit indices by design."
            )]
            ((self.slots.len() - 1) as u32, generation)
        };
        let id = GlyphId::new(idx, generation);
        self.cells[label.index()].glyph = Some(id);
        self.mark(label);
        id
    }

    /// Remove the glyph on `label`. Returns whether one was present.
    pub fn clear_glyph(&mut self, label: SquareLabel) -> bool {
        let Some(id) = self.cells[label.index()].glyph.take() else {
            return false;
        };
        self.free_slot(id);
        self.mark(label);
        true
    }

    /// Remove a glyph by id. Stale ids are ignored.
    pub fn remove_glyph(&mut self, id: GlyphId) {
        let Some(owner) = self.glyph(id).map(Glyph::owner) else {
            return;
        };
        self.clear_glyph(owner);
    }

    /// Look up a live glyph.
    pub fn glyph(&self, id: GlyphId) -> Option<&Glyph> {
        self.slots
            .get(id.idx())
            .and_then(|s| s.as_ref())
            .filter(|s| s.generation == id.generation())
            .map(|s| &s.glyph)
    }

    /// The glyph placed on `label`, if any.
    pub fn glyph_at(&self, label: SquareLabel) -> Option<&Glyph> {
        self.cell_for(label).glyph.and_then(|id| self.glyph(id))
    }

    /// Iterate live glyphs in drawing order of their cells.
    pub fn glyphs(&self) -> impl Iterator<Item = (GlyphId, &Glyph)> + '_ {
        self.cells()
            .filter_map(move |cell| cell.glyph.and_then(|id| Some((id, self.glyph(id)?))))
    }

    /// Board-space bounds of a live glyph (the bounds of its owning cell).
    pub fn glyph_bounds(&self, id: GlyphId) -> Option<Rect> {
        self.glyph(id).map(|g| self.cell_for(g.owner).bounds)
    }

    /// Returns true if `id` refers to a live glyph.
    ///
    /// See [`GlyphId`] docs for the generational semantics.
    pub fn is_alive(&self, id: GlyphId) -> bool {
        self.glyph(id).is_some()
    }

    /// Replace the flags of a cell. `LIGHT` is fixed and cannot be changed here.
    pub fn set_flags(&mut self, label: SquareLabel, flags: CellFlags) {
        let cell = &mut self.cells[label.index()];
        let next = (cell.flags & CellFlags::LIGHT) | (flags & CellFlags::STYLE);
        if next != cell.flags {
            cell.flags = next;
            self.mark(label);
        }
    }

    /// Add styling flags to a cell.
    pub fn insert_flags(&mut self, label: SquareLabel, flags: CellFlags) {
        let current = self.cells[label.index()].flags;
        self.set_flags(label, current | flags);
    }

    /// Remove styling flags from a cell.
    pub fn remove_flags(&mut self, label: SquareLabel, flags: CellFlags) {
        let current = self.cells[label.index()].flags;
        self.set_flags(label, current - flags);
    }

    /// Hit test a board-space point.
    ///
    /// Glyphs sit above their cell, so a point over an occupied cell reports the glyph.
    pub fn hit_test_point(&self, pt: Point) -> Option<Hit> {
        let label = self.geometry.label_at(pt)?;
        let target = match self.cell_for(label).glyph {
            Some(id) if self.is_alive(id) => HitTarget::Glyph(id),
            _ => HitTarget::Cell,
        };
        Some(Hit { label, target })
    }

    /// Iterate labels whose cells overlap `rect` with non-zero area.
    pub fn intersect_rect(&self, rect: Rect) -> impl Iterator<Item = SquareLabel> + '_ {
        self.cells().filter_map(move |cell| {
            let overlap = cell.bounds.intersect(rect);
            (overlap.width() > 0.0 && overlap.height() > 0.0).then_some(cell.label)
        })
    }

    /// Flush batched changes and return the rectangles that need repainting.
    pub fn commit(&mut self) -> Damage {
        self.epoch = self.epoch.wrapping_add(1);
        let mut damage = Damage {
            dirty_rects: core::mem::take(&mut self.pending),
        };
        let dirty = core::mem::take(&mut self.dirty);
        if dirty == 0 {
            return damage;
        }
        for label in SquareLabel::all() {
            if dirty & (1_u64 << label.index()) != 0 {
                let bounds = self.cell_for(label).bounds;
                if bounds.width() > 0.0 && bounds.height() > 0.0 {
                    damage.dirty_rects.push(bounds);
                }
            }
        }
        damage
    }

    // --- internals ---

    fn mark(&mut self, label: SquareLabel) {
        self.dirty |= 1_u64 << label.index();
    }

    fn free_slot(&mut self, id: GlyphId) {
        if let Some(slot) = self.slots.get_mut(id.idx())
            && slot.as_ref().is_some_and(|s| s.generation == id.generation())
        {
            *slot = None;
            self.free_list.push(id.idx());
        }
    }
}
