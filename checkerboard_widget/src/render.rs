// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer: projects position and interaction state onto the [`Grid`].

use checkerboard_grid::{CellFlags, Damage, Grid, SquareLabel};

use crate::interaction::{DragSession, HighlightSet, Selection};
use crate::position::Position;
use crate::theme::PieceTheme;

/// Everything the renderer reads for one frame.
#[derive(Clone, Copy, Debug)]
pub struct RenderInput<'a> {
    /// Pieces to draw.
    pub position: &'a Position,
    /// Current selection.
    pub selection: Selection,
    /// Legal destinations to highlight.
    pub highlights: &'a HighlightSet,
    /// Active drag, if any.
    pub drag: Option<DragSession>,
}

/// Bring `grid` in line with `input` and return what needs repainting.
///
/// Every square ends up with exactly the glyph and styling flags `input`
/// implies. Glyphs whose token and image are unchanged are left in place, so
/// rendering the same input twice reports no damage the second time.
pub fn render(grid: &mut Grid, input: RenderInput<'_>, theme: &PieceTheme) -> Damage {
    let selected = input.selection.square();
    let drag_origin = input.drag.map(|d| d.origin);

    for label in SquareLabel::all() {
        match input.position.get(label) {
            Some(piece) => {
                let image = theme.image_for(piece);
                let current = grid.glyph_at(label);
                let unchanged = current
                    .is_some_and(|g| g.token() == piece.as_str() && g.image() == image);
                if !unchanged {
                    grid.place_glyph(label, piece.as_str(), image);
                }
            }
            None => {
                grid.clear_glyph(label);
            }
        }

        let mut flags = CellFlags::empty();
        flags.set(CellFlags::HIGHLIGHTED, input.highlights.contains(&label));
        flags.set(CellFlags::SELECTED, selected == Some(label));
        flags.set(CellFlags::DRAG_SOURCE, drag_origin == Some(label));
        grid.set_flags(label, flags);
    }

    let damage = grid.commit();
    tracing::trace!(rects = damage.dirty_rects.len(), epoch = grid.epoch(), "rendered");
    damage
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> SquareLabel {
        s.parse().unwrap()
    }

    fn input<'a>(position: &'a Position, highlights: &'a HighlightSet) -> RenderInput<'a> {
        RenderInput {
            position,
            selection: Selection::Idle,
            highlights,
            drag: None,
        }
    }

    #[test]
    fn glyphs_follow_the_position() {
        let mut grid = Grid::new(400.0);
        let theme = PieceTheme::default();
        let none = HighlightSet::new();
        let position: Position = [(sq("e2"), "wP"), (sq("g8"), "bN")].into_iter().collect();
        render(&mut grid, input(&position, &none), &theme);

        assert_eq!(grid.glyphs().count(), 2);
        let e2 = grid.glyph_at(sq("e2")).unwrap();
        assert_eq!(e2.owner(), sq("e2"));
        assert_eq!(e2.token(), "wP");
        assert_eq!(e2.image(), "chess_pieces/wP.png");

        let moved: Position = [(sq("e4"), "wP"), (sq("g8"), "bN")].into_iter().collect();
        render(&mut grid, input(&moved, &none), &theme);
        assert!(grid.glyph_at(sq("e2")).is_none());
        assert_eq!(grid.glyph_at(sq("e4")).map(|g| g.token()), Some("wP"));
        assert_eq!(grid.glyphs().count(), 2);
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let mut grid = Grid::new(400.0);
        let theme = PieceTheme::default();
        let highlights: HighlightSet = [sq("e3"), sq("e4")].into_iter().collect();
        let position: Position = [(sq("e2"), "wP")].into_iter().collect();
        let frame = RenderInput {
            position: &position,
            selection: Selection::Selected(sq("e2")),
            highlights: &highlights,
            drag: Some(DragSession { origin: sq("e2") }),
        };

        let first = render(&mut grid, frame, &theme);
        assert!(!first.is_empty());
        let glyph = grid.cell_for(sq("e2")).glyph();
        let flags: Vec<_> = grid.cells().map(|c| c.flags()).collect();

        let second = render(&mut grid, frame, &theme);
        assert!(second.is_empty(), "nothing changed, nothing to repaint");
        assert_eq!(grid.cell_for(sq("e2")).glyph(), glyph, "glyph kept in place");
        assert_eq!(grid.cells().map(|c| c.flags()).collect::<Vec<_>>(), flags);
    }

    #[test]
    fn styling_flags_track_interaction() {
        let mut grid = Grid::new(400.0);
        let theme = PieceTheme::default();
        let position: Position = [(sq("e2"), "wP")].into_iter().collect();
        let highlights: HighlightSet = [sq("e3"), sq("e4")].into_iter().collect();
        render(
            &mut grid,
            RenderInput {
                position: &position,
                selection: Selection::Selected(sq("e2")),
                highlights: &highlights,
                drag: Some(DragSession { origin: sq("e2") }),
            },
            &theme,
        );

        let e2 = grid.cell_for(sq("e2")).flags();
        assert!(e2.contains(CellFlags::SELECTED | CellFlags::DRAG_SOURCE));
        assert!(grid.cell_for(sq("e3")).is_highlighted());
        assert!(grid.cell_for(sq("e4")).is_highlighted());
        assert_eq!(
            grid.cells().filter(|c| c.is_highlighted()).count(),
            2,
            "only the highlight set is highlighted"
        );

        let none = HighlightSet::new();
        let damage = render(&mut grid, input(&position, &none), &theme);
        assert_eq!(damage.dirty_rects.len(), 3, "e2, e3 and e4 lose their styling");
        assert!(grid.cells().all(|c| (c.flags() & CellFlags::STYLE).is_empty()));
    }

    #[test]
    fn theme_change_replaces_images() {
        let mut grid = Grid::new(400.0);
        let none = HighlightSet::new();
        let position: Position = [(sq("a1"), "wR")].into_iter().collect();
        render(&mut grid, input(&position, &none), &PieceTheme::default());
        let old = grid.cell_for(sq("a1")).glyph().unwrap();

        let svg = PieceTheme::template("img/{piece}.svg");
        render(&mut grid, input(&position, &none), &svg);
        assert_eq!(grid.glyph_at(sq("a1")).map(|g| g.image()), Some("img/wR.svg"));
        assert!(!grid.is_alive(old), "replaced glyphs get fresh ids");
    }

    #[test]
    fn light_squares_survive_rendering() {
        let mut grid = Grid::new(400.0);
        let none = HighlightSet::new();
        let empty = Position::new();
        render(&mut grid, input(&empty, &none), &PieceTheme::default());
        assert!(grid.cell_for(sq("a8")).flags().contains(CellFlags::LIGHT));
        assert!(!grid.cell_for(sq("a1")).flags().contains(CellFlags::LIGHT));
    }
}
