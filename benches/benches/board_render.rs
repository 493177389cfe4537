// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use checkerboard_grid::{Grid, SquareLabel};
use checkerboard_widget::{
    Board, BoardConfig, Callbacks, HighlightSet, PieceTheme, Position, RenderInput, Selection,
    render,
};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

fn sq(s: &str) -> SquareLabel {
    s.parse().unwrap()
}

fn initial_position() -> Position {
    let back = ["R", "N", "B", "Q", "K", "B", "N", "R"];
    let mut position = Position::new();
    for (file, piece) in (0_u8..).zip(back) {
        let at = |rank| SquareLabel::new(file, rank).unwrap();
        position.insert(at(0), format!("w{piece}"));
        position.insert(at(1), "wP");
        position.insert(at(6), "bP");
        position.insert(at(7), format!("b{piece}"));
    }
    position
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let position = initial_position();
    let highlights: HighlightSet = [sq("e3"), sq("e4")].into_iter().collect();
    let frame = RenderInput {
        position: &position,
        selection: Selection::Selected(sq("e2")),
        highlights: &highlights,
        drag: None,
    };

    let template = PieceTheme::default();
    group.bench_function("cold_template", |b| {
        b.iter_batched(
            || Grid::new(400.0),
            |mut grid| black_box(render(&mut grid, frame, &template)),
            BatchSize::SmallInput,
        );
    });

    let resolver = PieceTheme::resolver(|piece| Ok(format!("/static/pieces/{piece}.svg")));
    group.bench_function("cold_resolver", |b| {
        b.iter_batched(
            || Grid::new(400.0),
            |mut grid| black_box(render(&mut grid, frame, &resolver)),
            BatchSize::SmallInput,
        );
    });

    let mut warm = Grid::new(400.0);
    let _ = render(&mut warm, frame, &template);
    group.bench_function("unchanged", |b| {
        b.iter(|| black_box(render(&mut warm, frame, &template)));
    });
    group.finish();
}

fn bench_interaction(c: &mut Criterion) {
    let host = Callbacks::new().with_show_moves(|_| Ok(vec!["e3".parse()?, "e4".parse()?]));
    let mut board = Board::new(BoardConfig::default(), host);
    board.set_position(initial_position());
    c.bench_function("board/select_deselect", |b| {
        b.iter(|| {
            board.click(black_box(sq("e2")));
            board.click(black_box(sq("e2")));
            black_box(board.take_damage());
        });
    });

    c.bench_function("board/set_position", |b| {
        let position = initial_position();
        b.iter(|| {
            board.set_position(black_box(position.clone()));
            black_box(board.take_damage());
        });
    });
}

criterion_group!(benches, bench_render, bench_interaction);
criterion_main!(benches);
