// Copyright 2025 the Checkerboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use checkerboard_grid::{Grid, SquareLabel};
use checkerboard_input::{GestureRecognizer, PointerEvent};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Points spread over the board plus a margin, so some miss.
fn gen_points(count: usize, size: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            Point::new(
                rng.next_f64() * size * 1.2 - size * 0.1,
                rng.next_f64() * size * 1.2 - size * 0.1,
            )
        })
        .collect()
}

/// Grid with the two back ranks and pawn ranks filled.
fn full_grid(size: f64) -> Grid {
    let mut grid = Grid::new(size);
    for label in SquareLabel::all().filter(|l| matches!(l.rank(), 0 | 1 | 6 | 7)) {
        grid.place_glyph(label, "xX", "chess_pieces/xX.png");
    }
    let _ = grid.commit();
    grid
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    for &size in &[400.0_f64, 1024.0] {
        let grid = full_grid(size);
        let points = gen_points(4096, size);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("point_{size}"), |b| {
            b.iter(|| {
                let hits = points
                    .iter()
                    .filter_map(|pt| grid.hit_test_point(*pt))
                    .count();
                black_box(hits);
            });
        });
    }

    let grid = full_grid(400.0);
    group.bench_function("intersect_rect_quarter", |b| {
        b.iter(|| {
            let n = grid
                .intersect_rect(black_box(Rect::new(90.0, 90.0, 290.0, 290.0)))
                .count();
            black_box(n);
        });
    });
    group.finish();
}

fn bench_glyph_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("glyphs");
    group.throughput(Throughput::Elements(SquareLabel::COUNT as u64));
    group.bench_function("place_clear_commit_all", |b| {
        b.iter_batched(
            || Grid::new(400.0),
            |mut grid| {
                for label in SquareLabel::all() {
                    grid.place_glyph(label, "wP", "chess_pieces/wP.png");
                }
                black_box(grid.commit());
                for label in SquareLabel::all() {
                    grid.clear_glyph(label);
                }
                black_box(grid.commit());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_recognizer(c: &mut Criterion) {
    let grid = full_grid(400.0);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let path: Vec<Point> = (0..256)
        .map(|_| Point::new(rng.next_f64() * 400.0, rng.next_f64() * 400.0))
        .collect();
    c.bench_function("recognizer/drag_path_256", |b| {
        b.iter(|| {
            let mut recognizer = GestureRecognizer::new();
            // e2 always holds a glyph in `full_grid`.
            let _ = recognizer.handle(&grid, PointerEvent::Down(Point::new(225.0, 325.0)));
            for pt in &path {
                black_box(recognizer.handle(&grid, PointerEvent::Move(*pt)));
            }
            black_box(recognizer.handle(&grid, PointerEvent::Up(Point::new(225.0, 225.0))));
        });
    });
}

criterion_group!(benches, bench_hit_test, bench_glyph_churn, bench_recognizer);
criterion_main!(benches);
