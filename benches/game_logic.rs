use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState, Piece};
use blockfall::types::ShapeKind;

fn bench_gravity_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("gravity_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(12345);
            }
            state.advance_gravity_tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for row in 16..20 {
                board.fill_row_except(row, ShapeKind::I, &[]);
            }
            board.clear_full_rows()
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let mut board = Board::new();
    for row in 10..20 {
        board.fill_row_except(row, ShapeKind::Z, &[row % 10]);
    }
    let piece = Piece::new(ShapeKind::T);

    c.bench_function("can_place", |b| {
        b.iter(|| board.can_place(black_box(&piece), black_box(0), black_box(8)))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(12345);
            }
            state.hard_drop()
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rotate_active", |b| {
        b.iter(|| {
            state.rotate_active();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = state.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_tick,
    bench_line_clear,
    bench_can_place,
    bench_hard_drop,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
