use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tetromino::core::{GameSnapshot, GameState, Grid};
use tui_tetromino::term::{FrameBuffer, GameView, Viewport};
use tui_tetromino::types::{PaletteColor, COLUMNS, ROWS};

fn bench_step(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("gravity_step", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state = GameState::new(12345);
            }
            state.step();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for row in ROWS - 4..ROWS {
                grid.fill_row(row, PaletteColor::Cyan);
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut dx = 1;

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            if !state.move_piece(black_box(dx)) {
                dx = -dx;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.step();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let viewport = Viewport::new(COLUMNS as u16 * 2 + 20, ROWS as u16 + 2);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            black_box(fb.cells().len());
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_line_clear,
    bench_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
