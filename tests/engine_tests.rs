//! Engine behaviour through the public facade: collisions, rotation,
//! locking, line clears, scoring and game over.

use tui_tetromino::core::{GameState, Grid, ScriptedRng, SimpleRng, Tetromino};
use tui_tetromino::types::{
    GameAction, GameStatus, PaletteColor, Rotation, ShapeKind, COLUMNS, LOCK_SCORE, ROWS,
    SPAWN_X, SPAWN_Y,
};

fn piece(kind: ShapeKind, x: i32, y: i32) -> Tetromino {
    Tetromino::with_color(x, y, kind, PaletteColor::Green)
}

fn vertical_i(x: i32, y: i32) -> Tetromino {
    let mut p = piece(ShapeKind::I, x, y);
    p.rotate_next();
    p
}

/// Scripted RNG that always yields an O piece colored Cyan.
fn o_rng() -> ScriptedRng {
    ScriptedRng::new(vec![4, 0])
}

fn game(grid: Grid, current: Tetromino) -> GameState<ScriptedRng> {
    let next = piece(ShapeKind::O, SPAWN_X, SPAWN_Y);
    GameState::from_parts(grid, current, next, o_rng())
}

/// Every kind in every orientation, parked at the origin.
fn all_orientations() -> Vec<Tetromino> {
    let mut out = Vec::new();
    for kind in ShapeKind::ALL {
        let mut p = piece(kind, 0, 0);
        for _ in 0..4 {
            out.push(p);
            p.rotate_next();
        }
    }
    out
}

#[test]
fn walls_and_floor_always_collide() {
    let empty = GameState::with_rng(o_rng());
    let mut full_grid = Grid::new();
    for row in 0..ROWS {
        full_grid.fill_row(row, PaletteColor::Blue);
    }
    let full = game(full_grid, piece(ShapeKind::O, 0, 0));

    for p in all_orientations() {
        let m = *p.matrix();
        let (w, h) = (m.cols() as i32, m.rows() as i32);

        for state in [&empty as &GameState<ScriptedRng>, &full] {
            // One column past the left wall.
            assert!(state.collides(&p, -1, 5), "{:?} {:?}", p.kind(), p.rotation());
            // One column past the right wall.
            assert!(state.collides(&p, COLUMNS as i32 - w + 1, 5));
            // One row past the floor.
            assert!(state.collides(&p, 0, ROWS as i32 - h + 1));
        }

        // Flush against the walls and floor is fine on an empty grid.
        assert!(!empty.collides(&p, 0, 0));
        assert!(!empty.collides(&p, COLUMNS as i32 - w, ROWS as i32 - h));
    }
}

#[test]
fn cells_above_ceiling_do_not_collide() {
    let state = GameState::with_rng(o_rng());
    for p in all_orientations() {
        let h = p.matrix().rows() as i32;
        // Entire piece above row 0, then all but its bottom row.
        assert!(!state.collides(&p, 3, -h));
        assert!(!state.collides(&p, 3, 1 - h));
    }
}

#[test]
fn four_rotations_are_identity() {
    for start in all_orientations() {
        let mut p = start;
        for _ in 0..4 {
            p.rotate_next();
        }
        assert_eq!(p.rotation_index(), start.rotation_index());
        assert_eq!(p.matrix(), start.matrix());
    }

    let mut state = game(Grid::new(), piece(ShapeKind::T, 8, 10));
    let before = *state.current().matrix();
    for _ in 0..4 {
        assert!(state.rotate());
    }
    assert_eq!(state.current().rotation(), Rotation::North);
    assert_eq!(*state.current().matrix(), before);
}

#[test]
fn rejected_rotation_keeps_orientation() {
    // Vertical I against the right wall: the horizontal orientation would
    // stick out three columns.
    let mut state = game(Grid::new(), vertical_i(COLUMNS as i32 - 1, 10));
    let before = *state.current().matrix();

    assert!(!state.rotate());
    assert_eq!(state.current().rotation(), Rotation::East);
    assert_eq!(*state.current().matrix(), before);
    assert_eq!((state.current().x, state.current().y), (COLUMNS as i32 - 1, 10));
}

#[test]
fn rotation_blocked_by_locked_cell() {
    // T at (8, 10): the East orientation needs row 12, column 9; North does not.
    let mut grid = Grid::new();
    grid.set(12, 9, PaletteColor::Red);
    let mut state = game(grid, piece(ShapeKind::T, 8, 10));

    assert!(!state.rotate());
    assert_eq!(state.current().rotation_index(), 0);
}

#[test]
fn rotation_into_column_minus_one_reverts() {
    // T placed directly at x = -1: its East orientation has a cell in the
    // matrix's first column, i.e. grid column -1.
    let mut state = game(Grid::new(), piece(ShapeKind::T, -1, 10));
    let before = *state.current().matrix();
    assert_eq!(state.current().rotation_index(), 0);

    assert!(!state.rotate());
    assert_eq!(state.current().rotation_index(), 0);
    assert_eq!(*state.current().matrix(), before);
}

#[test]
fn lock_clears_non_adjacent_rows_and_keeps_order() {
    let mut grid = Grid::new();
    for row in [2, 5, 7] {
        grid.fill_row(row, PaletteColor::Blue);
    }
    grid.set(0, 3, PaletteColor::Yellow);
    grid.set(3, 0, PaletteColor::Red);
    grid.set(6, 1, PaletteColor::Green);
    grid.set(8, 2, PaletteColor::Magenta);

    let mut state = game(grid, piece(ShapeKind::O, 0, ROWS as i32 - 2));
    state.lock_piece();

    assert_eq!(state.lines(), 3);
    assert_eq!(state.score(), LOCK_SCORE);

    let g = state.grid();
    // Three fresh rows on top.
    for row in 0..3 {
        assert!(g.row(row).iter().all(|c| c.is_none()), "row {}", row);
    }
    // Survivors moved down by the number of cleared rows below them.
    assert_eq!(g.get(3, 3), Some(PaletteColor::Yellow));
    assert_eq!(g.get(5, 0), Some(PaletteColor::Red));
    assert_eq!(g.get(7, 1), Some(PaletteColor::Green));
    assert_eq!(g.get(8, 2), Some(PaletteColor::Magenta));
    // The locked O stayed put.
    assert!(g.is_occupied(ROWS - 1, 0));
    assert!(g.is_occupied(ROWS - 2, 1));
    assert_eq!(g.occupied_count(), 4 + 4);
}

#[test]
fn score_is_flat_per_lock() {
    // No lines.
    let mut state = game(Grid::new(), piece(ShapeKind::O, 0, ROWS as i32 - 2));
    state.lock_piece();
    assert_eq!(state.score(), 100);
    assert_eq!(state.lines(), 0);

    // Four lines with one vertical I.
    let mut grid = Grid::new();
    for row in ROWS - 4..ROWS {
        for col in 1..COLUMNS {
            grid.set(row, col, PaletteColor::Red);
        }
    }
    let mut state = game(grid, vertical_i(0, ROWS as i32 - 5));
    assert!(state.step());
    assert_eq!(state.score(), 0);
    assert!(state.step());

    let ev = state.take_last_event().unwrap();
    assert_eq!(ev.lines_cleared, 4);
    assert_eq!(ev.score_awarded, 100);
    assert_eq!(state.score(), 100);
    assert_eq!(state.lines(), 4);
    assert_eq!(state.grid().occupied_count(), 0);
}

#[test]
fn blocked_spawn_ends_game_once() {
    let mut grid = Grid::new();
    grid.set(1, SPAWN_X as usize + 1, PaletteColor::Red);
    let mut state = game(grid, piece(ShapeKind::O, 0, ROWS as i32 - 2));

    assert!(state.step());
    assert_eq!(state.status(), GameStatus::GameOver);
    assert!(state.take_last_event().unwrap().game_over);

    let frozen = state.snapshot();
    for _ in 0..10 {
        assert!(!state.step());
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::Rotate));
    }
    assert_eq!(state.snapshot(), frozen);
    assert_eq!(state.pieces_locked(), 1);
    assert!(state.take_last_event().is_none());
}

#[test]
fn o_piece_slides_to_left_wall() {
    let mut state = GameState::with_rng(o_rng());
    assert_eq!(state.current().kind(), ShapeKind::O);
    assert_eq!((state.current().x, state.current().y), (COLUMNS as i32 / 2 - 2, 0));

    for _ in 0..(COLUMNS / 2 - 2) {
        assert!(state.move_piece(-1));
    }
    assert_eq!(state.current().x, 0);

    assert!(!state.move_piece(-1));
    assert_eq!(state.current().x, 0);
}

#[test]
fn single_line_clear_at_bottom() {
    let mut grid = Grid::new();
    for col in 1..COLUMNS {
        grid.set(ROWS - 1, col, PaletteColor::Cyan);
    }
    let mut state = game(grid, vertical_i(0, ROWS as i32 - 4));
    state.lock_piece();

    assert_eq!(state.score(), 100);
    assert_eq!(state.lines(), 1);
    let g = state.grid();
    assert!(g.row(0).iter().all(|c| c.is_none()));
    // The three I cells above the cleared row dropped by one.
    for row in ROWS - 3..ROWS {
        assert!(g.is_occupied(row, 0));
    }
    assert!(!g.is_occupied(ROWS - 4, 0));
    assert!(!g.is_occupied(ROWS - 1, 1));
}

#[test]
fn step_only_game_ends_and_scores_every_lock() {
    let mut state = GameState::new(2024);
    let mut steps = 0;
    while !state.is_game_over() {
        state.step();
        steps += 1;
        assert!(steps < 100_000, "game never ended");
    }

    assert!(state.pieces_locked() > 0);
    assert_eq!(state.score(), state.pieces_locked() * LOCK_SCORE);
}

#[test]
fn same_seed_same_game() {
    let play = |seed| {
        let mut state: GameState<SimpleRng> = GameState::new(seed);
        let script = [
            GameAction::MoveLeft,
            GameAction::Rotate,
            GameAction::MoveRight,
            GameAction::MoveRight,
            GameAction::SoftDrop,
        ];
        let mut i = 0;
        while !state.is_game_over() && i < 20_000 {
            state.apply_action(script[i % script.len()]);
            state.step();
            i += 1;
        }
        state.snapshot()
    };

    assert_eq!(play(99), play(99));
}
