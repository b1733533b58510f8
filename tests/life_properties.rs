use conway_grid::game_of_life::{parse_pattern, patterns, GridEngine, GridError};

fn engine_with(size: usize, live: &[(usize, usize)]) -> GridEngine {
    let mut engine = GridEngine::new(size).unwrap();
    for &(row, col) in live {
        engine.toggle(row, col).unwrap();
    }
    engine
}

#[test]
fn fresh_grid_is_dead() {
    for size in [1, 2, 3, 7, 16, 40] {
        let engine = GridEngine::new(size).unwrap();
        for row in 0..size {
            for col in 0..size {
                assert!(!engine.is_alive(row, col).unwrap());
            }
        }
    }
}

#[test]
fn zero_size_is_invalid() {
    assert_eq!(GridEngine::new(0).unwrap_err(), GridError::InvalidSize { size: 0 });
}

#[test]
fn out_of_bounds_is_reported() {
    let mut engine = GridEngine::new(4).unwrap();
    assert_eq!(
        engine.toggle(0, 4).unwrap_err(),
        GridError::OutOfBounds { row: 0, col: 4, size: 4 }
    );
    assert!(engine.is_alive(4, 0).is_err());
}

#[test]
fn toggle_twice_restores_cell() {
    let mut engine = engine_with(5, &[(2, 2)]);
    let before = engine.clone();
    for (row, col) in [(0, 0), (2, 2), (4, 3)] {
        engine.toggle(row, col).unwrap();
        engine.toggle(row, col).unwrap();
    }
    assert_eq!(engine, before);
}

#[test]
fn edges_and_corners_have_fewer_neighbors() {
    let engine = engine_with(3, &[(1, 1)]);
    assert_eq!(engine.count_live_neighbors(0, 0), 1);
    assert_eq!(engine.count_live_neighbors(0, 1), 1);

    let all: Vec<(usize, usize)> = (0..5usize).flat_map(|r| (0..5).map(move |c| (r, c))).collect();
    let full = engine_with(5, &all);
    for row in 0..5 {
        for col in 0..5 {
            let on_row_edge = row == 0 || row == 4;
            let on_col_edge = col == 0 || col == 4;
            let expected = match (on_row_edge, on_col_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };
            assert_eq!(full.count_live_neighbors(row, col), expected, "cell ({}, {})", row, col);
        }
    }
}

#[test]
fn glider_moves_diagonally_every_four_generations() {
    let glider = patterns::named("glider").unwrap();
    let mut engine = GridEngine::new(10).unwrap();
    glider.place(&mut engine, 1, 1).unwrap();
    let start = engine.live_cells();
    assert_eq!(start.len(), 5);

    for _ in 0..4 {
        engine.step();
    }

    let shifted: Vec<_> = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(engine.live_cells(), shifted);
    assert_eq!(engine.generation(), 4);
}

#[test]
fn block_is_still_life() {
    let block = patterns::named("block").unwrap();
    for size in 4..=8 {
        let mut engine = GridEngine::new(size).unwrap();
        block.place(&mut engine, 1, 1).unwrap();
        let before = engine.clone();
        engine.step();
        assert_eq!(engine, before);
    }
}

#[test]
fn block_in_corner_is_still_life() {
    let mut engine = engine_with(4, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    let before = engine.clone();
    engine.step();
    assert_eq!(engine, before);
}

#[test]
fn empty_grid_stays_empty() {
    for size in [1, 2, 5, 13] {
        let mut engine = GridEngine::new(size).unwrap();
        engine.step();
        engine.step();
        assert!(engine.is_empty());
    }
}

#[test]
fn isolated_cell_dies() {
    let mut engine = engine_with(6, &[(3, 2)]);
    engine.step();
    assert!(engine.is_empty());

    let mut single = engine_with(1, &[(0, 0)]);
    single.step();
    assert!(single.is_empty());
}

#[test]
fn blinker_has_period_two() {
    let blinker = parse_pattern("111\n").unwrap();
    let mut engine = GridEngine::new(5).unwrap();
    blinker.place_centered(&mut engine).unwrap();
    let start = engine.clone();

    engine.step();
    assert_eq!(engine.live_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    engine.step();
    assert_eq!(engine, start);
}

#[test]
fn glider_stops_at_the_edge() {
    // With hard edges a glider reaching the corner becomes a block
    let glider = patterns::named("glider").unwrap();
    let mut engine = GridEngine::new(6).unwrap();
    glider.place(&mut engine, 0, 0).unwrap();

    for _ in 0..40 {
        engine.step();
    }

    assert_eq!(engine.live_cells(), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
}
