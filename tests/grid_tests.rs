//! Grid tests - occupancy, locking and line clearing through the public API

use blockfall::core::{ConfigError, Grid, Piece};
use blockfall::types::{Color, PieceKind, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);

    for row in 0..GRID_HEIGHT as i32 {
        for col in 0..GRID_WIDTH as i32 {
            assert_eq!(grid.get(row, col), Some(None), "cell ({}, {})", row, col);
        }
    }
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(GRID_HEIGHT as i32, 0), None);
    assert_eq!(grid.get(0, GRID_WIDTH as i32), None);
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
    assert!(grid.set(10, 5, Some(Color::Purple)));
    assert_eq!(grid.get(10, 5), Some(Some(Color::Purple)));
    assert!(grid.is_occupied(10, 5));

    assert!(!grid.set(-1, 5, Some(Color::Purple)));
    assert!(!grid.set(10, 10, Some(Color::Purple)));
}

#[test]
fn test_custom_dimensions() {
    let grid = Grid::new(6, 12).unwrap();
    assert_eq!(grid.rows().count(), 12);
    assert!(grid.rows().all(|row| row.len() == 6));
    assert!(grid.is_inside_bounds(11, 5));
    assert!(!grid.is_inside_bounds(12, 5));
    assert!(!grid.is_inside_bounds(0, 6));
}

#[test]
fn test_zero_dimensions_are_config_errors() {
    assert_eq!(
        Grid::new(0, 20),
        Err(ConfigError::InvalidDimensions {
            width: 0,
            height: 20
        })
    );
}

#[test]
fn test_single_row_clear_compacts_rows_above() {
    let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
    grid.fill_row_except(19, Color::Cyan, &[]);
    grid.set(18, 0, Some(Color::Red));
    grid.set(18, 7, Some(Color::Green));
    grid.set(17, 2, Some(Color::Blue));

    assert_eq!(grid.clear_completed_lines(), 1);

    // Former row 18 is now the floor row, former row 17 above it.
    assert_eq!(grid.get(19, 0), Some(Some(Color::Red)));
    assert_eq!(grid.get(19, 7), Some(Some(Color::Green)));
    assert_eq!(grid.get(18, 2), Some(Some(Color::Blue)));
    assert_eq!(grid.occupied_count(), 3);
    assert!(grid.row(0).unwrap().iter().all(Option::is_none));
}

#[test]
fn test_non_adjacent_full_rows_clear_together() {
    let mut grid = Grid::new(4, 6).unwrap();
    grid.fill_row_except(5, Color::Cyan, &[]);
    grid.fill_row_except(4, Color::Red, &[1]);
    grid.fill_row_except(3, Color::Green, &[]);
    grid.set(2, 3, Some(Color::Blue));

    assert_eq!(grid.clear_completed_lines(), 2);
    assert_eq!(grid.get(5, 0), Some(Some(Color::Red)));
    assert_eq!(grid.get(5, 1), Some(None));
    assert_eq!(grid.get(4, 3), Some(Some(Color::Blue)));
    assert_eq!(grid.occupied_count(), 4);
}

#[test]
fn test_clear_with_no_full_rows_is_a_no_op() {
    let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
    grid.fill_row_except(19, Color::Cyan, &[9]);
    let before = grid.clone();
    assert_eq!(grid.clear_completed_lines(), 0);
    assert_eq!(grid, before);
}

#[test]
fn test_lock_then_clear() {
    let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
    grid.fill_row_except(19, Color::Red, &[0, 1, 2, 3]);

    // Horizontal I fills the gap.
    let piece = Piece::new(PieceKind::I, 0, 19);
    grid.lock(&piece).unwrap();
    assert!(grid.is_row_full(19));
    assert_eq!(grid.clear_completed_lines(), 1);
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_lock_top_out_leaves_grid_untouched() {
    let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
    // Vertical I anchored at row -2 spans rows -2..=1.
    let mut piece = Piece::new(PieceKind::I, 4, -2);
    piece.rotate();

    let err = grid.lock(&piece).unwrap_err();
    assert_eq!(err.row, -2);
    assert_eq!(grid.occupied_count(), 0);
}
