//! Collision detection between a piece and the grid.

use crate::grid::Grid;
use crate::piece::Piece;

/// Would `piece`, shifted by `(dx, dy)`, hit a wall, the floor, or a locked cell?
///
/// Cells above the grid only collide with the side walls.
pub fn would_collide(piece: &Piece, grid: &Grid, dx: i32, dy: i32) -> bool {
    piece
        .cells_at(dx, dy)
        .iter()
        .any(|&(row, col)| !grid.is_inside_bounds(row, col) || grid.is_occupied(row, col))
}
