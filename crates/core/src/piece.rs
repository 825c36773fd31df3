//! Piece module - the falling piece instance
//!
//! A piece borrows its shape definition from the static catalog and only owns
//! its anchor and rotation index. `rotate` and `translate` are unconditional:
//! the engine checks the result with the collision detector and undoes or
//! skips the change when it would collide.

use arrayvec::ArrayVec;

use crate::shapes::{definition, occupied_cells, ShapeDefinition, ShapeMatrix};
use crate::types::{Color, PieceKind};

/// Most cells a rotation state can occupy.
pub const MAX_PIECE_CELLS: usize = 4;

/// Absolute `(row, col)` cells covered by a piece.
pub type PieceCells = ArrayVec<(i32, i32), MAX_PIECE_CELLS>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    shape: &'static ShapeDefinition,
    rotation: usize,
    /// Anchor column (left edge of the shape matrix)
    pub x: i32,
    /// Anchor row (top edge of the shape matrix); negative while above the grid
    pub y: i32,
}

impl Piece {
    /// Create a piece of `kind` in its first rotation state at `(x, y)`.
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            shape: definition(kind),
            rotation: 0,
            x,
            y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind
    }

    pub fn color(&self) -> Color {
        self.shape.color
    }

    pub fn definition(&self) -> &'static ShapeDefinition {
        self.shape
    }

    pub fn rotation_index(&self) -> usize {
        self.rotation
    }

    /// The rotation-state matrix currently selected.
    pub fn current_shape(&self) -> ShapeMatrix {
        self.shape.rotation(self.rotation)
    }

    /// Advance to the next rotation state, wrapping at the end.
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % self.shape.rotation_count();
    }

    /// Force a rotation index (used to revert a rejected rotation).
    pub fn set_rotation_index(&mut self, rotation: usize) {
        self.rotation = rotation % self.shape.rotation_count();
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Absolute `(row, col)` of every occupied cell, offset by `(dx, dy)`.
    pub fn cells_at(&self, dx: i32, dy: i32) -> PieceCells {
        occupied_cells(self.current_shape())
            .map(|(r, c)| (self.y + r + dy, self.x + c + dx))
            .take(MAX_PIECE_CELLS)
            .collect()
    }

    /// Absolute `(row, col)` of every occupied cell.
    pub fn cells(&self) -> PieceCells {
        self.cells_at(0, 0)
    }
}
