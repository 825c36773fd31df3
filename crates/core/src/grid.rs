//! Grid module - the playfield occupancy matrix
//!
//! The grid is a `width x height` matrix where each cell is empty or holds the
//! color of a locked piece. Storage is a flat row-major `Vec` allocated once at
//! construction; its length never changes afterwards.
//!
//! Coordinates are `(row, col)`: row 0 is the top, col 0 the left edge. Rows
//! above the grid (negative) are open space, not walls: pieces spawn partly
//! there. Only the left, right and bottom edges are hard boundaries.

use thiserror::Error;

use crate::error::ConfigError;
use crate::piece::Piece;
use crate::types::{Cell, Color, MAX_GRID_SIDE};

/// A lock that would have written a cell above the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("piece locked above the visible grid (row {row})")]
pub struct TopOut {
    pub row: i32,
}

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

/// Number of cells in a `width x height` grid, if those dimensions are usable.
///
/// Each side must be in `1..=MAX_GRID_SIDE`.
pub(crate) fn cell_count(width: usize, height: usize) -> Result<usize, ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::InvalidDimensions { width, height });
    }
    let too_large = ConfigError::GridTooLarge {
        width,
        height,
        max: MAX_GRID_SIDE,
    };
    if width > MAX_GRID_SIDE || height > MAX_GRID_SIDE {
        return Err(too_large);
    }
    width.checked_mul(height).ok_or(too_large)
}

impl Grid {
    /// Create an empty grid. Each side must be in `1..=MAX_GRID_SIDE`.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![None; len],
        })
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at `(row, col)`
    /// Returns None if outside the visible grid
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`
    /// Returns false if outside the visible grid
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Inside the side walls and above the floor. There is no ceiling.
    pub fn is_inside_bounds(&self, row: i32, col: i32) -> bool {
        col >= 0 && (col as usize) < self.width && (row < 0 || (row as usize) < self.height)
    }

    /// True iff the cell holds a color. Rows above the grid are never occupied.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(Option::is_some))
            .unwrap_or(false)
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    /// Commit a piece's occupied cells in its color.
    ///
    /// Aborts without touching any cell if the piece reaches above row 0.
    pub fn lock(&mut self, piece: &Piece) -> Result<(), TopOut> {
        let cells = piece.cells();
        if let Some(&(row, _)) = cells.iter().find(|&&(row, _)| row < 0) {
            return Err(TopOut { row });
        }

        let color = piece.color();
        for &(row, col) in &cells {
            self.set(row, col, Some(color));
        }
        Ok(())
    }

    /// Remove every full row, compacting the rest downward.
    ///
    /// Rows are scanned bottom to top with a read and a write cursor; each
    /// surviving row is copied down over the removed ones and the vacated
    /// rows at the top are emptied. Returns the number of rows removed.
    pub fn clear_completed_lines(&mut self) -> usize {
        let width = self.width;
        let mut write_row = self.height;
        let mut cleared = 0;

        for read_row in (0..self.height).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        self.cells[..write_row * width].fill(None);
        cleared
    }

    /// Empty every cell.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Fill a whole row with `color`, except the listed columns.
    pub fn fill_row_except(&mut self, row: usize, color: Color, holes: &[usize]) {
        for col in 0..self.width {
            if !holes.contains(&col) {
                self.set(row as i32, col as i32, Some(color));
            }
        }
    }
}
