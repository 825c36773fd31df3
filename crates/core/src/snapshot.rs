//! Snapshot module - what a renderer is allowed to see
//!
//! A snapshot borrows the engine's grid, so it can only exist between engine
//! calls. Renderers never observe a half-applied tick.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot<'a> {
    pub grid: &'a Grid,
    pub current: Option<Piece>,
    pub next: Option<PieceKind>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

/// Turns snapshots into output (pixels, terminal cells, ...).
pub trait Renderer {
    type Error;

    fn render(&mut self, snapshot: &GameSnapshot<'_>) -> Result<(), Self::Error>;
}
