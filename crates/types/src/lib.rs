//! Shared types module - plain data and default constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is dependency-free data, so it can be used by the core
//! engine, the terminal renderer and the input mapper alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn anchor**: column 3, row 0 on the default grid
//!
//! # Timing and Scoring Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Driver cadence (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `MIN_DROP_MS` | 100 | Lower clamp for the gravity interval |
//! | `LEVEL_SCORE_STEP` | 1000 | Score needed per level |
//! | `SPEEDUP_FACTOR` | 0.9 | Interval multiplier per level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! let kind = PieceKind::ALL[2];
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.color(), Color::Purple);
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: usize = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: usize = 20;

/// Largest accepted grid width or height.
///
/// Keeps every grid coordinate an `i32` and every drawn cell inside a
/// `u16` terminal column.
pub const MAX_GRID_SIDE: usize = 1024;

/// Fixed driver interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u64 = 16;

/// Base gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity never gets faster than this, whatever the level.
pub const MIN_DROP_MS: u32 = 100;

/// Score needed to advance one level.
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// Gravity interval multiplier applied per level above 1.
pub const SPEEDUP_FACTOR: f64 = 0.9;

/// Line clear scoring table
///
/// Base points for clearing N lines at level 1:
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
///
/// Points are multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Tetromino piece kinds
///
/// The seven standard pieces, in the order of the shape catalog:
///
/// - **I**: Four in a line (cyan)
/// - **O**: 2x2 square (yellow)
/// - **T**: T-shape (purple)
/// - **L**: L-shape (orange)
/// - **J**: J-shape (blue)
/// - **Z**: Z-shape (red)
/// - **S**: S-shape (green)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::Z => 5,
            PieceKind::S => 6,
        }
    }

    /// Fixed display color of this kind.
    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::T => Color::Purple,
            PieceKind::L => Color::Orange,
            PieceKind::J => Color::Blue,
            PieceKind::Z => Color::Red,
            PieceKind::S => Color::Green,
        }
    }
}

/// Color token carried by every occupied grid cell.
///
/// Renderers decide what each token looks like; the engine only guarantees
/// that a locked cell always holds one of these seven values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Orange,
    Blue,
    Red,
    Green,
}

/// Discrete actions an input source can request.
///
/// Anything a raw input event does not map to is simply not an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Advance to the next rotation state (no wall kicks)
    Rotate,
    /// Move piece one row down
    SoftDrop,
    /// Start over after game over
    Reset,
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a locked piece of that color
pub type Cell = Option<Color>;
