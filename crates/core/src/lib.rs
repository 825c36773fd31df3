//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block game rules: the grid, pieces and
//! their rotation states, collision detection, line clearing, scoring and the
//! tick-driven state machine. It has no dependency on terminals, input
//! devices or clocks, which makes it:
//!
//! - **Deterministic**: Same seed and the same calls produce identical games
//! - **Testable**: Time is just a number passed to [`GameEngine::tick`]
//! - **Portable**: Any renderer can consume a [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`shapes`]: The seven kinds and their rotation-state matrices
//! - [`piece`]: A falling piece (kind, anchor, rotation index)
//! - [`grid`]: Occupancy matrix, locking and line clearing
//! - [`collision`]: Piece vs. walls, floor and locked cells
//! - [`scoring`]: Points, levels and the gravity curve
//! - [`rng`]: Piece kind generation
//! - [`config`]: Engine configuration and validation
//! - [`engine`]: The state machine tying it all together
//! - [`snapshot`]: Read-only view and the [`Renderer`] trait
//!
//! # Rules
//!
//! - Pieces spawn at column 3, row 0 on the default 10x20 grid
//! - Rotation cycles through each kind's listed states, with no wall kicks
//! - A piece locks when gravity cannot move it down
//! - Clearing 1/2/3/4 lines scores 100/300/500/800 times the level
//! - Every 1000 points is a level; gravity speeds up 10% per level
//!
//! # Example
//!
//! ```
//! use blockfall_core::{EngineConfig, GameEngine, Phase};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameEngine::new(EngineConfig::default(), 12345).unwrap();
//! game.start(0);
//! assert_eq!(game.phase(), Phase::Falling);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! // One gravity step after the interval has passed.
//! game.tick(1001);
//! assert_eq!(game.score(), 0);
//! ```

pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::would_collide;
pub use config::EngineConfig;
pub use engine::{GameEngine, Phase, TickOutcome};
pub use error::ConfigError;
pub use grid::{Grid, TopOut};
pub use piece::Piece;
pub use rng::{KindGenerator, KindSequence, SimpleRng};
pub use scoring::{ScoreUpdate, ScoringEngine};
pub use shapes::{definition, ShapeDefinition, ShapeMatrix};
pub use snapshot::{GameSnapshot, Renderer};
