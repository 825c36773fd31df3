//! Engine module - the tick-driven game state machine
//!
//! This module ties together the grid, pieces, collision detection, piece
//! generation and scoring. The engine has exactly two entry points:
//!
//! - [`GameEngine::tick`] is called by the driver at a fixed cadence with a
//!   monotonic timestamp in milliseconds. It applies gravity and, when the
//!   piece cannot fall, locks it, clears lines, scores and spawns the next
//!   piece, all within the same call.
//! - [`GameEngine::apply_action`] is called for every discrete input action.
//!
//! Both take `&mut self`, so calls are serialized by construction and every
//! call either completes fully or changes nothing.
//!
//! # Phases
//!
//! ```text
//! Spawning -> Falling -> (lock -> clear lines -> Spawning) | GameOver
//! ```
//!
//! Locking and line clearing are transient: they never outlive the tick that
//! triggers them, so they are not observable phases.

use crate::collision::would_collide;
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::{KindGenerator, SimpleRng};
use crate::scoring::ScoringEngine;
use crate::shapes::random_kind;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, PieceKind};

/// Observable state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No falling piece; the next tick spawns one.
    Spawning,
    /// A piece is falling under gravity and accepts input.
    Falling,
    /// Terminal until [`GameAction::Reset`].
    GameOver,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing changed (gravity interval not yet elapsed, or game over).
    Idle,
    /// A new piece was spawned.
    Spawned,
    /// The falling piece moved down one row.
    Fell,
    /// The piece locked, `lines` rows were cleared and the next piece spawned.
    Locked { lines: usize },
    /// The game ended during this tick.
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine<G = SimpleRng> {
    config: EngineConfig,
    scoring: ScoringEngine,
    generator: G,
    grid: Grid,
    current: Option<Piece>,
    next: Option<PieceKind>,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    last_drop_ms: u64,
}

impl GameEngine<SimpleRng> {
    /// Create a game with uniformly random pieces from `seed`.
    pub fn new(config: EngineConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::with_generator(config, SimpleRng::new(seed))
    }
}

impl<G: KindGenerator> GameEngine<G> {
    /// Create a game drawing pieces from `generator`.
    pub fn with_generator(config: EngineConfig, generator: G) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        let scoring = ScoringEngine::new(&config);
        let drop_interval_ms = config.base_drop_interval_ms;

        Ok(Self {
            config,
            scoring,
            generator,
            grid,
            current: None,
            next: None,
            phase: Phase::Spawning,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms,
            last_drop_ms: 0,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total rows cleared this session.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn last_drop_ms(&self) -> u64 {
        self.last_drop_ms
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn next(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for setting up positions before or between moves.
    ///
    /// Bypasses every engine check: callers must not leave the falling piece
    /// overlapping locked cells.
    #[doc(hidden)]
    pub fn grid_mut_for_setup(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Read-only view for a renderer.
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            grid: &self.grid,
            current: self.current,
            next: self.next,
            score: self.score,
            level: self.level,
            lines: self.lines,
            game_over: self.game_over(),
        }
    }

    /// Spawn the first piece right away instead of on the first tick.
    pub fn start(&mut self, now_ms: u64) -> TickOutcome {
        match self.phase {
            Phase::Spawning => self.spawn_piece(now_ms),
            _ => TickOutcome::Idle,
        }
    }

    /// Advance the game to `now_ms`.
    ///
    /// Gravity applies once the time since the last drop strictly exceeds the
    /// drop interval; the drop timestamp is then refreshed whether the piece
    /// fell or locked.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        match self.phase {
            Phase::GameOver => TickOutcome::Idle,
            Phase::Spawning => self.spawn_piece(now_ms),
            Phase::Falling => {
                let Some(mut piece) = self.current else {
                    return self.spawn_piece(now_ms);
                };

                if now_ms.saturating_sub(self.last_drop_ms) <= self.drop_interval_ms as u64 {
                    return TickOutcome::Idle;
                }

                let outcome = if would_collide(&piece, &self.grid, 0, 1) {
                    self.lock_current(piece, now_ms)
                } else {
                    piece.translate(0, 1);
                    self.current = Some(piece);
                    TickOutcome::Fell
                };
                self.last_drop_ms = now_ms;
                outcome
            }
        }
    }

    /// Apply a discrete input action.
    ///
    /// Returns whether the action took effect. Moves and rotations that would
    /// collide are silently rejected; `Reset` only works after game over and
    /// every other action is ignored then.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (self.phase, action) {
            (Phase::GameOver, GameAction::Reset) => {
                self.reset();
                true
            }
            (Phase::GameOver, _) | (_, GameAction::Reset) => false,
            (_, GameAction::MoveLeft) => self.try_move(-1, 0),
            (_, GameAction::MoveRight) => self.try_move(1, 0),
            (_, GameAction::SoftDrop) => self.try_move(0, 1),
            (_, GameAction::Rotate) => self.try_rotate(),
        }
    }

    /// Try to move the current piece
    pub(crate) fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        if would_collide(piece, &self.grid, dx, dy) {
            return false;
        }
        piece.translate(dx, dy);
        true
    }

    /// Rotate in place, reverting the rotation index if the new state collides.
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        let previous = piece.rotation_index();
        piece.rotate();
        if would_collide(piece, &self.grid, 0, 0) {
            piece.set_rotation_index(previous);
            return false;
        }
        true
    }

    /// Promote next to current, draw a fresh next, and check the spawn.
    fn spawn_piece(&mut self, now_ms: u64) -> TickOutcome {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => random_kind(&mut self.generator),
        };
        self.next = Some(random_kind(&mut self.generator));
        self.last_drop_ms = now_ms;

        let piece = Piece::new(kind, self.config.spawn_column(), self.config.spawn_row);
        if would_collide(&piece, &self.grid, 0, 0) {
            log::info!("spawn of {:?} blocked; game over at score {}", kind, self.score);
            self.end_game();
            return TickOutcome::GameOver;
        }

        log::debug!("spawned {:?} at ({}, {})", kind, piece.x, piece.y);
        self.current = Some(piece);
        self.phase = Phase::Falling;
        TickOutcome::Spawned
    }

    /// Lock `piece`, clear lines, score, then spawn the next piece.
    fn lock_current(&mut self, piece: Piece, now_ms: u64) -> TickOutcome {
        if let Err(top_out) = self.grid.lock(&piece) {
            log::info!("{}; game over at score {}", top_out, self.score);
            self.end_game();
            return TickOutcome::GameOver;
        }
        self.current = None;
        log::debug!("locked {:?} at ({}, {})", piece.kind(), piece.x, piece.y);

        let lines = self.grid.clear_completed_lines();
        if lines > 0 {
            self.apply_line_clear(lines);
        }

        match self.spawn_piece(now_ms) {
            TickOutcome::GameOver => TickOutcome::GameOver,
            _ => TickOutcome::Locked { lines },
        }
    }

    fn apply_line_clear(&mut self, lines: usize) {
        let update = self.scoring.score(lines, self.level, self.score);
        self.score = self.score.saturating_add(update.delta);
        self.lines = self.lines.saturating_add(lines as u32);
        log::debug!("cleared {} line(s) for {} points", lines, update.delta);

        if let Some(interval) = update.drop_interval_ms {
            log::debug!(
                "level {} -> {}, drop interval {}ms",
                self.level,
                update.level,
                interval
            );
            self.drop_interval_ms = interval;
        }
        self.level = update.level;
    }

    fn end_game(&mut self) {
        self.current = None;
        self.phase = Phase::GameOver;
    }

    /// Back to a fresh session. The piece generator keeps its state.
    fn reset(&mut self) {
        log::info!("reset after game over (final score {})", self.score);
        self.grid.reset();
        self.current = None;
        self.next = None;
        self.phase = Phase::Spawning;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = self.config.base_drop_interval_ms;
        self.last_drop_ms = 0;
    }
}
