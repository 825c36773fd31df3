//! Engine configuration
//!
//! Every tunable the engine reads lives here. [`EngineConfig::default`] uses
//! the constants from `blockfall-types`; callers override fields and the
//! engine validates the whole set once at construction.

use crate::error::ConfigError;
use crate::grid;
use crate::types::{
    BASE_DROP_MS, GRID_HEIGHT, GRID_WIDTH, LEVEL_SCORE_STEP, LINE_SCORES, MIN_DROP_MS,
    SPEEDUP_FACTOR,
};

/// Widest rotation state in the catalog (the flat I piece).
const WIDEST_SHAPE: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Grid width in columns.
    pub width: usize,
    /// Grid height in rows.
    pub height: usize,
    /// Gravity interval at level 1, in milliseconds.
    pub base_drop_interval_ms: u32,
    /// Lower clamp for the gravity interval, in milliseconds.
    pub min_drop_interval_ms: u32,
    /// Points per simultaneous clear, indexed by line count (index 0 unused).
    pub line_scores: [u32; 5],
    /// Score needed per level.
    pub level_score_step: u32,
    /// Interval multiplier per level above 1.
    pub speedup_factor: f64,
    /// Row the piece anchor spawns on; negative spawns partly above the grid.
    pub spawn_row: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            base_drop_interval_ms: BASE_DROP_MS,
            min_drop_interval_ms: MIN_DROP_MS,
            line_scores: LINE_SCORES,
            level_score_step: LEVEL_SCORE_STEP,
            speedup_factor: SPEEDUP_FACTOR,
            spawn_row: 0,
        }
    }
}

impl EngineConfig {
    /// Check every field; the first problem found is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        grid::cell_count(self.width, self.height)?;
        if self.base_drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        if self.min_drop_interval_ms > self.base_drop_interval_ms {
            return Err(ConfigError::MinIntervalAboveBase {
                min: self.min_drop_interval_ms,
                base: self.base_drop_interval_ms,
            });
        }
        if !(self.speedup_factor > 0.0 && self.speedup_factor <= 1.0) {
            return Err(ConfigError::InvalidSpeedup(self.speedup_factor));
        }
        if self.level_score_step == 0 {
            return Err(ConfigError::ZeroLevelStep);
        }
        Ok(())
    }

    /// Spawn anchor column: the widest shape centered, left-biased.
    ///
    /// Column 3 on the default 10-wide grid.
    pub fn spawn_column(&self) -> i32 {
        (self.width.saturating_sub(WIDEST_SHAPE) / 2) as i32
    }
}
