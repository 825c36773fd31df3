//! Scoring module - line-clear points, levels and the speed curve
//!
//! Rules:
//! - A clear of N simultaneous lines is worth `line_scores[N] * level`.
//! - The level follows the cumulative score: `score / level_score_step + 1`.
//! - Gravity is `base * speedup^(level - 1)`, never below the minimum
//!   interval. It is only recomputed when the level changes.

use crate::config::EngineConfig;

/// Outcome of scoring one line clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    /// Points awarded for this clear.
    pub delta: u32,
    /// Level after adding `delta`.
    pub level: u32,
    /// New gravity interval, present only when the level changed.
    pub drop_interval_ms: Option<u32>,
}

/// Pure scoring rules, parameterized by the engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringEngine {
    line_scores: [u32; 5],
    level_score_step: u32,
    base_drop_interval_ms: u32,
    min_drop_interval_ms: u32,
    speedup_factor: f64,
}

impl ScoringEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            line_scores: config.line_scores,
            level_score_step: config.level_score_step.max(1),
            base_drop_interval_ms: config.base_drop_interval_ms,
            min_drop_interval_ms: config.min_drop_interval_ms,
            speedup_factor: config.speedup_factor,
        }
    }

    /// Points for clearing `lines` rows at `level`; 0 for counts outside 1..=4.
    pub fn line_points(&self, lines: usize, level: u32) -> u32 {
        if lines == 0 || lines >= self.line_scores.len() {
            return 0;
        }
        self.line_scores[lines].saturating_mul(level)
    }

    /// Level reached at a cumulative score.
    pub fn level_for_score(&self, score: u32) -> u32 {
        score / self.level_score_step + 1
    }

    /// Gravity interval for a level, clamped to the minimum.
    pub fn drop_interval_ms(&self, level: u32) -> u32 {
        let exponent = level.saturating_sub(1).min(i32::MAX as u32) as i32;
        let interval = self.base_drop_interval_ms as f64 * self.speedup_factor.powi(exponent);
        (interval.round() as u32).max(self.min_drop_interval_ms)
    }

    /// Score a clear of `lines` rows at `level`, given the score before it.
    pub fn score(&self, lines: usize, level: u32, score_before: u32) -> ScoreUpdate {
        let delta = self.line_points(lines, level);
        let new_level = self.level_for_score(score_before.saturating_add(delta));
        let drop_interval_ms = if new_level != level {
            Some(self.drop_interval_ms(new_level))
        } else {
            None
        };

        ScoreUpdate {
            delta,
            level: new_level,
            drop_interval_ms,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
