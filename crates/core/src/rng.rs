//! RNG module - piece kind generation
//!
//! Pieces are drawn uniformly from the seven kinds. Generation sits behind
//! the [`KindGenerator`] trait so the engine can be driven by a seeded RNG in
//! play and by a fixed script in tests.

use crate::types::PieceKind;

/// Source of the next piece kind.
pub trait KindGenerator {
    fn next_kind(&mut self) -> PieceKind;
}

/// Seeded 32-bit linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Seed 0 is remapped so every seed yields a usable stream.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in `[0, max)`, taken from the high bits (the low bits
    /// of an LCG have short periods).
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl KindGenerator for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Replays a fixed list of kinds, cycling forever.
#[derive(Debug, Clone)]
pub struct KindSequence {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl KindSequence {
    /// Create a sequence. An empty list falls back to `[PieceKind::O]`.
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let mut kinds: Vec<PieceKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            kinds.push(PieceKind::O);
        }
        Self { kinds, index: 0 }
    }
}

impl KindGenerator for KindSequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}
