//! RNG module - 7-bag random piece generation
//!
//! The bag holds the kinds not yet drawn in the current cycle. Each draw
//! picks one of them uniformly and removes it; an empty bag is refilled with
//! all seven kinds on the next draw.
//!
//! Also provides a simple LCG for deterministic testing.

use serde::{Deserialize, Serialize};

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Resume from a state returned by [`SimpleRng::state`]
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // Use the high bits; the low bits of an LCG have short periods
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Serializable bag contents, used by snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagState {
    pub remaining: Vec<PieceKind>,
    pub rng: u32,
}

/// 7-bag piece generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SevenBag {
    /// Kinds left in the current cycle
    remaining: Vec<PieceKind>,
    rng: SimpleRng,
}

impl SevenBag {
    /// Create a new full bag with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            remaining: PieceKind::ALL.to_vec(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Rebuild a bag from saved contents
    pub fn from_state(state: &BagState) -> Self {
        Self {
            remaining: state.remaining.clone(),
            rng: SimpleRng::from_state(state.rng),
        }
    }

    pub fn state(&self) -> BagState {
        BagState {
            remaining: self.remaining.clone(),
            rng: self.rng.state(),
        }
    }

    /// Draw the next piece
    pub fn draw(&mut self) -> PieceKind {
        if self.remaining.is_empty() {
            self.remaining = PieceKind::ALL.to_vec();
        }
        let i = self.rng.next_range(self.remaining.len() as u32) as usize;
        self.remaining.remove(i)
    }

    /// Kinds not yet drawn this cycle
    pub fn remaining(&self) -> &[PieceKind] {
        &self.remaining
    }

    /// A fresh seed derived from this bag's RNG, for restarting
    pub fn next_seed(&mut self) -> u32 {
        self.rng.next_u32()
    }
}

impl Default for SevenBag {
    fn default() -> Self {
        Self::new(1)
    }
}
