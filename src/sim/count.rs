//! Soldier count sampling per difficulty tier
//!
//! The session asks for a count once per round and threads that single value
//! through layout, simulation and logging.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::Difficulty;

/// Source of soldier counts for new rounds
pub trait CountProvider {
    /// Draw a count from the tier's inclusive range
    fn sample(&mut self, difficulty: Difficulty) -> usize;
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Seeded PCG count provider (same seed, same sequence of counts)
#[derive(Debug, Clone)]
pub struct SeededCounts {
    rng: Pcg32,
}

impl SeededCounts {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RngState::new(seed).to_rng(),
        }
    }
}

impl CountProvider for SeededCounts {
    fn sample(&mut self, difficulty: Difficulty) -> usize {
        self.rng.random_range(difficulty.count_range())
    }
}

/// Provider that replays a fixed list of counts, cycling when exhausted
///
/// With an empty list it always answers the tier's smallest count.
#[derive(Debug, Clone)]
pub struct FixedCounts {
    counts: Vec<usize>,
    next: usize,
}

impl FixedCounts {
    pub fn new(counts: Vec<usize>) -> Self {
        Self { counts, next: 0 }
    }
}

impl CountProvider for FixedCounts {
    fn sample(&mut self, difficulty: Difficulty) -> usize {
        if self.counts.is_empty() {
            return *difficulty.count_range().start();
        }
        let count = self.counts[self.next % self.counts.len()];
        self.next += 1;
        count
    }
}
