//! Seeded random source handed to every generator

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Concrete generator used for rounds
pub type RoundRng = Pcg32;

/// Session seed plus round counter; each round gets its own PCG stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSeed {
    pub seed: u64,
    pub round: u64,
}

impl RoundSeed {
    pub fn new(seed: u64) -> Self {
        Self { seed, round: 0 }
    }

    /// Generator for the current round
    pub fn to_rng(&self) -> RoundRng {
        Pcg32::new(self.seed, self.round)
    }

    /// Seed state for the following round
    pub fn next_round(&self) -> Self {
        Self {
            seed: self.seed,
            round: self.round.wrapping_add(1),
        }
    }
}
