//! Number-sequence puzzles: show the first terms, ask for the next one

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rule that generates a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequencePattern {
    /// `s, s+d, s+2d, …`
    Arithmetic { start: i64, step: i64 },
    /// `s, s·r, s·r², …`
    Geometric { start: i64, ratio: i64 },
    /// `(s)², (s+1)², …`
    Squares { base: i64 },
    /// Each term is the sum of the two before it
    Fibonacci { first: i64, second: i64 },
}

impl SequencePattern {
    /// Term at zero-based index `n`
    pub fn term(&self, n: usize) -> i64 {
        match *self {
            SequencePattern::Arithmetic { start, step } => start + step * n as i64,
            SequencePattern::Geometric { start, ratio } => start.saturating_mul(ratio.saturating_pow(n as u32)),
            SequencePattern::Squares { base } => {
                let v = base + n as i64;
                v * v
            }
            SequencePattern::Fibonacci { first, second } => {
                let (mut a, mut b) = (first, second);
                for _ in 0..n {
                    let next = a.saturating_add(b);
                    a = b;
                    b = next;
                }
                a
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SequencePattern::Arithmetic { .. } => "arithmetic",
            SequencePattern::Geometric { .. } => "geometric",
            SequencePattern::Squares { .. } => "squares",
            SequencePattern::Fibonacci { .. } => "fibonacci",
        }
    }
}

/// Shown terms plus the hidden next term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencePuzzle {
    pub pattern: SequencePattern,
    pub sequence: Vec<i64>,
    pub answer: i64,
}

/// Pick a pattern allowed at `level` and expand `length` terms of it (at least 2)
///
/// Patterns unlock progressively: geometric from level 3, squares from 5, fibonacci from 7.
pub fn generate_sequence<R: Rng + ?Sized>(rng: &mut R, level: u32, length: usize) -> SequencePuzzle {
    let level = level.max(1);
    let length = length.max(2);

    let unlocked = match level {
        1..=2 => 1,
        3..=4 => 2,
        5..=6 => 3,
        _ => 4,
    };

    let pattern = match rng.random_range(0..unlocked) {
        0 => SequencePattern::Arithmetic {
            start: rng.random_range(1..=10),
            step: rng.random_range(1..=(level as i64 + 2).min(20)),
        },
        1 => SequencePattern::Geometric {
            start: rng.random_range(1..=3),
            ratio: if level <= 5 { 2 } else { rng.random_range(2..=3) },
        },
        2 => SequencePattern::Squares {
            base: rng.random_range(1..=3),
        },
        _ => SequencePattern::Fibonacci {
            first: rng.random_range(1..=3),
            second: rng.random_range(1..=3),
        },
    };

    let sequence: Vec<i64> = (0..length).map(|n| pattern.term(n)).collect();
    let answer = pattern.term(length);

    SequencePuzzle {
        pattern,
        sequence,
        answer,
    }
}
