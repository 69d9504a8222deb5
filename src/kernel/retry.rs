//! Bounded generate-and-verify loop shared by the grid generators

use serde::{Deserialize, Serialize};

/// Whether a generator met its request or fell back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Fidelity {
    /// A sampled candidate passed validation
    #[default]
    Full,
    /// Retry budget ran out; the deterministic fallback was returned
    Degraded,
}

impl Fidelity {
    pub fn is_degraded(&self) -> bool {
        *self == Fidelity::Degraded
    }
}

/// A generator result plus how it was obtained
#[derive(Debug, Clone, PartialEq)]
pub struct Generated<T> {
    pub value: T,
    /// Candidates sampled (equals the budget on fallback)
    pub attempts: u32,
    pub fidelity: Fidelity,
}

/// Sample candidates until one validates or `max_attempts` is spent
///
/// `fallback` must itself be valid; it is only called when every attempt failed.
pub fn generate_verified<R, T, S, V, F>(
    rng: &mut R,
    max_attempts: u32,
    mut sample: S,
    mut accept: V,
    fallback: F,
) -> Generated<T>
where
    R: ?Sized,
    S: FnMut(&mut R) -> T,
    V: FnMut(&T) -> bool,
    F: FnOnce() -> T,
{
    for attempt in 1..=max_attempts {
        let candidate = sample(rng);
        if accept(&candidate) {
            return Generated {
                value: candidate,
                attempts: attempt,
                fidelity: Fidelity::Full,
            };
        }
    }

    Generated {
        value: fallback(),
        attempts: max_attempts,
        fidelity: Fidelity::Degraded,
    }
}
