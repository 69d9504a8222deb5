//! Multiple-choice option sets with guaranteed distinctness
//!
//! Distractors come from a caller-supplied perturbation of the correct answer. When that
//! keeps colliding, the set is topped up from a deterministic padding sequence, so the
//! output size never depends on luck.

use rand::Rng;
use rand::seq::SliceRandom;

/// Exactly `count` distinct options, `correct` among them once, in shuffled order
///
/// `neighbor_fn` is tried up to `max_attempts` times. `fallback_fn(i)` for i = 1, 2, … must
/// eventually produce `count - 1` values distinct from `correct` and from each other.
/// A `count` of 0 is treated as 1.
pub fn synthesize_options<R, T, N, F>(
    rng: &mut R,
    correct: T,
    count: usize,
    mut neighbor_fn: N,
    mut fallback_fn: F,
    max_attempts: u32,
) -> Vec<T>
where
    R: Rng + ?Sized,
    T: Clone + PartialEq,
    N: FnMut(&mut R, &T) -> T,
    F: FnMut(usize) -> T,
{
    let count = count.max(1);
    let mut options = Vec::with_capacity(count);
    options.push(correct.clone());

    let mut attempts = 0;
    while options.len() < count && attempts < max_attempts {
        attempts += 1;
        let candidate = neighbor_fn(rng, &correct);
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    if options.len() < count {
        log::debug!(
            "Options: {} of {} after {} draws, padding deterministically",
            options.len(),
            count,
            attempts
        );
    }

    let mut i = 1;
    while options.len() < count {
        let candidate = fallback_fn(i);
        if !options.contains(&candidate) {
            options.push(candidate);
        }
        i += 1;
    }

    options.shuffle(rng);
    options
}

/// Distractor `correct ± d` with `1 <= d <= spread`
pub fn numeric_neighbor<R: Rng + ?Sized>(spread: i64) -> impl FnMut(&mut R, &i64) -> i64 {
    let spread = spread.max(1);
    move |rng: &mut R, correct: &i64| {
        let correct = *correct;
        let delta = rng.random_range(1..=spread);
        if rng.random_bool(0.5) {
            correct.saturating_sub(delta)
        } else {
            correct.saturating_add(delta)
        }
    }
}

/// Padding sequence `correct + i·step`
pub fn numeric_padding(correct: i64, step: i64) -> impl FnMut(usize) -> i64 {
    let step = if step == 0 { 1 } else { step };
    move |i: usize| correct.wrapping_add(step.wrapping_mul(i as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::NUMERIC_SPREAD;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn assert_well_formed(options: &[i64], correct: i64, count: usize) {
        assert_eq!(options.len(), count);
        assert_eq!(options.iter().filter(|&&o| o == correct).count(), 1);
        for (i, a) in options.iter().enumerate() {
            for b in &options[i + 1..] {
                assert_ne!(a, b, "duplicate option in {options:?}");
            }
        }
    }

    #[test]
    fn test_counts_two_through_seven() {
        let mut rng = Pcg32::seed_from_u64(77);
        for count in 2..=7 {
            for _ in 0..1000 {
                let correct = rng.random_range(-50..50);
                let options = synthesize_options(
                    &mut rng,
                    correct,
                    count,
                    numeric_neighbor(NUMERIC_SPREAD),
                    numeric_padding(correct, 11),
                    50,
                );
                assert_well_formed(&options, correct, count);
            }
        }
    }

    #[test]
    fn test_colliding_neighbor_pads_deterministically() {
        let mut rng = Pcg32::seed_from_u64(3);
        // Neighbour can only ever produce the correct answer
        let mut options = synthesize_options(&mut rng, 10, 4, |_, c: &i64| *c, numeric_padding(10, 5), 20);
        assert_well_formed(&options, 10, 4);
        options.sort();
        assert_eq!(options, vec![10, 15, 20, 25]);
    }

    #[test]
    fn test_padding_skips_values_already_drawn() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut options = synthesize_options(&mut rng, 0, 3, |_, _: &i64| 1, |i| i as i64, 5);
        options.sort();
        assert_eq!(options, vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_attempts_still_fills() {
        let mut rng = Pcg32::seed_from_u64(8);
        let options = synthesize_options(&mut rng, 100, 5, numeric_neighbor(3), numeric_padding(100, 7), 0);
        assert_well_formed(&options, 100, 5);
    }

    #[test]
    fn test_zero_count_yields_only_correct() {
        let mut rng = Pcg32::seed_from_u64(8);
        let options = synthesize_options(&mut rng, 4, 0, numeric_neighbor(3), numeric_padding(4, 1), 10);
        assert_eq!(options, vec![4]);
    }

    #[test]
    fn test_correct_position_is_uniform() {
        let mut rng = Pcg32::seed_from_u64(1234);
        let count = 4;
        let trials = 4000;
        let mut hits = [0u32; 4];
        for _ in 0..trials {
            let options = synthesize_options(
                &mut rng,
                42,
                count,
                numeric_neighbor(NUMERIC_SPREAD),
                numeric_padding(42, 11),
                50,
            );
            let idx = options.iter().position(|&o| o == 42).unwrap();
            hits[idx] += 1;
        }

        let expected = trials as f64 / count as f64;
        let chi_sq: f64 = hits
            .iter()
            .map(|&h| {
                let d = h as f64 - expected;
                d * d / expected
            })
            .sum();
        // df = 3; p = 0.001 critical value is 16.27
        assert!(chi_sq < 25.0, "chi-square {chi_sq:.2} for {hits:?}");
    }

    proptest! {
        #[test]
        fn options_always_distinct(seed in any::<u64>(), correct in -1000_i64..1000, count in 1_usize..=7, spread in 1_i64..4) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let options = synthesize_options(
                &mut rng,
                correct,
                count,
                numeric_neighbor(spread),
                numeric_padding(correct, spread + 1),
                10,
            );
            prop_assert_eq!(options.len(), count);
            prop_assert_eq!(options.iter().filter(|&&o| o == correct).count(), 1);
            let mut sorted = options.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), count);
        }
    }
}
