//! Memory trails: a self-avoiding walk the player watches and then repeats

use rand::Rng;
use rand::seq::IndexedRandom;

use super::grid::Point;
use super::retry::{Generated, generate_verified};

const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Random self-avoiding walk of `length` cells on a `size`×`size` board
///
/// Each attempt restarts from a random cell and gives up on a dead end. The fallback is a
/// serpentine walk, which is valid for every length up to `size²`.
pub fn generate_trail<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    length: usize,
    diagonal_moves: bool,
    max_attempts: u32,
) -> Generated<Vec<Point>> {
    let length = length.min(size * size);

    let result = generate_verified(
        rng,
        max_attempts,
        |rng| random_walk(rng, size, length, diagonal_moves),
        |walk| walk.len() == length,
        || serpentine_trail(size, length),
    );

    if result.fidelity.is_degraded() {
        log::warn!(
            "Trail {}x{} length {}: walks kept dead-ending, using serpentine",
            size,
            size,
            length
        );
    }

    result
}

fn random_walk<R: Rng + ?Sized>(rng: &mut R, size: usize, length: usize, diagonal_moves: bool) -> Vec<Point> {
    let mut walk = Vec::with_capacity(length);
    if length == 0 {
        return walk;
    }

    let mut visited = vec![false; size * size];
    let mut cur = Point::new(rng.random_range(0..size as i32), rng.random_range(0..size as i32));
    visited[cur.index(size)] = true;
    walk.push(cur);

    while walk.len() < length {
        let moves: Vec<Point> = ORTHOGONAL
            .iter()
            .chain(DIAGONAL.iter().filter(|_| diagonal_moves))
            .map(|&(dr, dc)| cur.offset(dr, dc))
            .filter(|p| p.in_bounds(size) && !visited[p.index(size)])
            .collect();

        match moves.choose(rng) {
            Some(&next) => {
                visited[next.index(size)] = true;
                walk.push(next);
                cur = next;
            }
            None => break,
        }
    }

    walk
}

/// Row-by-row walk that alternates direction, first `length` cells
pub fn serpentine_trail(size: usize, length: usize) -> Vec<Point> {
    (0..size as i32)
        .flat_map(|row| {
            let cols: Vec<i32> = if row % 2 == 0 {
                (0..size as i32).collect()
            } else {
                (0..size as i32).rev().collect()
            };
            cols.into_iter().map(move |col| Point::new(row, col))
        })
        .take(length)
        .collect()
}

/// In bounds, no repeated cells, every step to a neighbouring cell
pub fn is_valid_trail(trail: &[Point], size: usize, diagonal_moves: bool) -> bool {
    if !trail.iter().all(|p| p.in_bounds(size)) {
        return false;
    }
    for (i, a) in trail.iter().enumerate() {
        if trail[i + 1..].contains(a) {
            return false;
        }
    }
    trail.windows(2).all(|pair| {
        let dr = (pair[0].row - pair[1].row).abs();
        let dc = (pair[0].col - pair[1].col).abs();
        if diagonal_moves {
            dr.max(dc) == 1
        } else {
            dr + dc == 1
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::difficulty::parameters_for;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_serpentine_shape() {
        let trail = serpentine_trail(3, 9);
        assert_eq!(trail[2], Point::new(0, 2));
        assert_eq!(trail[3], Point::new(1, 2));
        assert_eq!(trail[5], Point::new(1, 0));
        assert_eq!(trail[6], Point::new(2, 0));
        assert!(is_valid_trail(&trail, 3, false));
    }

    #[test]
    fn test_trails_for_every_level() {
        let mut rng = Pcg32::seed_from_u64(31);
        for level in 1..=30 {
            let p = parameters_for(level);
            let trail = generate_trail(&mut rng, p.trail_grid_size, p.trail_length, p.diagonal_moves, 50);
            assert_eq!(trail.value.len(), p.trail_length);
            assert!(is_valid_trail(&trail.value, p.trail_grid_size, p.diagonal_moves));
        }
    }

    #[test]
    fn test_zero_budget_uses_serpentine() {
        let mut rng = Pcg32::seed_from_u64(31);
        let trail = generate_trail(&mut rng, 4, 10, false, 0);
        assert!(trail.fidelity.is_degraded());
        assert_eq!(trail.value, serpentine_trail(4, 10));
    }

    #[test]
    fn test_length_clamped_to_board() {
        let mut rng = Pcg32::seed_from_u64(31);
        let trail = generate_trail(&mut rng, 2, 10, true, 10);
        assert_eq!(trail.value.len(), 4);
        assert!(is_valid_trail(&trail.value, 2, true));
    }

    #[test]
    fn test_invalid_trails_rejected() {
        let repeat = [Point::new(0, 0), Point::new(0, 1), Point::new(0, 0)];
        assert!(!is_valid_trail(&repeat, 3, false));
        let jump = [Point::new(0, 0), Point::new(2, 2)];
        assert!(!is_valid_trail(&jump, 3, true));
        let diagonal = [Point::new(0, 0), Point::new(1, 1)];
        assert!(!is_valid_trail(&diagonal, 3, false));
        assert!(is_valid_trail(&diagonal, 3, true));
    }

    proptest! {
        #[test]
        fn generated_trails_are_valid(seed in any::<u64>(), size in 1_usize..=6, length in 0_usize..40, diagonal in any::<bool>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let trail = generate_trail(&mut rng, size, length, diagonal, 20);
            prop_assert_eq!(trail.value.len(), length.min(size * size));
            prop_assert!(is_valid_trail(&trail.value, size, diagonal));
        }
    }
}
