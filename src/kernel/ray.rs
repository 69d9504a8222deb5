//! Beam traversal through a mirror board
//!
//! The simulation is deterministic: the same entry, heading and mirrors always trace to the
//! same exit. The beam starts on `entry`, moves one cell per step and reflects whenever it
//! lands on a mirror. Leaving the board ends the trace at the last in-bounds cell; running
//! out of steps ends it with `entry` as the result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::grid::{Direction, MirrorOrientation, Point};
use crate::consts::{MAX_RAY_STEP_FACTOR, RAY_STEP_FACTOR};

/// How a traced beam ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RayOutcome {
    /// Left the board through this boundary cell
    Exited(Point),
    /// Step budget ran out (reflection cycle)
    Exhausted,
}

/// Full beam path for rendering and verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RayTrace {
    /// Every cell the beam occupied, starting with the entry
    pub cells: Vec<Point>,
    /// Number of heading changes along the way
    pub reflections: usize,
    pub outcome: RayOutcome,
}

impl RayTrace {
    /// Exit cell, or the entry when the budget was exhausted
    pub fn exit_or(&self, entry: Point) -> Point {
        match self.outcome {
            RayOutcome::Exited(p) => p,
            RayOutcome::Exhausted => entry,
        }
    }
}

/// Default step budget for a board side
#[inline]
pub fn step_budget(size: usize) -> usize {
    scaled_step_budget(RAY_STEP_FACTOR, size)
}

/// `factor · size²` with the factor clamped to `1..=MAX_RAY_STEP_FACTOR`
///
/// A beam has `4 · size²` distinct states, so anything past that only spins in a cycle.
pub fn scaled_step_budget(factor: usize, size: usize) -> usize {
    factor
        .clamp(1, MAX_RAY_STEP_FACTOR)
        .saturating_mul(size)
        .saturating_mul(size)
}

/// Cell through which the beam leaves the board
pub fn trace(
    size: usize,
    entry: Point,
    direction: Direction,
    mirrors: &BTreeMap<Point, MirrorOrientation>,
    step_budget: usize,
) -> Point {
    trace_ray(size, entry, direction, mirrors, step_budget).exit_or(entry)
}

/// Simulate the beam and keep the path it took
pub fn trace_ray(
    size: usize,
    entry: Point,
    direction: Direction,
    mirrors: &BTreeMap<Point, MirrorOrientation>,
    step_budget: usize,
) -> RayTrace {
    let mut pos = entry;
    let mut heading = direction;
    let mut cells = vec![entry];
    let mut reflections = 0;

    for _ in 0..step_budget {
        let next = pos.step(heading);
        if !next.in_bounds(size) {
            return RayTrace {
                cells,
                reflections,
                outcome: RayOutcome::Exited(pos),
            };
        }

        pos = next;
        cells.push(pos);

        if let Some(mirror) = mirrors.get(&pos) {
            heading = heading.reflect(*mirror);
            reflections += 1;
        }
    }

    RayTrace {
        cells,
        reflections,
        outcome: RayOutcome::Exhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mirrors(list: &[(i32, i32, MirrorOrientation)]) -> BTreeMap<Point, MirrorOrientation> {
        list.iter().map(|&(r, c, m)| (Point::new(r, c), m)).collect()
    }

    #[test]
    fn test_straight_beam_exits_opposite_side() {
        let exit = trace(5, Point::new(0, 2), Direction::Down, &BTreeMap::new(), step_budget(5));
        assert_eq!(exit, Point::new(4, 2));
    }

    #[test]
    fn test_forward_mirror_turns_down_into_left() {
        let board = mirrors(&[(2, 2, MirrorOrientation::Forward)]);
        let exit = trace(5, Point::new(0, 2), Direction::Down, &board, step_budget(5));
        assert_eq!(exit, Point::new(2, 0));
    }

    #[test]
    fn test_backward_mirror_turns_down_into_right() {
        let board = mirrors(&[(2, 2, MirrorOrientation::Backward)]);
        let t = trace_ray(5, Point::new(0, 2), Direction::Down, &board, step_budget(5));
        assert_eq!(t.outcome, RayOutcome::Exited(Point::new(2, 4)));
        assert_eq!(t.reflections, 1);
        assert_eq!(t.cells.first(), Some(&Point::new(0, 2)));
        assert_eq!(t.cells.last(), Some(&Point::new(2, 4)));
    }

    #[test]
    fn test_mirror_on_boundary_cell() {
        // Beam along the top row hits a `\` in the corner and heads down the right edge
        let board = mirrors(&[(0, 4, MirrorOrientation::Backward)]);
        let exit = trace(5, Point::new(0, 0), Direction::Right, &board, step_budget(5));
        assert_eq!(exit, Point::new(4, 4));
    }

    #[test]
    fn test_immediate_bounce_back_out_entry_side() {
        // `/` right below the entry sends a downward beam left, straight off the board
        let board = mirrors(&[(1, 0, MirrorOrientation::Forward)]);
        let exit = trace(5, Point::new(0, 0), Direction::Down, &board, step_budget(5));
        assert_eq!(exit, Point::new(1, 0));
    }

    #[test]
    fn test_entry_heading_outward_exits_at_entry() {
        let exit = trace(5, Point::new(0, 3), Direction::Up, &BTreeMap::new(), step_budget(5));
        assert_eq!(exit, Point::new(0, 3));
    }

    #[test]
    fn test_reflection_cycle_exhausts_budget() {
        // Four mirrors forming a closed loop around the centre of a 5x5 board
        let board = mirrors(&[
            (1, 1, MirrorOrientation::Forward),
            (1, 3, MirrorOrientation::Backward),
            (3, 3, MirrorOrientation::Forward),
            (3, 1, MirrorOrientation::Backward),
        ]);
        let entry = Point::new(1, 2);
        let t = trace_ray(5, entry, Direction::Right, &board, step_budget(5));
        assert_eq!(t.outcome, RayOutcome::Exhausted);
        assert_eq!(t.cells.len(), step_budget(5) + 1);
        assert_eq!(trace(5, entry, Direction::Right, &board, step_budget(5)), entry);
    }

    #[test]
    fn test_zero_budget_returns_entry() {
        let exit = trace(5, Point::new(0, 2), Direction::Down, &BTreeMap::new(), 0);
        assert_eq!(exit, Point::new(0, 2));
    }

    fn orientation_strategy() -> impl Strategy<Value = MirrorOrientation> {
        prop_oneof![Just(MirrorOrientation::Forward), Just(MirrorOrientation::Backward)]
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Right),
            Just(Direction::Down),
            Just(Direction::Left),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn trace_terminates_within_budget(
            size in 3_usize..=10,
            raw in prop::collection::vec((0_i32..8, 0_i32..8, orientation_strategy()), 0..30),
            entry_row in 0_i32..10,
            entry_col in 0_i32..10,
            dir in direction_strategy(),
        ) {
            let inner = size as i32 - 2;
            let board: BTreeMap<Point, MirrorOrientation> = raw
                .into_iter()
                .map(|(r, c, m)| (Point::new(1 + r % inner, 1 + c % inner), m))
                .collect();
            let entry = Point::new(entry_row % size as i32, entry_col % size as i32);
            let budget = step_budget(size);

            let t = trace_ray(size, entry, dir, &board, budget);
            prop_assert!(t.cells.len() <= budget + 1);
            prop_assert!(t.cells.iter().all(|c| c.in_bounds(size)));
            if let RayOutcome::Exited(p) = t.outcome {
                prop_assert!(p.on_boundary(size));
            }
        }

        #[test]
        fn trace_exits_on_smallest_boards(
            size in 1_usize..=2,
            entry_row in 0_i32..2,
            entry_col in 0_i32..2,
            dir in direction_strategy(),
        ) {
            let entry = Point::new(entry_row % size as i32, entry_col % size as i32);
            let budget = step_budget(size);

            let t = trace_ray(size, entry, dir, &BTreeMap::new(), budget);
            prop_assert!(t.cells.len() <= budget + 1);
            prop_assert_eq!(t.reflections, 0);
            match t.outcome {
                RayOutcome::Exited(p) => prop_assert!(p.on_boundary(size)),
                RayOutcome::Exhausted => prop_assert!(false, "mirrorless beam must exit"),
            }
        }

        #[test]
        fn trace_is_deterministic(
            size in 3_usize..=10,
            raw in prop::collection::vec((0_i32..8, 0_i32..8, orientation_strategy()), 0..20),
            col in 0_i32..10,
        ) {
            let inner = size as i32 - 2;
            let board: BTreeMap<Point, MirrorOrientation> = raw
                .into_iter()
                .map(|(r, c, m)| (Point::new(1 + r % inner, 1 + c % inner), m))
                .collect();
            let entry = Point::new(0, col % size as i32);
            let a = trace(size, entry, Direction::Down, &board, step_budget(size));
            let b = trace(size, entry, Direction::Down, &board, step_budget(size));
            prop_assert_eq!(a, b);
        }
    }
}
