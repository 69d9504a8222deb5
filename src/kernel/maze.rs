//! Random obstacle mazes verified by breadth-first search

use std::collections::{BTreeSet, VecDeque};

use rand::Rng;

use super::grid::{Direction, MazeGrid, Point};
use super::retry::{Generated, generate_verified};

/// Build an obstacle field on a `size`×`size` board where `goal` is reachable from `start`
///
/// Each attempt blocks every cell except `start`/`goal` independently with probability
/// `density`. If no attempt yields a reachable board the open board is returned, flagged
/// as degraded.
pub fn generate_maze<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    density: f64,
    start: Point,
    goal: Point,
    max_attempts: u32,
) -> Generated<MazeGrid> {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };

    let result = generate_verified(
        rng,
        max_attempts,
        |rng| sample_obstacles(rng, size, density, start, goal),
        |grid| is_reachable(grid, start, goal),
        || MazeGrid::open(size),
    );

    if result.fidelity.is_degraded() {
        log::warn!(
            "Maze {}x{} @ density {:.2}: no reachable layout in {} attempts, using open board",
            size,
            size,
            density,
            max_attempts
        );
    } else {
        log::debug!(
            "Maze {}x{}: {} blocked after {} attempt(s)",
            size,
            size,
            result.value.blocked.len(),
            result.attempts
        );
    }

    result
}

fn sample_obstacles<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    density: f64,
    start: Point,
    goal: Point,
) -> MazeGrid {
    let mut blocked = BTreeSet::new();
    for row in 0..size as i32 {
        for col in 0..size as i32 {
            let p = Point::new(row, col);
            if p == start || p == goal {
                continue;
            }
            if rng.random_bool(density) {
                blocked.insert(p);
            }
        }
    }
    MazeGrid { size, blocked }
}

/// True when `goal` can be reached from `start` through open cells (4-neighbour moves)
pub fn is_reachable(grid: &MazeGrid, start: Point, goal: Point) -> bool {
    shortest_path(grid, start, goal).is_some()
}

/// Shortest open path from `start` to `goal`, both endpoints included
pub fn shortest_path(grid: &MazeGrid, start: Point, goal: Point) -> Option<Vec<Point>> {
    if !grid.is_open(start) || !grid.is_open(goal) {
        return None;
    }

    let size = grid.size;
    let mut parent: Vec<Option<Point>> = vec![None; size * size];
    let mut visited = vec![false; size * size];
    let mut queue = VecDeque::new();

    visited[start.index(size)] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Some(rebuild_path(&parent, size, start, goal));
        }

        for dir in Direction::ALL {
            let next = current.step(dir);
            if !grid.is_open(next) || visited[next.index(size)] {
                continue;
            }
            visited[next.index(size)] = true;
            parent[next.index(size)] = Some(current);
            queue.push_back(next);
        }
    }

    None
}

fn rebuild_path(parent: &[Option<Point>], size: usize, start: Point, goal: Point) -> Vec<Point> {
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        match parent[cur.index(size)] {
            Some(prev) => {
                path.push(prev);
                cur = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
