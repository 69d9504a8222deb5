//! Laser-maze layouts: mirrors scattered on the board, one beam, several candidate exits

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::difficulty::GenerationParameters;
use super::grid::{Direction, MirrorGrid, MirrorOrientation, Point};
use super::options::synthesize_options;
use super::ray::{RayOutcome, RayTrace, scaled_step_budget, trace_ray};
use super::retry::{Fidelity, generate_verified};

/// Smallest board that has non-corner boundary cells and an interior
const MIN_LASER_GRID: usize = 3;

/// A generated laser puzzle with its ground truth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserMaze {
    pub grid: MirrorGrid,
    pub entry: Point,
    pub heading: Direction,
    /// Beam path from the entry to the correct exit
    pub beam: RayTrace,
    pub correct_exit: Point,
    /// Candidate exits in presentation order, `correct_exit` included once
    pub exit_options: Vec<Point>,
    pub fidelity: Fidelity,
}

struct Layout {
    grid: MirrorGrid,
    entry: Point,
    heading: Direction,
    beam: RayTrace,
}

/// Boundary cells clockwise from the top-left corner
pub fn boundary_ring(size: usize) -> Vec<Point> {
    if size == 0 {
        return Vec::new();
    }
    if size == 1 {
        return vec![Point::new(0, 0)];
    }

    let last = size as i32 - 1;
    let mut ring = Vec::with_capacity(4 * (size - 1));
    for col in 0..last {
        ring.push(Point::new(0, col));
    }
    for row in 0..last {
        ring.push(Point::new(row, last));
    }
    for col in (1..=last).rev() {
        ring.push(Point::new(last, col));
    }
    for row in (1..=last).rev() {
        ring.push(Point::new(row, 0));
    }
    ring
}

/// Heading that points from a non-corner boundary cell into the board
fn inward_heading(p: Point, size: usize) -> Direction {
    let last = size as i32 - 1;
    if p.row == 0 {
        Direction::Down
    } else if p.row == last {
        Direction::Up
    } else if p.col == 0 {
        Direction::Right
    } else {
        Direction::Left
    }
}

/// Build a laser maze whose beam is deflected at least once and leaves through a
/// different cell than it entered
///
/// Falls back to a mirrorless board (straight beam across the grid) when the budget is spent.
pub fn generate_laser_maze<R: Rng + ?Sized>(
    rng: &mut R,
    params: &GenerationParameters,
    max_attempts: u32,
    option_attempts: u32,
    ray_step_factor: usize,
) -> LaserMaze {
    let size = params.grid_size.max(MIN_LASER_GRID);
    let steps = scaled_step_budget(ray_step_factor, size);

    let entries: Vec<Point> = boundary_ring(size).into_iter().filter(|p| !p.is_corner(size)).collect();
    let interior: Vec<Point> = (1..size as i32 - 1)
        .flat_map(|row| (1..size as i32 - 1).map(move |col| Point::new(row, col)))
        .collect();
    let mirror_count = params.mirror_count.min(interior.len());

    let layout = generate_verified(
        rng,
        max_attempts,
        |rng| {
            let entry = entries[rng.random_range(0..entries.len())];
            let heading = inward_heading(entry, size);
            let mut grid = MirrorGrid::empty(size);
            for &cell in interior.choose_multiple(rng, mirror_count) {
                let orientation = if rng.random_bool(0.5) {
                    MirrorOrientation::Forward
                } else {
                    MirrorOrientation::Backward
                };
                grid.mirrors.insert(cell, orientation);
            }
            let beam = trace_ray(size, entry, heading, &grid.mirrors, steps);
            Layout {
                grid,
                entry,
                heading,
                beam,
            }
        },
        |layout| {
            layout.beam.reflections > 0
                && matches!(layout.beam.outcome, RayOutcome::Exited(exit) if exit != layout.entry)
        },
        || {
            let entry = Point::new(0, size as i32 / 2);
            let grid = MirrorGrid::empty(size);
            let beam = trace_ray(size, entry, Direction::Down, &grid.mirrors, steps);
            Layout {
                grid,
                entry,
                heading: Direction::Down,
                beam,
            }
        },
    );

    if layout.fidelity.is_degraded() {
        log::warn!(
            "Laser maze {}x{}: no deflected beam in {} attempts, using empty board",
            size,
            size,
            max_attempts
        );
    }

    let fidelity = layout.fidelity;
    let Layout {
        grid,
        entry,
        heading,
        beam,
    } = layout.value;
    let correct_exit = beam.exit_or(entry);

    let candidates: Vec<Point> = boundary_ring(size).into_iter().filter(|&p| p != entry).collect();
    let option_count = params.option_count.min(candidates.len());
    let anchor = candidates.iter().position(|&p| p == correct_exit).unwrap_or(0);

    let exit_options = synthesize_options(
        rng,
        correct_exit,
        option_count,
        |rng: &mut R, _: &Point| candidates[rng.random_range(0..candidates.len())],
        |i: usize| candidates[(anchor + i) % candidates.len()],
        option_attempts,
    );

    log::debug!(
        "Laser maze {}x{}: {} mirrors, {} reflections, exit {:?}",
        size,
        size,
        grid.mirrors.len(),
        beam.reflections,
        correct_exit
    );

    LaserMaze {
        grid,
        entry,
        heading,
        beam,
        correct_exit,
        exit_options,
        fidelity,
    }
}
