//! Puzzle generation kernel
//!
//! Every generator here is pure apart from the RNG it is handed:
//! - Randomness is always an explicit `&mut R: Rng` argument
//! - Every retry loop has a finite budget and an always-valid fallback
//! - Stable iteration order (ordered sets/maps only)
//! - No rendering, storage or platform dependencies

pub mod difficulty;
pub mod grid;
pub mod laser;
pub mod maze;
pub mod options;
pub mod ray;
pub mod retry;
pub mod rng;
pub mod sequence;
pub mod trail;

pub use difficulty::{GenerationParameters, parameters_for};
pub use grid::{Direction, MazeGrid, Mirror, MirrorGrid, MirrorOrientation, Point};
pub use laser::{LaserMaze, boundary_ring, generate_laser_maze};
pub use maze::{generate_maze, is_reachable, shortest_path};
pub use options::{numeric_neighbor, numeric_padding, synthesize_options};
pub use ray::{RayOutcome, RayTrace, scaled_step_budget, step_budget, trace, trace_ray};
pub use retry::{Fidelity, Generated, generate_verified};
pub use rng::{RoundRng, RoundSeed};
pub use sequence::{SequencePattern, SequencePuzzle, generate_sequence};
pub use trail::{generate_trail, is_valid_trail, serpentine_trail};
