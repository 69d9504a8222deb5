//! Puzzle Kernel - procedural puzzle generation for brain-training games
//!
//! Core modules:
//! - `kernel`: Generate-and-verify puzzle generators (mazes, mirror beams, options)
//! - `round`: Assembles one immutable round descriptor per level/kind request
//! - `settings`: Retry budgets and tuning, loadable from JSON
//! - `platform`: JSON boundary for the browser presentation layer

pub mod kernel;
pub mod platform;
pub mod round;
pub mod settings;

pub use round::{PuzzleKind, RoundDescriptor, new_round};
pub use settings::KernelSettings;

/// Generation budgets and difficulty constants
pub mod consts {
    /// Attempts before a maze falls back to an open grid
    pub const MAZE_MAX_ATTEMPTS: u32 = 100;
    /// Attempts before a laser layout falls back to a mirrorless beam
    pub const LASER_MAX_ATTEMPTS: u32 = 50;
    /// Neighbour draws before option sets are padded deterministically
    pub const OPTION_MAX_ATTEMPTS: u32 = 50;
    /// Attempts before a memory trail falls back to a serpentine walk
    pub const TRAIL_MAX_ATTEMPTS: u32 = 50;
    /// Ray step budget is this factor times size²
    pub const RAY_STEP_FACTOR: usize = 6;
    /// Ceiling on configured step factors; past `4` the beam can only be cycling
    pub const MAX_RAY_STEP_FACTOR: usize = 16;
    /// Numeric distractors are drawn from correct ± this spread
    pub const NUMERIC_SPREAD: i64 = 10;

    /// Maze board side at level 1
    pub const BASE_GRID_SIZE: usize = 6;
    /// Largest maze/laser board side
    pub const MAX_GRID_SIZE: usize = 12;
    /// Levels per +1 board side
    pub const GRID_GROWTH_LEVELS: u32 = 3;

    /// Obstacle density at level 1
    pub const BASE_DENSITY: f64 = 0.15;
    /// Density added per level
    pub const DENSITY_PER_LEVEL: f64 = 0.01;
    /// Above this, reachable boards become rare and retries explode
    pub const MAX_DENSITY: f64 = 0.32;

    pub const BASE_MIRROR_COUNT: usize = 2;
    pub const MAX_MIRROR_COUNT: usize = 12;

    pub const BASE_OPTION_COUNT: usize = 3;
    pub const MAX_OPTION_COUNT: usize = 6;

    pub const BASE_TRAIL_GRID: usize = 3;
    pub const MAX_TRAIL_GRID: usize = 6;
    pub const BASE_TRAIL_LENGTH: usize = 3;
    /// Diagonal trail moves unlock at this level
    pub const DIAGONAL_TRAIL_LEVEL: u32 = 3;

    pub const BASE_SEQUENCE_LENGTH: usize = 4;
    pub const MAX_SEQUENCE_LENGTH: usize = 7;
}
