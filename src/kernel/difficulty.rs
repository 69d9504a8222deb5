//! Level → generation parameters
//!
//! Step functions of the level, each capped so generation stays feasible.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Everything a generator needs to know about a level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// Maze / laser board side
    pub grid_size: usize,
    /// Probability a maze cell is blocked
    pub obstacle_density: f64,
    /// Mirrors sampled on a laser board
    pub mirror_count: usize,
    /// Choices shown in option-based puzzles
    pub option_count: usize,
    /// Memory-trail board side
    pub trail_grid_size: usize,
    /// Cells in a memory trail
    pub trail_length: usize,
    /// Memory trails may step diagonally
    pub diagonal_moves: bool,
    /// Terms shown in a sequence quiz
    pub sequence_length: usize,
}

/// Parameters for `level` (levels below 1 are treated as 1)
pub fn parameters_for(level: u32) -> GenerationParameters {
    let step = level.max(1) - 1;

    let grid_size = (BASE_GRID_SIZE + (step / GRID_GROWTH_LEVELS) as usize).min(MAX_GRID_SIZE);
    let obstacle_density = (BASE_DENSITY + DENSITY_PER_LEVEL * step as f64).min(MAX_DENSITY);
    let mirror_count = (BASE_MIRROR_COUNT + (step / 2) as usize).min(MAX_MIRROR_COUNT);
    let option_count = (BASE_OPTION_COUNT + (step / 5) as usize).min(MAX_OPTION_COUNT);

    let trail_grid_size = (BASE_TRAIL_GRID + (step / 2) as usize).min(MAX_TRAIL_GRID);
    let trail_length =
        (BASE_TRAIL_LENGTH + (step as f64 * 0.8) as usize).min(trail_grid_size * trail_grid_size - 1);
    let diagonal_moves = level >= DIAGONAL_TRAIL_LEVEL;

    let sequence_length = (BASE_SEQUENCE_LENGTH + (step / 4) as usize).min(MAX_SEQUENCE_LENGTH);

    GenerationParameters {
        grid_size,
        obstacle_density,
        mirror_count,
        option_count,
        trail_grid_size,
        trail_length,
        diagonal_moves,
        sequence_length,
    }
}
