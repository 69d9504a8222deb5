//! Round assembly
//!
//! The session layer calls [`new_round`] once per round transition and renders the returned
//! descriptor. Descriptors are immutable and carry the ground truth needed for grading.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::kernel::{
    Direction, Fidelity, MazeGrid, MirrorGrid, Point, RayTrace, SequencePattern, generate_laser_maze,
    generate_maze, generate_sequence, generate_trail, numeric_neighbor, numeric_padding, parameters_for,
    shortest_path, synthesize_options,
};
use crate::settings::KernelSettings;

/// Puzzle family requested by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleKind {
    Maze,
    LaserMaze,
    SequenceQuiz,
    MemoryTrail,
}

impl PuzzleKind {
    pub const ALL: [PuzzleKind; 4] = [
        PuzzleKind::Maze,
        PuzzleKind::LaserMaze,
        PuzzleKind::SequenceQuiz,
        PuzzleKind::MemoryTrail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PuzzleKind::Maze => "maze",
            PuzzleKind::LaserMaze => "laser",
            PuzzleKind::SequenceQuiz => "sequence",
            PuzzleKind::MemoryTrail => "trail",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "maze" => Some(PuzzleKind::Maze),
            "laser" | "laser_maze" | "lasermaze" => Some(PuzzleKind::LaserMaze),
            "sequence" | "quiz" | "sequence_quiz" => Some(PuzzleKind::SequenceQuiz),
            "trail" | "memory" | "memory_trail" => Some(PuzzleKind::MemoryTrail),
            _ => None,
        }
    }
}

/// Obstacle maze: walk from `start` to `goal`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeRound {
    pub level: u32,
    pub grid: MazeGrid,
    pub start: Point,
    pub goal: Point,
    /// One shortest open path, endpoints included
    pub solution: Vec<Point>,
    pub fidelity: Fidelity,
}

/// Laser maze: predict which exit the beam leaves through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserRound {
    pub level: u32,
    pub grid: MirrorGrid,
    pub entry: Point,
    pub heading: Direction,
    pub beam: RayTrace,
    pub exit_options: Vec<Point>,
    pub correct_exit: Point,
    pub fidelity: Fidelity,
}

/// Sequence quiz: pick the next term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRound {
    pub level: u32,
    pub pattern: SequencePattern,
    pub sequence: Vec<i64>,
    pub correct_answer: i64,
    pub options: Vec<i64>,
}

/// Memory trail: watch the path, then repeat it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailRound {
    pub level: u32,
    pub size: usize,
    pub diagonal_moves: bool,
    pub trail: Vec<Point>,
    pub fidelity: Fidelity,
}

/// Everything the presentation layer needs for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundDescriptor {
    Maze(MazeRound),
    LaserMaze(LaserRound),
    SequenceQuiz(SequenceRound),
    MemoryTrail(TrailRound),
}

impl RoundDescriptor {
    pub fn kind(&self) -> PuzzleKind {
        match self {
            RoundDescriptor::Maze(_) => PuzzleKind::Maze,
            RoundDescriptor::LaserMaze(_) => PuzzleKind::LaserMaze,
            RoundDescriptor::SequenceQuiz(_) => PuzzleKind::SequenceQuiz,
            RoundDescriptor::MemoryTrail(_) => PuzzleKind::MemoryTrail,
        }
    }

    pub fn level(&self) -> u32 {
        match self {
            RoundDescriptor::Maze(r) => r.level,
            RoundDescriptor::LaserMaze(r) => r.level,
            RoundDescriptor::SequenceQuiz(r) => r.level,
            RoundDescriptor::MemoryTrail(r) => r.level,
        }
    }

    /// Degraded when a generator fell back to its easy layout
    pub fn fidelity(&self) -> Fidelity {
        match self {
            RoundDescriptor::Maze(r) => r.fidelity,
            RoundDescriptor::LaserMaze(r) => r.fidelity,
            RoundDescriptor::SequenceQuiz(_) => Fidelity::Full,
            RoundDescriptor::MemoryTrail(r) => r.fidelity,
        }
    }
}

/// Generate one round of `kind` at `level` (levels below 1 are treated as 1)
pub fn new_round<R: Rng + ?Sized>(
    kind: PuzzleKind,
    level: u32,
    settings: &KernelSettings,
    rng: &mut R,
) -> RoundDescriptor {
    let level = level.max(1);
    let params = parameters_for(level);

    let round = match kind {
        PuzzleKind::Maze => {
            let size = params.grid_size;
            let last = size as i32 - 1;
            let start = Point::new(0, 0);
            let goal = Point::new(last, last);
            let maze = generate_maze(
                rng,
                size,
                params.obstacle_density,
                start,
                goal,
                settings.maze_max_attempts,
            );
            let solution = shortest_path(&maze.value, start, goal).unwrap_or_default();
            RoundDescriptor::Maze(MazeRound {
                level,
                grid: maze.value,
                start,
                goal,
                solution,
                fidelity: maze.fidelity,
            })
        }
        PuzzleKind::LaserMaze => {
            let laser = generate_laser_maze(
                rng,
                &params,
                settings.laser_max_attempts,
                settings.option_max_attempts,
                settings.ray_step_factor,
            );
            RoundDescriptor::LaserMaze(LaserRound {
                level,
                grid: laser.grid,
                entry: laser.entry,
                heading: laser.heading,
                beam: laser.beam,
                exit_options: laser.exit_options,
                correct_exit: laser.correct_exit,
                fidelity: laser.fidelity,
            })
        }
        PuzzleKind::SequenceQuiz => {
            let puzzle = generate_sequence(rng, level, params.sequence_length);
            let spread = settings.numeric_spread.max(1);
            let options = synthesize_options(
                rng,
                puzzle.answer,
                params.option_count,
                numeric_neighbor(spread),
                numeric_padding(puzzle.answer, spread.saturating_add(1)),
                settings.option_max_attempts,
            );
            RoundDescriptor::SequenceQuiz(SequenceRound {
                level,
                pattern: puzzle.pattern,
                sequence: puzzle.sequence,
                correct_answer: puzzle.answer,
                options,
            })
        }
        PuzzleKind::MemoryTrail => {
            let trail = generate_trail(
                rng,
                params.trail_grid_size,
                params.trail_length,
                params.diagonal_moves,
                settings.trail_max_attempts,
            );
            RoundDescriptor::MemoryTrail(TrailRound {
                level,
                size: params.trail_grid_size,
                diagonal_moves: params.diagonal_moves,
                trail: trail.value,
                fidelity: trail.fidelity,
            })
        }
    };

    log::info!(
        "New {} round at level {} ({:?})",
        kind.as_str(),
        level,
        round.fidelity()
    );

    round
}
