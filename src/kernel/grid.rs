//! Grid coordinates, headings and mirror geometry
//!
//! Rows grow downward and columns grow rightward, so `Up` is `(-1, 0)`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A cell on a square board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Neighbouring cell one step along `dir` (may be off the board)
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// Offset by an arbitrary delta
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// True when the cell lies inside a `size`×`size` board
    #[inline]
    pub fn in_bounds(self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.row as i64)) && (0..size).contains(&(self.col as i64))
    }

    /// True for cells on the outer ring of the board
    pub fn on_boundary(self, size: usize) -> bool {
        let last = size as i32 - 1;
        self.in_bounds(size) && (self.row == 0 || self.col == 0 || self.row == last || self.col == last)
    }

    /// True for the four corner cells
    pub fn is_corner(self, size: usize) -> bool {
        let last = size as i32 - 1;
        self.in_bounds(size) && (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }

    /// Row-major index into a `size`×`size` buffer; caller checks bounds
    #[inline]
    pub(crate) fn index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }
}

/// Beam/agent heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Unit vector `(dr, dc)`
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// New heading after crossing a mirror cell
    ///
    /// `/` swaps Up↔Right and Down↔Left, `\` swaps Up↔Left and Down↔Right.
    pub fn reflect(self, mirror: MirrorOrientation) -> Self {
        match (mirror, self) {
            (MirrorOrientation::Forward, Direction::Up) => Direction::Right,
            (MirrorOrientation::Forward, Direction::Right) => Direction::Up,
            (MirrorOrientation::Forward, Direction::Down) => Direction::Left,
            (MirrorOrientation::Forward, Direction::Left) => Direction::Down,
            (MirrorOrientation::Backward, Direction::Up) => Direction::Left,
            (MirrorOrientation::Backward, Direction::Left) => Direction::Up,
            (MirrorOrientation::Backward, Direction::Down) => Direction::Right,
            (MirrorOrientation::Backward, Direction::Right) => Direction::Down,
        }
    }
}

/// Mirror slant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MirrorOrientation {
    /// `/`
    Forward,
    /// `\`
    Backward,
}

/// Obstacle board for reachability mazes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeGrid {
    pub size: usize,
    pub blocked: BTreeSet<Point>,
}

impl MazeGrid {
    /// Board with no obstacles (always solvable)
    pub fn open(size: usize) -> Self {
        Self {
            size,
            blocked: BTreeSet::new(),
        }
    }

    /// In bounds and not blocked
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        p.in_bounds(self.size) && !self.blocked.contains(&p)
    }
}

/// One placed mirror (wire form of a mirror map entry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mirror {
    pub cell: Point,
    pub orientation: MirrorOrientation,
}

/// Mirror board for laser mazes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorGrid {
    pub size: usize,
    #[serde(with = "mirror_list")]
    pub mirrors: BTreeMap<Point, MirrorOrientation>,
}

impl MirrorGrid {
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            mirrors: BTreeMap::new(),
        }
    }
}

/// JSON object keys must be strings, so mirror maps travel as `[{cell, orientation}]`
mod mirror_list {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::{Mirror, MirrorOrientation, Point};

    pub fn serialize<S>(map: &BTreeMap<Point, MirrorOrientation>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_seq(map.iter().map(|(&cell, &orientation)| Mirror { cell, orientation }))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<BTreeMap<Point, MirrorOrientation>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list = Vec::<Mirror>::deserialize(d)?;
        Ok(list.into_iter().map(|m| (m.cell, m.orientation)).collect())
    }
}
