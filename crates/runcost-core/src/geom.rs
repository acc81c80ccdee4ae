//! Geometry primitives: [`Point`] and the ordered [`Direction`] table.
//!
//! Coordinates follow screen conventions: `x` is the column and grows right,
//! `y` is the row and grows down. The search start is the top-left corner
//! `(0, 0)` and the goal is the bottom-right corner.

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X is the column, Y is the row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a point from a `(row, col)` pair.
    #[inline]
    pub const fn at(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    /// The neighbour one step away in direction `d`.
    #[inline]
    pub fn step(self, d: Direction) -> Self {
        self + d.offset()
    }

    /// Flat row-major index of the point in a `rows x cols` rectangle
    /// anchored at the origin, or `None` if it lies outside.
    #[inline]
    pub fn index_in(self, rows: usize, cols: usize) -> Option<usize> {
        let (Ok(x), Ok(y)) = (usize::try_from(self.x), usize::try_from(self.y)) else {
            return None;
        };
        (x < cols && y < rows).then(|| y * cols + x)
    }

    /// Inverse of [`index_in`](Self::index_in) for a rectangle `cols` wide.
    #[inline]
    pub fn from_index(idx: usize, cols: usize) -> Self {
        Self::new((idx % cols) as i32, (idx / cols) as i32)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the eight Moore-neighbourhood directions.
///
/// The declaration order is the expansion order used by the search:
/// clockwise starting from north-west. Each variant carries its own offset,
/// so the direction and its delta can never drift apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl Direction {
    /// Every direction, in expansion order.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
    ];

    /// The `(dx, dy)` delta of one step in this direction.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::NorthWest => Point::new(-1, -1),
            Direction::North => Point::new(0, -1),
            Direction::NorthEast => Point::new(1, -1),
            Direction::East => Point::new(1, 0),
            Direction::SouthEast => Point::new(1, 1),
            Direction::South => Point::new(0, 1),
            Direction::SouthWest => Point::new(-1, 1),
            Direction::West => Point::new(-1, 0),
        }
    }
}
