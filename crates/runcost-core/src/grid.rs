//! An immutable grid of non-negative cell costs.
//!
//! [`Cost`] is a newtype over `u32`, so negative costs are unrepresentable.
//! [`CostGrid`] stores cells row-major in a single flat buffer and is never
//! mutated once built: searches borrow it for their whole lifetime.

use std::fmt;
use std::ops::Index;

use thiserror::Error;

use crate::geom::Point;

/// The cost of entering a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost(pub u32);

impl Cost {
    /// The value widened for accumulation along a path.
    pub const fn total(self) -> u64 {
        self.0 as u64
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised when assembling a [`CostGrid`] from raw values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// One of the dimensions is zero.
    #[error("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },
    /// Dimensions too large to address with `i32` coordinates.
    #[error("grid dimensions {rows}x{cols} exceed the addressable range")]
    TooLarge { rows: usize, cols: usize },
    /// A row has a different width from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The flat value buffer does not match `rows * cols`.
    #[error("expected {expected} cell values, got {found}")]
    SizeMismatch { expected: usize, found: usize },
}

/// A rectangular grid of [`Cost`] values, at least 1x1.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostGrid {
    cells: Vec<Cost>,
    rows: usize,
    cols: usize,
}

impl CostGrid {
    /// Build a grid from a row-major buffer of `rows * cols` values.
    pub fn from_vec(rows: usize, cols: usize, values: Vec<u32>) -> Result<Self, GridError> {
        check_dims(rows, cols)?;
        let expected = rows * cols;
        if values.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                found: values.len(),
            });
        }
        Ok(Self {
            cells: values.into_iter().map(Cost).collect(),
            rows,
            cols,
        })
    }

    /// Build a grid from a slice of rows. All rows must have equal width.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        check_dims(rows.len(), cols)?;
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().copied().map(Cost));
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// A `rows x cols` grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: u32) -> Result<Self, GridError> {
        check_dims(rows, cols)?;
        Self::from_vec(rows, cols, vec![value; rows * cols])
    }

    /// Number of rows (`m`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`n`).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid holds at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.idx(p).is_some()
    }

    /// The search start: top-left corner.
    #[inline]
    pub fn start(&self) -> Point {
        Point::ZERO
    }

    /// The search goal: bottom-right corner.
    #[inline]
    pub fn goal(&self) -> Point {
        Point::new(self.cols as i32 - 1, self.rows as i32 - 1)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        p.index_in(self.rows, self.cols)
    }

    /// The cost at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cost> {
        self.idx(p).map(|i| self.cells[i])
    }
}

fn check_dims(rows: usize, cols: usize) -> Result<(), GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::Empty { rows, cols });
    }
    if rows > i32::MAX as usize || cols > i32::MAX as usize || rows.checked_mul(cols).is_none() {
        return Err(GridError::TooLarge { rows, cols });
    }
    Ok(())
}

impl Index<Point> for CostGrid {
    type Output = Cost;

    /// Panics if `p` is outside the grid.
    fn index(&self, p: Point) -> &Cost {
        match self.idx(p) {
            Some(i) => &self.cells[i],
            None => panic!("point {p} outside {}x{} grid", self.rows, self.cols),
        }
    }
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows, self.cols)?;
        for row in self.cells.chunks(self.cols) {
            let mut first = true;
            for c in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{c}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Direction;

    #[test]
    fn from_rows_and_at() {
        let g = CostGrid::from_rows(&[vec![1u32, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.len(), 6);
        assert_eq!(g.at(Point::at(1, 2)), Some(Cost(6)));
        assert_eq!(g.at(Point::at(0, 1)), Some(Cost(2)));
        assert_eq!(g.at(Point::at(2, 0)), None);
        assert_eq!(g[Point::at(1, 0)], Cost(4));
    }

    #[test]
    fn corners() {
        let g = CostGrid::filled(3, 4, 0).unwrap();
        assert_eq!(g.start(), Point::ZERO);
        assert_eq!(g.goal(), Point::at(2, 3));
        assert_eq!(g.idx(g.goal()), Some(g.len() - 1));
        assert!(!g.contains(g.goal().step(Direction::SouthEast)));

        let one = CostGrid::filled(1, 1, 7).unwrap();
        assert_eq!(one.start(), one.goal());
    }

    #[test]
    fn index_round_trip() {
        let g = CostGrid::filled(3, 5, 1).unwrap();
        for i in 0..g.len() {
            let p = Point::from_index(i, g.cols());
            assert_eq!(g.idx(p), Some(i));
            assert!(g.contains(p));
        }
        assert_eq!(Point::from_index(g.len() - 1, g.cols()), g.goal());
        assert_eq!(g.idx(Point::new(-1, 0)), None);
        assert_eq!(g.idx(Point::new(5, 0)), None);
    }

    #[test]
    fn rejects_empty_and_ragged() {
        let empty: [Vec<u32>; 0] = [];
        assert_eq!(
            CostGrid::from_rows(&empty),
            Err(GridError::Empty { rows: 0, cols: 0 })
        );
        assert_eq!(
            CostGrid::from_rows(&[vec![1u32, 2], vec![3]]),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            CostGrid::from_vec(2, 2, vec![1, 2, 3]),
            Err(GridError::SizeMismatch {
                expected: 4,
                found: 3
            })
        );
        assert!(matches!(
            CostGrid::from_vec(0, 3, vec![]),
            Err(GridError::Empty { .. })
        ));
    }

    #[test]
    fn cells_are_row_major() {
        let g = CostGrid::from_vec(2, 2, vec![9, 8, 7, 6]).unwrap();
        assert_eq!(g[Point::at(0, 1)], Cost(8));
        assert_eq!(g[Point::at(1, 0)], Cost(7));
        assert_eq!(g[g.goal()], Cost(6));
    }

    #[test]
    fn display_matches_input_format() {
        let g = CostGrid::from_rows(&[[1u32, 2], [3, 4]]).unwrap();
        assert_eq!(g.to_string(), "2 2\n1 2\n3 4\n");
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let g = CostGrid::filled(2, 2, 0).unwrap();
        let _ = g[Point::at(2, 2)];
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = CostGrid::from_rows(&[[1u32, 0, 3], [4, 4, 2]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: CostGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
