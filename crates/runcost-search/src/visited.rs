//! Occupancy mask over a grid for the path currently being explored.

use std::ops::{Deref, DerefMut};

use runcost_core::{CostGrid, Point};

/// Tracks which cells lie on the active search path.
///
/// The anchor cell (the search start) is marked on construction and can
/// never be released. Every other cell is marked while it sits on the path
/// and released when the search backtracks out of it; [`enter`](Self::enter)
/// ties the release to a guard so no exit path can leak a mark.
#[derive(Debug, Clone)]
pub struct VisitedTracker {
    marks: Vec<bool>,
    rows: usize,
    cols: usize,
    anchor: usize,
    marked: usize,
}

impl VisitedTracker {
    /// A tracker sized to `grid`, with the grid's start cell anchored.
    pub fn new(grid: &CostGrid) -> Self {
        Self::anchored(grid.rows(), grid.cols(), grid.start())
    }

    /// A `rows x cols` tracker with `anchor` permanently marked.
    ///
    /// Panics if `anchor` lies outside the tracker.
    pub fn anchored(rows: usize, cols: usize, anchor: Point) -> Self {
        let mut t = Self {
            marks: vec![false; rows * cols],
            rows,
            cols,
            anchor: usize::MAX,
            marked: 0,
        };
        let Some(i) = t.idx(anchor) else {
            panic!("anchor {anchor} outside {rows}x{cols} tracker");
        };
        t.anchor = i;
        t.marks[i] = true;
        t.marked = 1;
        t
    }

    /// Whether `p` is on the active path. Cells outside the tracker are
    /// never visited.
    #[inline]
    pub fn is_visited(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.marks[i])
    }

    /// Mark `p` as on the path.
    ///
    /// Marking a cell twice, or a cell outside the tracker, is a search
    /// defect and panics.
    pub fn mark(&mut self, p: Point) {
        let i = self.expect_idx(p);
        assert!(!self.marks[i], "cell {p} marked twice");
        self.marks[i] = true;
        self.marked += 1;
    }

    /// Release `p` from the path. Releasing the anchor or an unmarked cell
    /// panics.
    pub fn unmark(&mut self, p: Point) {
        let i = self.expect_idx(p);
        self.release(i);
    }

    /// Mark `p` and return a guard that releases it when dropped.
    ///
    /// The guard dereferences to the tracker so the search can keep
    /// descending while the mark is held.
    pub fn enter(&mut self, p: Point) -> Mark<'_> {
        self.mark(p);
        let idx = self.expect_idx(p);
        Mark { tracker: self, idx }
    }

    /// Number of marked cells, anchor included. This is the length of the
    /// active path.
    #[inline]
    pub fn len(&self) -> usize {
        self.marked
    }

    /// Never true: the anchor is always marked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marked == 0
    }

    /// Row-major iterator over the marked cells.
    pub fn marked(&self) -> impl Iterator<Item = Point> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m)
            .map(|(i, _)| self.point(i))
    }

    fn release(&mut self, i: usize) {
        assert!(i != self.anchor, "the anchor cell cannot be released");
        assert!(self.marks[i], "cell {} released while unmarked", self.point(i));
        self.marks[i] = false;
        self.marked -= 1;
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        p.index_in(self.rows, self.cols)
    }

    fn expect_idx(&self, p: Point) -> usize {
        match self.idx(p) {
            Some(i) => i,
            None => panic!("cell {p} outside {}x{} tracker", self.rows, self.cols),
        }
    }

    #[inline]
    fn point(&self, i: usize) -> Point {
        Point::from_index(i, self.cols)
    }
}

/// A held mark on one cell; releases it on drop.
pub struct Mark<'a> {
    tracker: &'a mut VisitedTracker,
    idx: usize,
}

impl Deref for Mark<'_> {
    type Target = VisitedTracker;

    fn deref(&self) -> &VisitedTracker {
        &*self.tracker
    }
}

impl DerefMut for Mark<'_> {
    fn deref_mut(&mut self) -> &mut VisitedTracker {
        &mut *self.tracker
    }
}

impl Drop for Mark<'_> {
    fn drop(&mut self) {
        self.tracker.release(self.idx);
    }
}
