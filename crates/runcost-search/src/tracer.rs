//! Observer hooks for watching a search walk the path tree.

use runcost_core::Point;

use crate::visited::VisitedTracker;

/// Observer hooks invoked by the search as it walks the path tree.
///
/// Every method has a no-op default. `depth` is the length of the active
/// path in cells, start included, so the start cell is entered at depth 1.
/// Both search strategies emit the same sequence of calls.
pub trait Tracer {
    /// A path has arrived at `cell`; `visited` holds the full active path.
    fn enter(&mut self, _cell: Point, _depth: usize, _visited: &VisitedTracker) {}

    /// The search is backtracking out of `cell`.
    fn leave(&mut self, _cell: Point, _depth: usize) {}

    /// A complete path lowered the best cost from `previous` to `current`.
    fn improved(&mut self, _previous: Option<u64>, _current: u64) {}
}

/// A tracer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl Tracer for NoTrace {}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    fn enter(&mut self, cell: Point, depth: usize, visited: &VisitedTracker) {
        (**self).enter(cell, depth, visited);
    }

    fn leave(&mut self, cell: Point, depth: usize) {
        (**self).leave(cell, depth);
    }

    fn improved(&mut self, previous: Option<u64>, current: u64) {
        (**self).improved(previous, current);
    }
}
