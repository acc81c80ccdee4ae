//! Branch-and-bound search for the cheapest run-charged path between the
//! top-left and bottom-right corners of a [`CostGrid`].
//!
//! A path may step to any of the eight neighbours of its current cell and
//! never revisits a cell. A step onto a neighbour of a different value is
//! charged according to the configured [`Charging`] rule; stepping onto an
//! equal value is free. Arriving at the goal charges the goal cell.
//!
//! Each arrival is checked against [`Charging::bound`], a lower bound on
//! every completion of the current path. Branches whose bound cannot beat
//! the best complete path are abandoned, so pruning never changes the
//! result.

use runcost_core::{CostGrid, Direction, Point};

use crate::best::BestResult;
use crate::config::{Charging, SearchConfig, Strategy};
use crate::tracer::{NoTrace, Tracer};
use crate::visited::VisitedTracker;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Path prefixes examined (one per arrival at a cell).
    pub expanded: u64,
    /// Prefixes abandoned by the bound check.
    pub pruned: u64,
    /// Arrivals at the goal that passed the bound check.
    pub completed: u64,
    /// Times the best cost was lowered.
    pub improved: u64,
    /// Longest path examined, in cells.
    pub max_depth: usize,
}

/// Result of a full search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Minimum path cost, or `None` if no path reached the goal.
    pub best: Option<u64>,
    pub stats: SearchStats,
}

/// One frame of the explicit-stack walk.
#[derive(Debug, Clone, Copy)]
struct Frame {
    cell: Point,
    acc: u64,
    /// Index into [`Direction::ALL`] of the next neighbour to try.
    next: usize,
}

/// Running state of a single search: the grid, the best result and the
/// statistics. The visited mask is passed alongside so that marks can be
/// held by guards while the search descends.
pub struct Search<'g, T: Tracer> {
    grid: &'g CostGrid,
    goal: Point,
    pruning: bool,
    charging: Charging,
    best: BestResult,
    stats: SearchStats,
    tracer: T,
}

impl<'g, T: Tracer> Search<'g, T> {
    /// Fresh search state over `grid` with an empty best result. The
    /// strategy in `config` is ignored: callers pick [`explore`](Self::explore)
    /// or [`walk`](Self::walk) themselves.
    pub fn new(grid: &'g CostGrid, config: SearchConfig, tracer: T) -> Self {
        Self {
            grid,
            goal: grid.goal(),
            pruning: config.pruning,
            charging: config.charging,
            best: BestResult::new(),
            stats: SearchStats::default(),
            tracer,
        }
    }

    /// Best result so far.
    pub fn best(&self) -> BestResult {
        self.best
    }

    /// Finish the search.
    pub fn into_outcome(self) -> SearchOutcome {
        SearchOutcome {
            best: self.best.get(),
            stats: self.stats,
        }
    }

    /// Explore every completion of a path that has just arrived at `cell`.
    ///
    /// `acc` is the cost charged along the path up to `cell`, without the
    /// final goal charge. The value last entered is `grid[cell]`, so it is
    /// read from the grid rather than carried along. `cell` must already be
    /// marked in `visited`; on return `visited` is exactly as it was on
    /// entry.
    ///
    /// Recursion depth equals the path length, up to the cell count.
    pub fn explore(&mut self, visited: &mut VisitedTracker, acc: u64, cell: Point) {
        debug_assert!(visited.is_visited(cell), "explore from unmarked {cell}");
        let depth = visited.len();
        if self.arrive(visited, acc, cell) {
            let here = self.grid[cell];
            for d in Direction::ALL {
                let next = cell.step(d);
                let Some(value) = self.grid.at(next) else {
                    continue;
                };
                if visited.is_visited(next) {
                    continue;
                }
                let acc_next = self.charging.step(acc, here, value);
                let mut mark = visited.enter(next);
                self.explore(&mut mark, acc_next, next);
            }
        }
        self.tracer.leave(cell, depth);
    }

    /// Same contract and visiting order as [`explore`](Self::explore), but
    /// keeps the path on a heap-allocated frame stack.
    pub fn walk(&mut self, visited: &mut VisitedTracker, acc: u64, cell: Point) {
        debug_assert!(visited.is_visited(cell), "walk from unmarked {cell}");
        if !self.arrive(visited, acc, cell) {
            self.tracer.leave(cell, visited.len());
            return;
        }

        let mut stack: Vec<Frame> = Vec::with_capacity(self.grid.len());
        stack.push(Frame { cell, acc, next: 0 });

        while let Some(top) = stack.last_mut() {
            let Some(&d) = Direction::ALL.get(top.next) else {
                let done = top.cell;
                stack.pop();
                self.tracer.leave(done, visited.len());
                // The root mark belongs to the caller.
                if !stack.is_empty() {
                    visited.unmark(done);
                }
                continue;
            };
            top.next += 1;
            let from = *top;

            let next = from.cell.step(d);
            let Some(value) = self.grid.at(next) else {
                continue;
            };
            if visited.is_visited(next) {
                continue;
            }
            let acc_next = self.charging.step(from.acc, self.grid[from.cell], value);
            visited.mark(next);
            if self.arrive(visited, acc_next, next) {
                stack.push(Frame {
                    cell: next,
                    acc: acc_next,
                    next: 0,
                });
            } else {
                self.tracer.leave(next, visited.len());
                visited.unmark(next);
            }
        }
    }

    /// Bound and goal checks for a path arriving at `cell`. Returns `true`
    /// if the neighbours of `cell` should be expanded.
    fn arrive(&mut self, visited: &VisitedTracker, acc: u64, cell: Point) -> bool {
        let depth = visited.len();
        self.stats.expanded += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        self.tracer.enter(cell, depth, visited);

        let here = self.grid[cell];
        if self.pruning {
            let bound = self.charging.bound(acc, here, self.grid[self.goal]);
            if !self.best.admits(bound) {
                self.stats.pruned += 1;
                return false;
            }
        }

        if cell == self.goal {
            self.stats.completed += 1;
            let cost = acc + here.total();
            let previous = self.best.get();
            if self.best.offer(cost) {
                self.stats.improved += 1;
                log::trace!("best {previous:?} -> {cost} at depth {depth}");
                self.tracer.improved(previous, cost);
            }
            return false;
        }
        true
    }
}

/// Minimum run-cost path search over one grid.
///
/// The engine always runs from [`CostGrid::start`] to [`CostGrid::goal`].
pub struct SearchEngine<'g, T: Tracer = NoTrace> {
    grid: &'g CostGrid,
    config: SearchConfig,
    tracer: T,
}

impl<'g> SearchEngine<'g> {
    /// An engine with the default configuration and no tracer.
    pub fn new(grid: &'g CostGrid) -> Self {
        Self {
            grid,
            config: SearchConfig::default(),
            tracer: NoTrace,
        }
    }
}

impl<'g, T: Tracer> SearchEngine<'g, T> {
    /// Replace the configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the tracer.
    pub fn with_tracer<U: Tracer>(self, tracer: U) -> SearchEngine<'g, U> {
        SearchEngine {
            grid: self.grid,
            config: self.config,
            tracer,
        }
    }

    /// Consume the engine, returning the tracer.
    pub fn into_tracer(self) -> T {
        self.tracer
    }

    /// Run a complete search. Each call starts from an empty best result
    /// and a visited mask holding only the start cell.
    pub fn run(&mut self) -> SearchOutcome {
        let grid = self.grid;
        let start = grid.start();
        log::debug!(
            "searching {}x{} grid, {:?} strategy, {:?} charging, pruning {}",
            grid.rows(),
            grid.cols(),
            self.config.strategy,
            self.config.charging,
            if self.config.pruning { "on" } else { "off" },
        );

        let mut visited = VisitedTracker::new(grid);
        let mut search = Search::new(grid, self.config, &mut self.tracer);
        match self.config.strategy {
            Strategy::Recursive => search.explore(&mut visited, 0, start),
            Strategy::Stack => search.walk(&mut visited, 0, start),
        }
        debug_assert_eq!(visited.len(), 1, "marks leaked past the search");

        let outcome = search.into_outcome();
        log::debug!("search finished: best {:?}, {:?}", outcome.best, outcome.stats);
        outcome
    }
}

/// Minimum run-cost between the corners of `grid` with the default
/// configuration. Always `Some` for a valid grid.
pub fn solve(grid: &CostGrid) -> Option<u64> {
    SearchEngine::new(grid).run().best
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let g = CostGrid::from_rows(&[[1u32, 2], [2, 3]]).unwrap();
        let outcome = SearchEngine::new(&g).run();
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
