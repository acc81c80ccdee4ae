//! Minimum run-cost path search on 8-connected grids.
//!
//! Finds the cheapest self-avoiding path from the top-left to the
//! bottom-right corner of a [`CostGrid`](runcost_core::CostGrid), where a
//! step is only charged when the path moves on to a cell of a different
//! value (runs of equal values are paid once). [`Charging`] picks whether
//! the entered or the departed cell pays.
//!
//! The search is an exhaustive branch-and-bound over all paths:
//!
//! - [`SearchEngine`] drives one search and returns a [`SearchOutcome`]
//! - [`Search`] is the per-search state and exposes the recursive
//!   [`explore`](Search::explore) step and its explicit-stack twin
//!   [`walk`](Search::walk)
//! - [`VisitedTracker`] holds the cells on the active path; [`Mark`] guards
//!   release them on backtrack
//! - [`BestResult`] is the running optimum
//! - [`Tracer`] observes the walk (used by tests and diagnostics)

mod best;
mod config;
mod engine;
mod tracer;
mod visited;

pub use best::BestResult;
pub use config::{Charging, SearchConfig, Strategy};
pub use engine::{Search, SearchEngine, SearchOutcome, SearchStats, solve};
pub use tracer::{NoTrace, Tracer};
pub use visited::{Mark, VisitedTracker};
