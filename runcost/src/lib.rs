//! runcost: reads a cost grid and prints the cheapest run-charged path
//! cost from its top-left to its bottom-right corner.

pub mod load;

use std::io::{self, Read, Write};

use runcost_search::SearchEngine;
use thiserror::Error;

pub use load::{LoadError, load_grid, load_grid_from};

/// Errors surfaced by [`run`].
#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid input: {0}")]
    Load(#[from] LoadError),
    /// Unreachable for any grid the loader accepts.
    #[error("no path between the grid corners")]
    NoPath,
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Load a grid from `input`, search it, and write the minimum cost to
/// `out` followed by a newline. Returns the cost written.
pub fn run(input: impl Read, mut out: impl Write) -> Result<u64, RunError> {
    let grid = load_grid_from(input)?;
    let outcome = SearchEngine::new(&grid).run();
    log::info!(
        "{}x{} grid: {} prefixes examined, {} pruned",
        grid.rows(),
        grid.cols(),
        outcome.stats.expanded,
        outcome.stats.pruned,
    );
    let cost = outcome.best.ok_or(RunError::NoPath)?;
    writeln!(out, "{cost}")?;
    out.flush()?;
    Ok(cost)
}
