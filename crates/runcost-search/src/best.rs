//! The running optimum of a search.

/// The cheapest complete path cost found so far in one search.
///
/// Starts empty ("no path yet") instead of at a sentinel value, so the
/// pruning comparison can never overflow. The stored value only ever
/// decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestResult {
    best: Option<u64>,
}

impl BestResult {
    /// An empty result.
    pub const fn new() -> Self {
        Self { best: None }
    }

    /// The best cost so far, if any path has completed.
    #[inline]
    pub fn get(&self) -> Option<u64> {
        self.best
    }

    /// Whether a path costing at least `bound` could still improve on the
    /// current best.
    #[inline]
    pub fn admits(&self, bound: u64) -> bool {
        self.best.is_none_or(|b| bound < b)
    }

    /// Record a completed path. Returns `true` if it became the new best.
    pub fn offer(&mut self, cost: u64) -> bool {
        if self.admits(cost) {
            self.best = Some(cost);
            true
        } else {
            false
        }
    }
}
