//! Search settings: pruning, charging rule and traversal strategy.

use runcost_core::Cost;

/// How the path tree is walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Native recursion, one call frame per path cell. Path length is
    /// bounded by the cell count, so large grids can exhaust the thread
    /// stack.
    Recursive,
    /// Heap-allocated frame stack. Safe for any grid size.
    #[default]
    Stack,
}

/// Which cell pays when a path steps onto a neighbour of a different value.
///
/// Under both rules a step between equal values is free and the goal cell
/// is paid once more on arrival.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Charging {
    /// The neighbour being entered pays. `1 2` costs `2 + 2 = 4`.
    #[default]
    Entered,
    /// The cell being left pays. `1 2` costs `1 + 2 = 3`.
    Departed,
}

impl Charging {
    /// Accumulated cost after stepping from a cell valued `here` onto a
    /// neighbour valued `next`.
    #[inline]
    pub fn step(self, acc: u64, here: Cost, next: Cost) -> u64 {
        if next == here {
            return acc;
        }
        match self {
            Charging::Entered => acc + next.total(),
            Charging::Departed => acc + here.total(),
        }
    }

    /// Lower bound on the final cost of any completion of a path standing
    /// on a cell valued `here` with `acc` charged so far.
    ///
    /// Entered: later steps only add, and the goal is paid on arrival.
    /// Departed: the run holding `here` is paid on leaving it, or ends at
    /// the goal with the same value.
    #[inline]
    pub fn bound(self, acc: u64, here: Cost, goal: Cost) -> u64 {
        match self {
            Charging::Entered => acc + goal.total(),
            Charging::Departed => acc + here.total(),
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Abandon branches whose lower bound cannot beat the best path found
    /// so far. Disabling it enumerates every self-avoiding path.
    pub pruning: bool,
    pub charging: Charging,
    pub strategy: Strategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: true,
            charging: Charging::default(),
            strategy: Strategy::default(),
        }
    }
}

impl SearchConfig {
    /// Exhaustive enumeration, no pruning.
    pub fn exhaustive() -> Self {
        Self {
            pruning: false,
            ..Self::default()
        }
    }

    /// Return a copy using `strategy`.
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// Return a copy using `charging`.
    pub fn with_charging(self, charging: Charging) -> Self {
        Self { charging, ..self }
    }
}
