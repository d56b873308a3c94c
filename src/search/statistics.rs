// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters accumulated by the search engine while it walks the decision
//! tree. They are diagnostic only: no search decision depends on them.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// The events the engine counts, one slot each.
#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counters {
    /// Recursive calls made (nodes of the decision tree visited).
    Nodes,
    /// Subtrees cut by the feasibility/overshoot bound.
    PrunedBranches,
    /// Calls that ran out of weights without matching the target.
    DeadEnds,
    /// Exact matches appended to the solution set.
    SolutionsRecorded,
    /// Exact matches silently dropped because the set was at its cap.
    SolutionsDiscarded,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
