// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Branch-and-prune search engine.
//!
//! This module implements the exhaustive enumeration at the heart of the
//! crate: a depth-first walk over the binary inclusion/exclusion tree of
//! the instance weights, cut short wherever a feasibility bound proves a
//! subtree cannot contain a solution.
//!
//! # Algorithm
//!
//! Each recursive call decides the fate of one weight index `i`, carrying
//! three values:
//!
//! - `partial`: the sum of the weights already chosen among indices `< i`
//! - `remaining`: the sum of the undecided weights at indices `>= i`,
//!   i.e. the best case if everything left were included
//! - the stack of chosen indices (the inclusion record)
//!
//! In order, a call:
//!
//! 1. **Prunes** when `partial + remaining < target` (even including
//!    everything left falls short) or `partial > target` (already
//!    overshot). Because the weights are sorted descending, `remaining`
//!    shrinks fastest at the top of the tree, which is what makes the
//!    first bound bite early.
//! 2. **Records** an exact match when `partial == target`, then returns
//!    *without* recursing further: weights are strictly positive, so any
//!    extension of an exact match overshoots.
//! 3. **Returns** on exhaustion (`i == n`), a dead end rather than a solution.
//! 4. **Branches** otherwise: weight `i` leaves the undecided suffix, then
//!    the exclude branch runs before the include branch. That fixed order
//!    makes the discovery order deterministic for a fixed instance.
//!
//! The recursion carries no fallible operations. `partial` and `remaining`
//! are sums of disjoint subsets of the weights, so both are bounded by the
//! instance total, which [`Instance`] construction has already checked
//! against overflow.
//!
//! # Backtracking
//!
//! The original formulation threads a full-width inclusion vector through
//! the recursion, restoring each slot on return. The chosen-index stack
//! used here is the same restore-on-return discipline in a smaller state:
//! pushed before the include branch, popped after it, and always holding
//! ascending indices `< i`, which is exactly what solution
//! materialization needs.

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::instance::Instance;
use crate::solution::{Solution, SolutionSet};

/// Everything one search invocation produces.
#[derive(Debug)]
pub struct SearchOutcome {
    /// The capped, append-only collection of discovered solutions.
    pub solutions: SolutionSet,

    /// Diagnostic counters for the walk that produced them.
    pub statistics: Statistics,
}

/// One in-flight branch-and-prune search over a borrowed instance.
///
/// The engine is single-threaded and synchronous: every call either
/// prunes, records, or recurses to completion before returning. Create it
/// with [`SearchEngine::new`] and consume it with [`SearchEngine::run`],
/// or use the [`search`] convenience wrapper.
pub struct SearchEngine<'a> {
    instance: &'a Instance,

    /// Indices currently included on the path from the root, ascending.
    chosen: Vec<usize>,

    solutions: SolutionSet,
    statistics: Statistics,
}

impl<'a> SearchEngine<'a> {
    /// Create an engine for one search over `instance`.
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            chosen: Vec::with_capacity(instance.len()),
            solutions: SolutionSet::new(),
            statistics: Statistics::new(),
        }
    }

    /// Run the search to completion.
    ///
    /// Consumes the engine and returns the populated [`SearchOutcome`].
    /// Infallible: given a valid instance there is nothing left to fail.
    pub fn run(mut self) -> SearchOutcome {
        self.descend(0, 0, self.instance.total());

        tracing::debug!(
            nodes = self.statistics.get(Counters::Nodes),
            pruned = self.statistics.get(Counters::PrunedBranches),
            dead_ends = self.statistics.get(Counters::DeadEnds),
            recorded = self.statistics.get(Counters::SolutionsRecorded),
            discarded = self.statistics.get(Counters::SolutionsDiscarded),
            "search complete"
        );

        SearchOutcome {
            solutions: self.solutions,
            statistics: self.statistics,
        }
    }

    /// Decide index `i`, with `partial` already chosen below it and
    /// `remaining` still undecided at `i` and above.
    fn descend(&mut self, i: usize, partial: i64, remaining: i64) {
        self.statistics.increment(Counters::Nodes);
        let target = self.instance.target();

        if partial + remaining < target || partial > target {
            self.statistics.increment(Counters::PrunedBranches);
            return;
        }

        if partial == target {
            let solution = Solution::from_indices(&self.chosen, self.instance.weights());
            if self.solutions.push(solution) {
                self.statistics.increment(Counters::SolutionsRecorded);
            } else {
                self.statistics.increment(Counters::SolutionsDiscarded);
            }
            return;
        }

        let Some(&weight) = self.instance.weights().get(i) else {
            self.statistics.increment(Counters::DeadEnds);
            return;
        };

        // Weight i is no longer part of the undecided suffix in either branch.
        let remaining = remaining - weight;

        self.descend(i + 1, partial, remaining);

        self.chosen.push(i);
        self.descend(i + 1, partial + weight, remaining);
        self.chosen.pop();
    }
}

/// Enumerate every subset of `instance`'s weights summing to its target.
///
/// Discovery order is deterministic: depth-first, exclude branch before
/// include branch at every level of the (descending-sorted) weight
/// sequence.
pub fn search(instance: &Instance) -> SearchOutcome {
    SearchEngine::new(instance).run()
}
