// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use subset_search::{Instance, SearchOutcome};

/// Build an instance from literal parts, panicking on invalid input.
pub fn instance(target: i64, weights: &[i64]) -> Instance {
    Instance::new(target, weights.to_vec()).expect("valid test instance")
}

/// The discovered solutions as plain weight lists, in discovery order.
pub fn solution_lists(outcome: &SearchOutcome) -> Vec<Vec<i64>> {
    outcome
        .solutions
        .iter()
        .map(|s| s.weights().to_vec())
        .collect()
}

/// The discovered solutions as weight lists, sorted for set comparison.
pub fn solution_set(outcome: &SearchOutcome) -> Vec<Vec<i64>> {
    let mut lists = solution_lists(outcome);
    lists.sort();
    lists
}
