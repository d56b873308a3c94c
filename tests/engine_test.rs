// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Engine property tests: soundness, completeness, determinism.
//!
//! The branch-and-prune walk is cross-checked against a plain `2^n`
//! enumeration on instances small enough to enumerate exhaustively, so a
//! pruning bug (a bound that cuts a feasible subtree) cannot hide behind
//! agreeing counts alone.

mod common;

use common::{instance, solution_lists, solution_set};
use rand::rngs::StdRng;
use rand::SeedableRng;
use subset_search::{search, Instance};

/// Every subset of `weights` summing to `target`, by unpruned enumeration.
///
/// Subsets are materialized the way the engine materializes them: included
/// values in ascending index order.
fn enumerate_unpruned(target: i64, weights: &[i64]) -> Vec<Vec<i64>> {
    let n = weights.len();
    assert!(n < 24, "unpruned enumeration is exponential");
    let mut found = Vec::new();
    for mask in 0u32..(1u32 << n) {
        let subset: Vec<i64> = (0..n)
            .filter(|&k| mask & (1 << k) != 0)
            .map(|k| weights[k])
            .collect();
        if subset.iter().sum::<i64>() == target {
            found.push(subset);
        }
    }
    found.sort();
    found
}

#[test]
fn test_agrees_with_unpruned_enumeration_on_generated_instances() {
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let generated = Instance::random(10, &mut rng).unwrap();
        let outcome = search(&generated);

        let expected = enumerate_unpruned(generated.target(), generated.weights());
        assert_eq!(
            solution_set(&outcome),
            expected,
            "mismatch for seed {seed} ({generated})"
        );
    }
}

#[test]
fn test_agrees_with_unpruned_enumeration_on_repeated_weights() {
    // Repeated weights make distinct index subsets with equal value lists;
    // both sides must report every one of them.
    let repeated = instance(6, &[4, 2, 2, 2, 1, 1]);
    let outcome = search(&repeated);
    assert_eq!(
        solution_set(&outcome),
        enumerate_unpruned(6, repeated.weights())
    );
}

#[test]
fn test_solutions_are_sound() {
    let outcome = search(&instance(17, &[12, 9, 8, 6, 5, 3, 2, 1]));
    assert!(!outcome.solutions.is_empty());
    for solution in &outcome.solutions {
        assert_eq!(solution.sum(), 17);
        assert!(!solution.is_empty());
    }
}

#[test]
fn test_no_duplicate_solutions_for_distinct_weights() {
    // With pairwise distinct weights, value lists identify index subsets,
    // so any duplicate would be a double-counted subset.
    let outcome = search(&instance(20, &[11, 9, 7, 5, 4, 3, 2, 1]));
    let mut lists = solution_lists(&outcome);
    let before = lists.len();
    lists.sort();
    lists.dedup();
    assert_eq!(lists.len(), before);
}

#[test]
fn test_two_runs_discover_in_the_same_order() {
    let fixed = instance(23, &[13, 11, 9, 8, 5, 4, 3, 2, 1]);
    let first = solution_lists(&search(&fixed));
    let second = solution_lists(&search(&fixed));
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_construction_order_of_weights_is_irrelevant() {
    // Sorting already-descending weights is a no-op, and an unsorted
    // construction ends up with the identical instance, so the search
    // results match list-for-list.
    let sorted = instance(9, &[8, 6, 3, 2, 1]);
    let shuffled = instance(9, &[2, 8, 1, 6, 3]);
    assert_eq!(sorted, shuffled);
    assert_eq!(
        solution_lists(&search(&sorted)),
        solution_lists(&search(&shuffled))
    );
}

#[test]
fn test_cap_is_respected() {
    // No practical instance reaches the 10M cap in a test; the invariant
    // still has to hold over a solution-rich search.
    let rich = instance(8, &[1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3]);
    let outcome = search(&rich);
    assert!(outcome.solutions.len() <= subset_search::SOLUTION_CAP);
    assert!(!outcome.solutions.saturated());
    assert_eq!(
        solution_set(&outcome),
        enumerate_unpruned(8, rich.weights())
    );
}
