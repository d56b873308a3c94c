// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Human-readable reporting of one solve.
//!
//! The reporting surface is deliberately small: an instance header, the
//! weight listing, the timed search, then either every solution (when
//! there are fewer than [`DISPLAY_THRESHOLD`]) or just the count. Elapsed
//! wall-clock time covers the search call only, not instance construction
//! or printing.
//!
//! A saturated solution set is reported as a lower bound, so a count that
//! happens to equal the cap is never mistaken for an exact total.

use crate::instance::Instance;
use crate::search::{self, SearchOutcome};
use crate::solution::SolutionSet;
use std::io::Write;
use std::time::Instant;

/// Below this many solutions, each one is printed; at or above it, only
/// the count is.
pub const DISPLAY_THRESHOLD: usize = 10;

/// Run one search over `instance` and print the report to stdout.
///
/// Returns the outcome so callers (batch mode, tests) can inspect it.
pub fn solve_and_report(instance: &Instance) -> SearchOutcome {
    println!("{instance}");
    println!("{}", weights_line(instance));
    println!("Target is {}", instance.target());
    println!();

    print!("Running bp ... ");
    let _ = std::io::stdout().flush();

    let start = Instant::now();
    let outcome = search::search(instance);
    let elapsed = start.elapsed();

    println!("done!");
    for line in solution_lines(&outcome.solutions) {
        println!("{line}");
    }
    println!("elapsed time {:.6}", elapsed.as_secs_f64());
    println!();

    tracing::info!(
        n = instance.len(),
        target_sum = instance.target(),
        solutions = outcome.solutions.len(),
        saturated = outcome.solutions.saturated(),
        elapsed_secs = elapsed.as_secs_f64(),
        "instance solved"
    );

    outcome
}

/// The `Original set = [...]` line.
fn weights_line(instance: &Instance) -> String {
    let mut line = String::from("Original set = [");
    for (i, w) in instance.weights().iter().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        line.push_str(&w.to_string());
    }
    line.push(']');
    line
}

/// The solution listing, or the count line when there are too many to list.
fn solution_lines(solutions: &SolutionSet) -> Vec<String> {
    if solutions.len() < DISPLAY_THRESHOLD {
        solutions.iter().map(|s| s.to_string()).collect()
    } else if solutions.saturated() {
        vec![format!(
            "bp found at least {} solutions (cap reached)",
            solutions.len()
        )]
    } else {
        vec![format!("bp found {} solutions", solutions.len())]
    }
}
