// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The subset-sum problem instance.
//!
//! An [`Instance`] is an immutable value holding the target sum and the
//! multiset of candidate weights. Weights are strictly positive and are
//! sorted in descending order at construction. The sort is a
//! correctness-preserving performance optimization, not a semantic
//! requirement: considering large weights first makes the best-case
//! remaining sum shrink fastest, so infeasible branches are pruned earlier
//! in the recursion.
//!
//! Instances come from two sources:
//!
//! - **Generation** ([`Instance::random`]): weights `1..=n` with the target
//!   built by coin-flipping the inclusion of each non-first weight.
//! - **Description text** ([`Instance::from_description`], [`Instance::from_file`]):
//!   whitespace-delimited `count target w1 .. wcount`.
//!
//! The weight total is computed once here with checked arithmetic, so the
//! search engine can rely on `partial` and `remaining` (each a sum of a
//! subset of the weights) staying in range without runtime checks.

use crate::error::{Error, Result};
use rand::Rng;
use std::fmt;
use std::path::Path;

/// One subset-sum problem: a target plus a weight sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    /// The sum every reported solution must equal.
    target: i64,

    /// Strictly positive weights, sorted descending.
    weights: Vec<i64>,

    /// Sum of all weights, precomputed with overflow checking.
    total: i64,
}

impl Instance {
    /// Build an instance from explicit parts.
    ///
    /// Weights are sorted descending; a zero or negative weight is rejected,
    /// as is a weight total outside the `i64` range. No minimum length is
    /// enforced on this path; the `n > 2` constraint belongs to generative
    /// mode, where sizes are meaningful knobs rather than given data.
    pub fn new(target: i64, mut weights: Vec<i64>) -> Result<Self> {
        if let Some(&bad) = weights.iter().find(|&&w| w <= 0) {
            return Err(Error::Parse(format!(
                "weights must be strictly positive (got {bad})"
            )));
        }
        let total = weights
            .iter()
            .try_fold(0i64, |acc, &w| acc.checked_add(w))
            .ok_or(Error::Overflow)?;
        weights.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self {
            target,
            weights,
            total,
        })
    }

    /// Generate a pseudo-random instance of size `n`.
    ///
    /// Weights are `1..=n` (so `weights[0] = 1` before sorting) and the
    /// target starts at 1, adding each non-first weight with independent
    /// probability 1/2. The target is therefore always reachable, and for
    /// `n = 3` lies in `{1, 3, 4, 6}`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSize`] for `n <= 0`, [`Error::TooSmall`] for
    /// `n <= 2` (the search needs at least 3 weights to be meaningful).
    pub fn random<R: Rng + ?Sized>(n: i64, rng: &mut R) -> Result<Self> {
        if n <= 0 {
            return Err(Error::InvalidSize { n });
        }
        if n <= 2 {
            return Err(Error::TooSmall { n });
        }
        let weights: Vec<i64> = (1..=n).collect();
        let mut target: i64 = 1;
        for &w in &weights[1..] {
            if rng.random_bool(0.5) {
                target = target.checked_add(w).ok_or(Error::Overflow)?;
            }
        }
        Self::new(target, weights)
    }

    /// Parse an instance description.
    ///
    /// The format is whitespace-delimited: a positive element count, the
    /// target, then exactly `count` weights. Tokens beyond the declared
    /// count are ignored, matching the original scanner-based readers.
    pub fn from_description(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();

        let count_token = tokens
            .next()
            .ok_or_else(|| Error::Parse("missing element count".into()))?;
        let count: i64 = count_token
            .parse()
            .map_err(|_| Error::Parse(format!("invalid element count '{count_token}'")))?;
        if count <= 0 {
            return Err(Error::Parse(format!(
                "element count must be positive (got {count})"
            )));
        }

        let target_token = tokens
            .next()
            .ok_or_else(|| Error::Parse("missing target".into()))?;
        let target: i64 = target_token
            .parse()
            .map_err(|_| Error::Parse(format!("invalid target '{target_token}'")))?;

        // No preallocation from the declared count: a bogus huge count must
        // fail on the first missing weight, not on an allocation.
        let mut weights = Vec::new();
        for k in 0..count {
            let token = tokens
                .next()
                .ok_or_else(|| Error::Parse(format!("missing weight {} of {count}", k + 1)))?;
            let weight: i64 = token
                .parse()
                .map_err(|_| Error::Parse(format!("invalid weight '{token}'")))?;
            weights.push(weight);
        }

        Self::new(target, weights)
    }

    /// Load an instance description from a file.
    ///
    /// # Errors
    ///
    /// [`Error::Path`] if the file cannot be read, otherwise as
    /// [`Instance::from_description`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::path(path, e))?;
        Self::from_description(&text)
    }

    /// The target sum.
    pub fn target(&self) -> i64 {
        self.target
    }

    /// The weights, sorted descending.
    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    /// Number of weights.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True if the instance has no weights.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights. Pure; precomputed at construction.
    pub fn total(&self) -> i64 {
        self.total
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SSP(n = {}; target = {})", self.len(), self.target)
    }
}
