// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error taxonomy for instance construction and batch processing.
//!
//! The search engine itself is infallible once it has a valid [`Instance`]:
//! every failure in this crate happens while *building* an instance
//! (generation size checks, description parsing, file access) or while
//! walking a batch directory. Overflow is checked once, at construction,
//! so search-time arithmetic never needs a fallible path.
//!
//! [`Instance`]: crate::instance::Instance

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by instance construction and batch processing.
#[derive(Debug, Error)]
pub enum Error {
    /// Generative mode was asked for a non-positive instance size.
    #[error("instance size cannot be nonpositive (got {n})")]
    InvalidSize { n: i64 },

    /// Generative mode was asked for a size too small for a meaningful search.
    #[error("instance size is too small (got {n}, need at least 3)")]
    TooSmall { n: i64 },

    /// An instance description was malformed.
    #[error("error while parsing instance description: {0}")]
    Parse(String),

    /// A referenced file or directory could not be read.
    #[error("cannot read {}: {}", .path.display(), .source)]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Summing the weights (or building the target) exceeded the `i64` range.
    #[error("weight sum exceeds the representable integer range")]
    Overflow,
}

impl Error {
    /// Build a [`Error::Path`] from a path reference and an I/O error.
    pub(crate) fn path(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::Path {
            path: path.to_path_buf(),
            source,
        }
    }
}
