// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Batch processing of a directory of instance files.
//!
//! Every regular file with a `.txt` extension in the directory is loaded
//! as an instance description and solved independently. A file that fails
//! to load or parse is reported and skipped; its siblings still run. Only
//! the directory itself being unreadable aborts the batch.
//!
//! Entries are processed in directory order; no sorting is applied.

use crate::error::{Error, Result};
use crate::instance::Instance;
use crate::report;
use std::path::Path;

/// What a directory run did: one slot per file that matched the filter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files loaded and solved.
    pub solved: usize,
    /// Files that failed to load or parse and were skipped.
    pub skipped: usize,
}

/// Solve every `.txt` instance file in `dir`, isolating per-file failures.
///
/// # Errors
///
/// [`Error::Path`] if the directory cannot be read. Per-file failures are
/// never returned; they are logged and counted in the summary.
pub fn process_directory(dir: &Path) -> Result<BatchSummary> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::path(dir, e))?;
    let mut summary = BatchSummary::default();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "unreadable directory entry, skipping");
                summary.skipped += 1;
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }

        println!("Processing file: {}", path.display());
        match Instance::from_file(&path) {
            Ok(instance) => {
                report::solve_and_report(&instance);
                summary.solved += 1;
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping file");
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
