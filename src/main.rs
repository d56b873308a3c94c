// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `ssp` binary: solve subset-sum instances from the command line.
//!
//! The single positional argument selects the mode:
//!
//! - an existing regular file is loaded as one instance description;
//! - an existing directory is batch-processed (every `.txt` file inside);
//! - otherwise, an integer is the size of a generated instance.
//!
//! Path existence wins over integer parsing, so a file literally named
//! `7` is solved as a file, not used as a size.

use anyhow::Context;
use clap::Parser;
use std::path::Path;
use subset_search::{batch, report, Instance};
use tracing_subscriber::EnvFilter;

/// Exhaustive branch-and-prune subset-sum enumeration.
#[derive(Debug, Parser)]
#[command(name = "ssp", version, about)]
struct Cli {
    /// Instance file, directory of `.txt` instances, or a size (> 2) for
    /// a generated instance
    input: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let path = Path::new(&cli.input);

    if path.is_file() {
        let instance = Instance::from_file(path)
            .with_context(|| format!("loading instance from {}", path.display()))?;
        report::solve_and_report(&instance);
    } else if path.is_dir() {
        let summary = batch::process_directory(path)?;
        tracing::info!(
            solved = summary.solved,
            skipped = summary.skipped,
            "batch complete"
        );
    } else if let Ok(n) = cli.input.parse::<i64>() {
        let instance = Instance::random(n, &mut rand::rng())?;
        report::solve_and_report(&instance);
    } else {
        anyhow::bail!(
            "'{}' is not an integer or a valid file/directory",
            cli.input
        );
    }

    Ok(())
}
