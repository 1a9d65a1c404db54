//! # featuresets
//!
//! Enumerates every combination of the CI feature flags and prints the build
//! matrix as a single JSON array on stdout. The feature list is fixed in
//! `src/features.rs`; there are no flags and no runtime input, so the output
//! is byte-identical on every run.

use clap::Parser;
use featuresets::{enumerate, matrix_json, validate_features, Cli, FEATURES};
use tracing::debug;

pub fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    validate_features(&FEATURES)?;
    let sets = enumerate(&FEATURES);
    debug!("generated {} feature sets", sets.len());

    println!("{}", matrix_json(&sets)?);
    Ok(())
}
