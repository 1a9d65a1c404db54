use std::collections::HashSet;

use anyhow::{bail, Result};

/// The crate features exercised by the CI build matrix, in the order they
/// appear in combination output. Fixed at edit time; never mutated at runtime.
pub const FEATURES: [&str; 2] = ["gcp", "icu"];

/// The feature whose presence switches the base image away from "native".
pub const ICU: &str = "icu";

/// Checks the feature list for duplicate entries before any output is
/// produced. A duplicate would emit duplicate matrix rows, so it is treated
/// as a configuration error and reported with the offending name.
pub fn validate_features(features: &[&str]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in features {
        if !seen.insert(name) {
            bail!("duplicate feature name in build matrix list: {}", name);
        }
    }
    Ok(())
}
