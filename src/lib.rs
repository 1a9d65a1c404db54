#![doc = include_str!("../README.md")]

pub mod cli;
pub use cli::Cli;
pub mod features;
pub use features::{validate_features, FEATURES};
pub mod matrix;
pub use matrix::{enumerate, matrix_json, FeatureSet};
