//! Configuration options for building treemap trees.
//!
//! This module provides the `TreemapOptions` struct which controls colour
//! assignment and how flat records are shaped into a hierarchy.

use serde::{Deserialize, Serialize};

use crate::builder::BuildMode;

/// Configuration options for a treemap tree and its builders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreemapOptions {
    /// Seed for node colours. `None` draws from system entropy.
    pub colour_seed: Option<u64>,

    /// Delimiter splitting a compound category string into path segments.
    pub category_delimiter: String,

    /// Whether publication years form the outermost level.
    pub build_mode: BuildMode,

    /// Name of the synthetic super-root created by builders.
    pub root_name: String,
}

impl Default for TreemapOptions {
    fn default() -> Self {
        Self {
            colour_seed: None,
            category_delimiter: ": ".to_string(),
            build_mode: BuildMode::default(),
            root_name: "root".to_string(),
        }
    }
}

impl TreemapOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a deterministic colour sequence.
    pub fn colour_seed(mut self, seed: u64) -> Self {
        self.colour_seed = Some(seed);
        self
    }

    /// Set the category delimiter.
    pub fn category_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.category_delimiter = delimiter.into();
        self
    }

    /// Set the build mode.
    pub fn build_mode(mut self, mode: BuildMode) -> Self {
        self.build_mode = mode;
        self
    }

    /// Set the super-root name.
    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }
}
