//! # Generation Configuration
//!
//! All generation parameters are plain scalars fixed before generation.
//! They can be built in code or loaded once from a TOML file:
//!
//! ```toml
//! width = 100
//! height = 450
//! alive_chance_percent = 45
//! smoothing_iterations = 6
//! seed = 1
//! wall_threshold = 50
//! floor_threshold = 50
//! cull_fragments = true
//! edge_policy = "clip"
//! ```
//!
//! Only `width` and `height` are required.

use std::path::Path;

use cavern_core::{CaveError, CaveResult, EdgePolicy, Grid};
use serde::{Deserialize, Serialize};

use crate::seed::CaveSeed;

/// Default wall chance in percent.
pub const DEFAULT_ALIVE_CHANCE: u32 = 44;
/// Default number of smoothing iterations (one more pass is always run).
pub const DEFAULT_SMOOTHING_ITERATIONS: usize = 4;
/// Default minimum wall region size.
pub const DEFAULT_WALL_THRESHOLD: usize = 50;
/// Default minimum floor region size.
pub const DEFAULT_FLOOR_THRESHOLD: usize = 50;

const fn default_alive_chance() -> u32 {
    DEFAULT_ALIVE_CHANCE
}

const fn default_smoothing_iterations() -> usize {
    DEFAULT_SMOOTHING_ITERATIONS
}

const fn default_wall_threshold() -> usize {
    DEFAULT_WALL_THRESHOLD
}

const fn default_floor_threshold() -> usize {
    DEFAULT_FLOOR_THRESHOLD
}

const fn default_cull_fragments() -> bool {
    true
}

/// Parameters for one cave.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaveConfig {
    /// Cells per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Chance in percent that a seeded cell is a wall. Values above 100 are
    /// clamped to 100 when the generator is built.
    #[serde(default = "default_alive_chance")]
    pub alive_chance_percent: u32,
    /// Smoothing iterations; `smoothing_iterations + 1` passes are run.
    #[serde(default = "default_smoothing_iterations")]
    pub smoothing_iterations: usize,
    /// Random seed.
    #[serde(default)]
    pub seed: CaveSeed,
    /// Wall regions smaller than this become floor.
    #[serde(default = "default_wall_threshold")]
    pub wall_threshold: usize,
    /// Floor regions smaller than this become wall.
    #[serde(default = "default_floor_threshold")]
    pub floor_threshold: usize,
    /// Whether the culling stage runs at all.
    #[serde(default = "default_cull_fragments")]
    pub cull_fragments: bool,
    /// Edge handling for neighbour lookups.
    #[serde(default)]
    pub edge_policy: EdgePolicy,
}

impl CaveConfig {
    /// Creates a configuration with default parameters.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            alive_chance_percent: DEFAULT_ALIVE_CHANCE,
            smoothing_iterations: DEFAULT_SMOOTHING_ITERATIONS,
            seed: CaveSeed::default(),
            wall_threshold: DEFAULT_WALL_THRESHOLD,
            floor_threshold: DEFAULT_FLOOR_THRESHOLD,
            cull_fragments: true,
            edge_policy: EdgePolicy::Clip,
        }
    }

    /// Sets the wall chance in percent.
    #[must_use]
    pub const fn with_alive_chance(mut self, percent: u32) -> Self {
        self.alive_chance_percent = percent;
        self
    }

    /// Sets the number of smoothing iterations.
    #[must_use]
    pub const fn with_smoothing_iterations(mut self, iterations: usize) -> Self {
        self.smoothing_iterations = iterations;
        self
    }

    /// Sets the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: CaveSeed) -> Self {
        self.seed = seed;
        self
    }

    /// Sets both region thresholds.
    #[must_use]
    pub const fn with_thresholds(mut self, wall: usize, floor: usize) -> Self {
        self.wall_threshold = wall;
        self.floor_threshold = floor;
        self
    }

    /// Enables or disables the culling stage.
    #[must_use]
    pub const fn with_culling(mut self, enabled: bool) -> Self {
        self.cull_fragments = enabled;
        self
    }

    /// Sets the edge policy.
    #[must_use]
    pub const fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Number of smoothing passes the generator runs.
    #[inline]
    #[must_use]
    pub const fn smoothing_passes(&self) -> usize {
        self.smoothing_iterations.saturating_add(1)
    }

    /// Checks the configuration and returns the grid size.
    ///
    /// # Errors
    ///
    /// Returns an error for zero or overflowing dimensions.
    pub fn validate(&self) -> CaveResult<usize> {
        Grid::checked_size(self.width, self.height)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for malformed TOML, unknown or mistyped
    /// fields (including negative numbers), and invalid dimensions.
    pub fn from_toml_str(source: &str) -> CaveResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| CaveError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigRead` if the file cannot be read, otherwise as
    /// [`CaveConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> CaveResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| CaveError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }
}
