//! # Cave Generator
//!
//! Runs the whole pipeline in one call:
//!
//! ```text
//! Seeding ──► Smoothing (iterations + 1 passes) ──► Cull walls ──► Cull floors
//! ```
//!
//! The generator owns the grid while it works and hands the finished grid
//! to the caller inside a [`Cave`]. The random engine lives only for the
//! duration of the call.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use cavern_core::{CaveResult, Grid};
use tracing::{debug, info, warn};

use crate::config::CaveConfig;
use crate::culling::{cull_fragments, FragmentReport};
use crate::noise::{AliveChance, NoiseSeeder};
use crate::region::Region;
use crate::seed::CaveSeed;
use crate::smoothing::{Smoother, SmoothingStats};

/// Statistics collected while generating one cave.
#[derive(Clone, Debug)]
pub struct GenerationStats {
    /// Seed the cave was generated from.
    pub seed: CaveSeed,
    /// Walls placed by noise seeding.
    pub walls_seeded: usize,
    /// Per-pass smoothing changes.
    pub smoothing: SmoothingStats,
    /// Culling reports, if culling ran.
    pub fragments: Option<FragmentReport>,
    /// Wall-clock time of the whole pipeline.
    pub elapsed: Duration,
}

/// A finished cave.
///
/// Owns the final grid; callers read it through borrowed views.
#[derive(Clone, Debug)]
pub struct Cave {
    /// The finished grid.
    grid: Grid,
    /// How it was made.
    stats: GenerationStats,
}

impl Cave {
    /// The finished grid.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The finished flat buffer, `index = x * width + y`, `true` = wall.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        self.grid.cells()
    }

    /// Cells per row.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Generation statistics.
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Wall regions that survived the wall sweep.
    ///
    /// These reflect the grid as it stood after the wall sweep; the floor
    /// sweep that follows may fill small rooms and join some of them.
    #[must_use]
    pub fn wall_regions(&self) -> &[Region] {
        match &self.stats.fragments {
            Some(report) => &report.walls.retained,
            None => &[],
        }
    }

    /// Consumes the cave, returning the grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Generates caves from a validated configuration.
///
/// # Example
///
/// ```rust
/// use cavern_procedural::{CaveConfig, CaveGenerator, CaveSeed};
///
/// let config = CaveConfig::new(100, 450)
///     .with_alive_chance(45)
///     .with_smoothing_iterations(6)
///     .with_seed(CaveSeed::new(1));
///
/// let cave = CaveGenerator::new(config).unwrap().generate().unwrap();
/// assert_eq!(cave.cells().len(), 45_000);
/// ```
#[derive(Clone, Debug)]
pub struct CaveGenerator {
    /// The configuration, validated at construction.
    config: CaveConfig,
    /// Clamped wall chance.
    chance: AliveChance,
}

impl CaveGenerator {
    /// Validates `config` and prepares a generator.
    ///
    /// # Errors
    ///
    /// Returns an error for zero or overflowing dimensions.
    pub fn new(config: CaveConfig) -> CaveResult<Self> {
        config.validate()?;

        let chance = AliveChance::clamped(config.alive_chance_percent);
        if u32::from(chance.percent()) != config.alive_chance_percent {
            warn!(
                requested = config.alive_chance_percent,
                clamped = chance.percent(),
                "alive chance above 100%, every seeded cell will be a wall"
            );
        }

        Ok(Self { config, chance })
    }

    /// The configuration in use.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &CaveConfig {
        &self.config
    }

    /// Runs the pipeline.
    ///
    /// Calling this twice yields bit-identical grids.
    ///
    /// # Errors
    ///
    /// Returns an error only if grid allocation parameters are invalid,
    /// which `new` already rules out.
    pub fn generate(&self) -> CaveResult<Cave> {
        let config = &self.config;
        let start = Instant::now();
        let mut grid = Grid::new(config.width, config.height)?;

        debug!(
            width = config.width,
            height = config.height,
            seed = config.seed.value(),
            alive_chance = self.chance.percent(),
            "generating cave"
        );

        let walls_seeded = NoiseSeeder::new(config.seed, self.chance).fill(&mut grid);
        debug!(walls = walls_seeded, "noise seeded");

        let smoothing =
            Smoother::new(config.edge_policy).run(&mut grid, config.smoothing_passes());
        debug!(
            passes = smoothing.passes(),
            changed = smoothing.total_changed(),
            last_pass_changed = smoothing.last_changed(),
            "smoothing complete"
        );

        let fragments = if config.cull_fragments {
            let report = cull_fragments(
                &mut grid,
                config.wall_threshold,
                config.floor_threshold,
                config.edge_policy,
            );
            debug!(
                wall_regions = report.walls.regions_found,
                walls_culled = report.walls.regions_culled,
                floor_regions = report.floors.regions_found,
                floors_culled = report.floors.regions_culled,
                "fragments culled"
            );
            Some(report)
        } else {
            None
        };

        let elapsed = start.elapsed();
        info!(
            width = config.width,
            height = config.height,
            walls = grid.wall_count(),
            elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            "cave generated"
        );

        Ok(Cave {
            grid,
            stats: GenerationStats {
                seed: config.seed,
                walls_seeded,
                smoothing,
                fragments,
                elapsed,
            },
        })
    }
}

/// Generates a cave with every parameter at its default.
///
/// # Errors
///
/// Returns an error for zero or overflowing dimensions.
pub fn generate(width: usize, height: usize) -> CaveResult<Cave> {
    CaveGenerator::new(CaveConfig::new(width, height))?.generate()
}
