//! # CAVERN Procedural Generation
//!
//! Deterministic cave generation on a flat wall/floor grid.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed and configuration always produce the same cave
//! 2. **Pass-atomic**: Smoothing never reads a cell written in the same pass
//! 3. **Ordered culling**: Walls are culled before floors, always
//! 4. **Single call**: Seeding, smoothing and culling run to completion inside `generate`
//!
//! ## Core Components
//!
//! - `CaveSeed`: Seed and engine construction
//! - `NoiseSeeder`: Random initial walls
//! - `Smoother`: Cellular-automaton smoothing
//! - `flood_region`: Breadth-first region discovery
//! - `cull_regions`: Small-fragment removal
//! - `CaveGenerator`: The whole pipeline
//!
//! ## Example
//!
//! ```rust
//! use cavern_procedural::{generate, CaveConfig, CaveGenerator, CaveSeed};
//!
//! // All defaults
//! let cave = generate(64, 48).unwrap();
//! assert_eq!(cave.cells().len(), 64 * 48);
//!
//! // Reproducible
//! let config = CaveConfig::new(64, 48).with_seed(CaveSeed::new(1));
//! let a = CaveGenerator::new(config.clone()).unwrap().generate().unwrap();
//! let b = CaveGenerator::new(config).unwrap().generate().unwrap();
//! assert_eq!(a.cells(), b.cells());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod culling;
pub mod generator;
pub mod noise;
pub mod region;
pub mod seed;
pub mod smoothing;

pub use config::CaveConfig;
pub use culling::{cull_fragments, cull_regions, CullReport, FragmentReport};
pub use generator::{generate, Cave, CaveGenerator, GenerationStats};
pub use noise::{seed_noise, AliveChance, NoiseSeeder};
pub use region::{find_regions, flood_region, region_at, Region};
pub use seed::CaveSeed;
pub use smoothing::{Smoother, SmoothingRule, SmoothingStats};
