//! # CAVERN
//!
//! The front end of the cave generator.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        CAVERN                                │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  ┌────────────────┐       ┌──────────────────────┐           │
//! │  │  cavern_core   │──────>│  cavern_procedural   │           │
//! │  │                │       │                      │           │
//! │  │  • Grid        │       │  • Noise seeding     │           │
//! │  │  • Neighbours  │       │  • Smoothing         │           │
//! │  │  • Visited     │       │  • Flood fill        │           │
//! │  │  • Dbl buffer  │       │  • Culling           │           │
//! │  └────────────────┘       └──────────┬───────────┘           │
//! │                                      │                       │
//! │                           ┌──────────▼───────────┐           │
//! │                           │  cavern (this crate) │           │
//! │                           │  • ASCII render      │           │
//! │                           │  • cave_demo         │           │
//! │                           └──────────────────────┘           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cavern::procedural::{CaveConfig, CaveGenerator, CaveSeed};
//! use cavern::render::render_default;
//!
//! let config = CaveConfig::new(40, 20).with_seed(CaveSeed::new(1));
//! let cave = CaveGenerator::new(config).unwrap().generate().unwrap();
//!
//! let map = render_default(cave.grid());
//! assert_eq!(map.lines().count(), 20);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod render;

pub use cavern_core as core;
pub use cavern_procedural as procedural;

pub use render::{render_ascii, render_default, FLOOR_GLYPH, WALL_GLYPH};
