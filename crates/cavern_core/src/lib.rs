//! # CAVERN Core
//!
//! Flat, single-owner wall/floor grids for cave generation.
//!
//! ## Architecture Rules
//!
//! 1. **One buffer, one owner** - A `Grid` owns its cells; callers borrow them read-only
//! 2. **Flat indexing** - `index = x * width + y`, with `x = index / width` and `y = index % width`
//! 3. **Pass-atomic updates** - Whole-grid rules read one buffer and write another
//!
//! ## Example
//!
//! ```rust
//! use cavern_core::{CellState, EdgePolicy, Grid};
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! grid.set(12, CellState::Wall).unwrap();
//!
//! assert_eq!(grid.coords(12), (2, 2));
//! assert_eq!(grid.wall_count(), 1);
//! assert_eq!(grid.alive_neighbours(13, EdgePolicy::Clip), 1);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod grid;
pub mod memory;
pub mod sync;

pub use error::{CaveError, CaveResult};
pub use grid::{CellState, EdgePolicy, Grid, Neighbours};
pub use memory::VisitedFlags;
pub use sync::DoubleBufferedGrid;
