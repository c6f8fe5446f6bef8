//! # Scratch Memory
//!
//! Per-sweep buffers that live only as long as one pipeline stage.
//!
//! ## Design Philosophy
//!
//! A scratch buffer is allocated once per sweep, sized to the grid,
//! and dropped when the sweep ends. Nothing here outlives a generation call.

mod visited;

pub use visited::VisitedFlags;
