//! # Pass-Atomic Grid Updates
//!
//! ## The Problem
//!
//! ```text
//! Pass N, updating in place:
//!   cell 0 changes
//!   cell 1 counts its neighbours -> sees the NEW cell 0
//!
//! Later cells read a mix of pass N-1 and pass N state.
//! ```
//!
//! ## The Solution: Double Buffering
//!
//! ```text
//! Pass N:
//!   Read  from Buffer A (pass N-1 state)
//!   Write to   Buffer B
//!
//! Pass N+1:
//!   SWAP
//!   Read  from Buffer B
//!   Write to   Buffer A
//! ```

mod double_buffer;

pub use double_buffer::DoubleBufferedGrid;
