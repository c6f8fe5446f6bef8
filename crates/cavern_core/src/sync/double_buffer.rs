//! # Double-Buffered Grid
//!
//! Two same-shape grids: a front buffer that is only read during a pass and a
//! back buffer that is only written.
//!
//! ```text
//!        ┌─────────────────────────────┐
//!        │     DoubleBufferedGrid      │
//!        │                             │
//!        │  ┌─────────┐  ┌─────────┐   │
//!        │  │ Grid A  │  │ Grid B  │   │
//!        │  └────┬────┘  └────┬────┘   │
//!        │       │            │        │
//!        │  ┌────┴────────────┴────┐   │
//!        │  │  front index (0/1)   │   │
//!        │  └──────────────────────┘   │
//!        └─────────────────────────────┘
//!                      │
//!           ┌──────────┴──────────┐
//!           ▼                     ▼
//!     ┌────────────┐       ┌────────────┐
//!     │ front()    │       │ back_mut() │
//!     │ (previous) │       │ (next)     │
//!     └────────────┘       └────────────┘
//! ```

use crate::grid::Grid;

/// A grid with a read buffer and a write buffer.
///
/// ## Usage
///
/// ```rust
/// use cavern_core::{CellState, DoubleBufferedGrid, Grid};
///
/// let mut buffers = DoubleBufferedGrid::new(Grid::new(3, 3).unwrap());
///
/// let (front, back) = buffers.split();
/// for index in 0..front.size() {
///     back.cells_mut()[index] = !front.cells()[index];
/// }
/// buffers.swap();
///
/// assert_eq!(buffers.front().state(0), Some(CellState::Wall));
/// ```
#[derive(Clone, Debug)]
pub struct DoubleBufferedGrid {
    /// The two buffers.
    buffers: [Grid; 2],
    /// Index of the current front (read) buffer.
    front: usize,
    /// Number of completed swaps.
    swaps: usize,
}

impl DoubleBufferedGrid {
    /// Wraps `grid` as the front buffer. The back buffer starts as a copy.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let back = grid.clone();
        Self {
            buffers: [grid, back],
            front: 0,
            swaps: 0,
        }
    }

    /// The buffer holding the last completed state.
    #[inline]
    #[must_use]
    pub fn front(&self) -> &Grid {
        &self.buffers[self.front]
    }

    /// The buffer the next pass writes into.
    #[inline]
    pub fn back_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.front ^ 1]
    }

    /// Borrows the front buffer for reading and the back buffer for writing.
    #[inline]
    pub fn split(&mut self) -> (&Grid, &mut Grid) {
        let (first, second) = self.buffers.split_at_mut(1);
        if self.front == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        }
    }

    /// Publishes the back buffer as the new front.
    #[inline]
    pub fn swap(&mut self) {
        self.front ^= 1;
        self.swaps += 1;
    }

    /// Number of swaps performed so far.
    #[inline]
    #[must_use]
    pub const fn swap_count(&self) -> usize {
        self.swaps
    }

    /// Consumes the pair, keeping only the front buffer.
    #[must_use]
    pub fn into_front(self) -> Grid {
        let [first, second] = self.buffers;
        if self.front == 0 {
            first
        } else {
            second
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;

    #[test]
    fn test_back_starts_as_copy() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(1, CellState::Wall).unwrap();

        let mut buffers = DoubleBufferedGrid::new(grid.clone());
        assert_eq!(*buffers.back_mut(), grid);
    }

    #[test]
    fn test_writes_invisible_until_swap() {
        let mut buffers = DoubleBufferedGrid::new(Grid::new(2, 2).unwrap());

        buffers.back_mut().set(0, CellState::Wall).unwrap();
        assert_eq!(buffers.front().state(0), Some(CellState::Floor));

        buffers.swap();
        assert_eq!(buffers.front().state(0), Some(CellState::Wall));
        assert_eq!(buffers.swap_count(), 1);
    }

    #[test]
    fn test_split_alternates() {
        let mut buffers = DoubleBufferedGrid::new(Grid::new(2, 1).unwrap());

        for _ in 0..3 {
            let (front, back) = buffers.split();
            let flipped: Vec<bool> = front.cells().iter().map(|alive| !alive).collect();
            back.cells_mut().copy_from_slice(&flipped);
            buffers.swap();
        }

        // Three inversions of an all-floor grid
        assert_eq!(buffers.into_front().wall_count(), 2);
    }
}
