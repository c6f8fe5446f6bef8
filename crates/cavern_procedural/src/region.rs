//! # Flood-Fill Region Discovery
//!
//! A region is a maximal 8-connected set of cells sharing one state.
//!
//! Discovery is a breadth-first walk over an explicit `VecDeque` worklist
//! with a visited-flags buffer sized to the grid. There is no recursion, so
//! region size is bounded only by grid size, never by stack depth.
//!
//! ```text
//! start ──► mark visited ──► queue
//!                              │
//!            ┌─────────────────┘
//!            ▼
//!   pop tile, record it
//!   for each in-bounds neighbour:
//!       same state && not visited ──► mark visited, enqueue
//! ```

use std::collections::VecDeque;

use cavern_core::{CaveError, CaveResult, CellState, EdgePolicy, Grid, VisitedFlags};

/// One connected component of uniform cell state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// Shared state of every member.
    state: CellState,
    /// Member indices in discovery (BFS) order.
    cells: Vec<usize>,
}

impl Region {
    /// State shared by all members.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> CellState {
        self.state
    }

    /// Number of member cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the region has no cells.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Member indices in discovery order.
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.cells
    }

    /// Member indices in ascending order.
    #[must_use]
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut sorted = self.cells.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Returns true if `index` is a member. Linear in region size.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    /// Consumes the region, returning its indices.
    #[must_use]
    pub fn into_indices(self) -> Vec<usize> {
        self.cells
    }
}

/// Discovers the region containing `start`.
///
/// Every member is marked in `visited`. Returns `None` if `start` is out of
/// range or was already visited in this sweep.
pub fn flood_region(
    grid: &Grid,
    start: usize,
    visited: &mut VisitedFlags,
    policy: EdgePolicy,
) -> Option<Region> {
    let state = grid.state(start)?;
    if !visited.try_mark(start) {
        return None;
    }

    let wall = state.is_wall();
    let cells_view = grid.cells();
    let mut cells = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(tile) = queue.pop_front() {
        cells.push(tile);

        for neighbour in grid.neighbours(tile, policy) {
            if cells_view[neighbour] == wall && visited.try_mark(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }

    Some(Region { state, cells })
}

/// Discovers the region containing `start` with a private visited buffer.
///
/// # Errors
///
/// Returns `IndexOutOfBounds` if `start` is not a valid index.
pub fn region_at(grid: &Grid, start: usize, policy: EdgePolicy) -> CaveResult<Region> {
    let mut visited = VisitedFlags::new(grid.size());
    flood_region(grid, start, &mut visited, policy).ok_or(CaveError::IndexOutOfBounds {
        index: start,
        size: grid.size(),
    })
}

/// Discovers every region of the given state, in scan order of their
/// first cell.
#[must_use]
pub fn find_regions(grid: &Grid, state: CellState, policy: EdgePolicy) -> Vec<Region> {
    let mut visited = VisitedFlags::new(grid.size());
    let mut regions = Vec::new();

    for index in 0..grid.size() {
        if visited.is_visited(index) || grid.state(index) != Some(state) {
            continue;
        }
        if let Some(region) = flood_region(grid, index, &mut visited, policy) {
            regions.push(region);
        }
    }

    regions
}
