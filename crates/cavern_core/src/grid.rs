//! # Cell Grid
//!
//! The wall/floor map is a dense, flat array of booleans.
//!
//! ## Layout
//!
//! ```text
//! index = x * width + y
//!
//!   x = index / width   (row, 0..height)
//!   y = index % width   (column, 0..width)
//! ```
//!
//! `true` is a wall ("alive"), `false` is floor ("dead").
//!
//! ## Neighbourhood
//!
//! Every rule in the pipeline works on the fixed 3x3 Moore neighbourhood,
//! the eight cells surrounding a target cell. How the grid edge is treated is
//! decided by [`EdgePolicy`].

use serde::{Deserialize, Serialize};

use crate::error::{CaveError, CaveResult};

/// Offsets of the eight Moore neighbours, in scan order.
#[rustfmt::skip]
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// State of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// Passable floor (`false`).
    Floor,
    /// Impassable wall (`true`).
    Wall,
}

impl CellState {
    /// Converts a raw buffer value.
    #[inline]
    #[must_use]
    pub const fn from_alive(alive: bool) -> Self {
        if alive {
            Self::Wall
        } else {
            Self::Floor
        }
    }

    /// Returns the raw buffer value (`true` for walls).
    #[inline]
    #[must_use]
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// Returns the opposite state.
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Floor => Self::Wall,
            Self::Wall => Self::Floor,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        Self::from_alive(alive)
    }
}

impl From<CellState> for bool {
    fn from(state: CellState) -> Self {
        state.is_wall()
    }
}

/// How neighbour lookups treat the edge of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Both coordinates must stay inside the grid. Off-grid neighbours do
    /// not exist.
    #[default]
    Clip,
    /// Only the flattened index is range-checked, so a cell at the end of a
    /// row sees the start of the next row as a neighbour (and vice versa).
    FlatIndex,
}

/// A fixed-size wall/floor grid.
///
/// Allocated once; the size never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Cell data, `true` = wall.
    cells: Box<[bool]>,
    /// Cells per row.
    width: usize,
    /// Number of rows.
    height: usize,
}

impl Grid {
    /// Creates an all-floor grid.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the size overflows.
    pub fn new(width: usize, height: usize) -> CaveResult<Self> {
        Self::filled(width, height, CellState::Floor)
    }

    /// Creates a grid with every cell set to `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the size overflows.
    pub fn filled(width: usize, height: usize, state: CellState) -> CaveResult<Self> {
        let size = Self::checked_size(width, height)?;
        Ok(Self {
            cells: vec![state.is_wall(); size].into_boxed_slice(),
            width,
            height,
        })
    }

    /// Creates a grid from an existing flat buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or `cells.len()`
    /// is not `width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> CaveResult<Self> {
        let size = Self::checked_size(width, height)?;
        if cells.len() != size {
            return Err(CaveError::CellCountMismatch {
                expected: size,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells: cells.into_boxed_slice(),
            width,
            height,
        })
    }

    /// Validates dimensions and returns `width * height`.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the product overflows.
    pub fn checked_size(width: usize, height: usize) -> CaveResult<usize> {
        if width == 0 || height == 0 {
            return Err(CaveError::ZeroDimension { width, height });
        }
        width
            .checked_mul(height)
            .ok_or(CaveError::SizeOverflow { width, height })
    }

    /// Cells per row.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Read-only view of the flat buffer.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Mutable view of the flat buffer.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Raw value at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.cells.get(index).copied()
    }

    /// State at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn state(&self, index: usize) -> Option<CellState> {
        self.get(index).map(CellState::from_alive)
    }

    /// Returns true if `index` is in range and holds a wall.
    #[inline]
    #[must_use]
    pub fn is_wall(&self, index: usize) -> bool {
        self.get(index).unwrap_or(false)
    }

    /// Sets the state at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set(&mut self, index: usize, state: CellState) -> CaveResult<()> {
        let size = self.size();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(CaveError::IndexOutOfBounds { index, size })?;
        *cell = state.is_wall();
        Ok(())
    }

    /// Flips the state at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn flip(&mut self, index: usize) -> CaveResult<()> {
        let size = self.size();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(CaveError::IndexOutOfBounds { index, size })?;
        *cell = !*cell;
        Ok(())
    }

    /// Splits a flat index into `(x, y)` = `(row, column)`.
    #[inline]
    #[must_use]
    pub const fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// Joins `(row, column)` into a flat index, if inside the grid.
    #[inline]
    #[must_use]
    pub const fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.height && y < self.width {
            Some(x * self.width + y)
        } else {
            None
        }
    }

    /// Iterates the in-bounds Moore neighbours of `index`.
    ///
    /// The cell itself is never yielded. An out-of-range `index` yields nothing.
    #[must_use]
    pub fn neighbours(&self, index: usize, policy: EdgePolicy) -> Neighbours<'_> {
        let (x, y) = self.coords(index);
        Neighbours {
            grid: self,
            x,
            y,
            policy,
            next: if index < self.size() { 0 } else { MOORE_OFFSETS.len() },
        }
    }

    /// Counts walls among the Moore neighbours of `index`.
    #[inline]
    #[must_use]
    pub fn alive_neighbours(&self, index: usize, policy: EdgePolicy) -> u8 {
        let mut count = 0;
        for neighbour in self.neighbours(index, policy) {
            if self.cells[neighbour] {
                count += 1;
            }
        }
        count
    }

    /// Number of wall cells.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Number of floor cells.
    #[must_use]
    pub fn floor_count(&self) -> usize {
        self.size() - self.wall_count()
    }

    /// Number of cells that differ from `other`.
    ///
    /// Grids of different shape are compared over their common prefix.
    #[must_use]
    pub fn diff_count(&self, other: &Self) -> usize {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Iterates the rows as slices of `width` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Resolves one neighbour offset under the given edge policy.
    #[inline]
    fn offset_index(
        &self,
        x: usize,
        y: usize,
        (dx, dy): (isize, isize),
        policy: EdgePolicy,
    ) -> Option<usize> {
        match policy {
            EdgePolicy::Clip => {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.index_of(nx, ny)
            }
            EdgePolicy::FlatIndex => {
                let width = isize::try_from(self.width).ok()?;
                let row = isize::try_from(x).ok()?.checked_add(dx)?;
                let column = isize::try_from(y).ok()?.checked_add(dy)?;
                let flat = row.checked_mul(width)?.checked_add(column)?;
                usize::try_from(flat).ok().filter(|&index| index < self.size())
            }
        }
    }
}

/// Iterator over the Moore neighbours of a cell.
///
/// Created by [`Grid::neighbours`].
pub struct Neighbours<'a> {
    /// The grid being walked.
    grid: &'a Grid,
    /// Row of the centre cell.
    x: usize,
    /// Column of the centre cell.
    y: usize,
    /// Edge handling.
    policy: EdgePolicy,
    /// Next offset to try.
    next: usize,
}

impl Iterator for Neighbours<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(&offset) = MOORE_OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(index) = self.grid.offset_index(self.x, self.y, offset, self.policy) {
                return Some(index);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(MOORE_OFFSETS.len().saturating_sub(self.next)))
    }
}
