//! # Visited Flags
//!
//! A same-size boolean marker buffer for region sweeps.

/// Marks grid indices already claimed by a discovered region.
///
/// One instance covers exactly one sweep over one grid. Indices outside
/// the buffer are treated as already visited, so a walk never steps off it.
///
/// # Example
///
/// ```rust
/// use cavern_core::VisitedFlags;
///
/// let mut visited = VisitedFlags::new(4);
/// assert!(visited.try_mark(2));
/// assert!(!visited.try_mark(2));
/// assert_eq!(visited.visited_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitedFlags {
    /// One flag per grid cell.
    flags: Box<[bool]>,
    /// Number of flags currently set.
    marked: usize,
}

impl VisitedFlags {
    /// Creates a cleared buffer for `size` cells.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            flags: vec![false; size].into_boxed_slice(),
            marked: 0,
        }
    }

    /// Number of cells covered.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns true if the buffer covers no cells.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns true if `index` has been marked (or is out of range).
    #[inline]
    #[must_use]
    pub fn is_visited(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(true)
    }

    /// Marks `index` as visited. Out-of-range indices are ignored.
    #[inline]
    pub fn mark(&mut self, index: usize) {
        let _ = self.try_mark(index);
    }

    /// Marks `index` and returns true if it was not marked before.
    #[inline]
    pub fn try_mark(&mut self, index: usize) -> bool {
        match self.flags.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                self.marked += 1;
                true
            }
            _ => false,
        }
    }

    /// Number of marked cells.
    #[inline]
    #[must_use]
    pub const fn visited_count(&self) -> usize {
        self.marked
    }

    /// Clears every flag without reallocating.
    pub fn reset(&mut self) {
        self.flags.fill(false);
        self.marked = 0;
    }
}
