//! # Region Culling
//!
//! Removes fragments: every region of the target state smaller than a
//! threshold is flipped to the opposite state.
//!
//! ## Ordering Contract
//!
//! The pipeline culls walls first, then floors. Wall culling can turn small
//! wall islands into floor, and the floor sweep then scans the already
//! mutated grid, so the two sweeps do not commute. `cull_fragments` fixes
//! the order.
//!
//! ## Threshold
//!
//! Region sizes and thresholds are both `usize`. The comparison is strict:
//! a region of exactly `threshold` cells is kept, one cell fewer is culled,
//! and a threshold of zero culls nothing.

use cavern_core::{CellState, EdgePolicy, Grid, VisitedFlags};

use crate::region::{flood_region, Region};

/// Outcome of one culling sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CullReport {
    /// State that was swept.
    pub region_type: CellState,
    /// Minimum size a region needed to survive.
    pub threshold: usize,
    /// Regions of `region_type` discovered.
    pub regions_found: usize,
    /// Regions flipped to the opposite state.
    pub regions_culled: usize,
    /// Cells flipped in total.
    pub cells_flipped: usize,
    /// Surviving regions, tracked for wall sweeps only.
    pub retained: Vec<Region>,
}

impl CullReport {
    /// Creates an empty report for a sweep.
    #[must_use]
    pub const fn new(region_type: CellState, threshold: usize) -> Self {
        Self {
            region_type,
            threshold,
            regions_found: 0,
            regions_culled: 0,
            cells_flipped: 0,
            retained: Vec::new(),
        }
    }

    /// Regions that survived the sweep.
    #[must_use]
    pub const fn regions_kept(&self) -> usize {
        self.regions_found - self.regions_culled
    }
}

/// Reports of the wall sweep and the floor sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentReport {
    /// First sweep.
    pub walls: CullReport,
    /// Second sweep, over the grid the wall sweep left behind.
    pub floors: CullReport,
}

/// Culls every `region_type` region smaller than `threshold`.
///
/// Allocates one visited-flags buffer for the sweep and drops it on return.
pub fn cull_regions(
    grid: &mut Grid,
    region_type: CellState,
    threshold: usize,
    policy: EdgePolicy,
) -> CullReport {
    let mut visited = VisitedFlags::new(grid.size());
    let mut report = CullReport::new(region_type, threshold);
    let replacement = region_type.flipped().is_wall();

    for index in 0..grid.size() {
        if visited.is_visited(index) || grid.state(index) != Some(region_type) {
            continue;
        }
        let Some(region) = flood_region(grid, index, &mut visited, policy) else {
            continue;
        };
        report.regions_found += 1;

        if region.len() < threshold {
            report.regions_culled += 1;
            report.cells_flipped += region.len();

            let cells = grid.cells_mut();
            for tile in region.into_indices() {
                cells[tile] = replacement;
            }
        } else if region_type.is_wall() {
            report.retained.push(region);
        }
    }

    report
}

/// Runs the wall sweep, then the floor sweep.
pub fn cull_fragments(
    grid: &mut Grid,
    wall_threshold: usize,
    floor_threshold: usize,
    policy: EdgePolicy,
) -> FragmentReport {
    let walls = cull_regions(grid, CellState::Wall, wall_threshold, policy);
    let floors = cull_regions(grid, CellState::Floor, floor_threshold, policy);
    FragmentReport { walls, floors }
}
