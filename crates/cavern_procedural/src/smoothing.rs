//! # Cellular-Automaton Smoothing
//!
//! Converges seeded noise into coherent wall/floor regions.
//!
//! ## The Rule
//!
//! For each cell, count the walls among its eight Moore neighbours:
//!
//! ```text
//! wall  -> stays a wall unless fewer than 3 neighbours are walls
//! floor -> becomes a wall only if more than 4 neighbours are walls
//! ```
//!
//! Off-grid neighbours never count as walls.
//!
//! ## Pass Atomicity
//!
//! Every pass reads the previous pass's grid and writes a separate buffer
//! (see `cavern_core::sync`). No cell ever sees a neighbour updated in the
//! same pass.

use cavern_core::{DoubleBufferedGrid, EdgePolicy, Grid};

/// Birth/death thresholds of the smoothing automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SmoothingRule {
    /// A wall with fewer wall neighbours than this becomes floor.
    pub death_limit: u8,
    /// A floor with more wall neighbours than this becomes wall.
    pub birth_limit: u8,
}

impl SmoothingRule {
    /// The standard cave rule: die below 3, birth above 4.
    pub const CAVE: Self = Self {
        death_limit: 3,
        birth_limit: 4,
    };

    /// Next state of a cell given its current state and wall-neighbour count.
    #[inline]
    #[must_use]
    pub const fn next_state(self, alive: bool, alive_neighbours: u8) -> bool {
        if alive {
            alive_neighbours >= self.death_limit
        } else {
            alive_neighbours > self.birth_limit
        }
    }
}

impl Default for SmoothingRule {
    fn default() -> Self {
        Self::CAVE
    }
}

/// What happened during a smoothing run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SmoothingStats {
    /// Cells that changed state in each pass, in pass order.
    pub changed_per_pass: Vec<usize>,
}

impl SmoothingStats {
    /// Number of passes executed.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.changed_per_pass.len()
    }

    /// Total state changes across all passes.
    #[must_use]
    pub fn total_changed(&self) -> usize {
        self.changed_per_pass.iter().sum()
    }

    /// Changes in the final pass (0 if no pass ran).
    #[must_use]
    pub fn last_changed(&self) -> usize {
        self.changed_per_pass.last().copied().unwrap_or(0)
    }
}

/// Applies the smoothing rule to whole grids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Smoother {
    /// The automaton rule.
    rule: SmoothingRule,
    /// Edge handling for neighbour counts.
    policy: EdgePolicy,
}

impl Smoother {
    /// Creates a smoother with the standard cave rule.
    #[must_use]
    pub const fn new(policy: EdgePolicy) -> Self {
        Self {
            rule: SmoothingRule::CAVE,
            policy,
        }
    }

    /// Replaces the rule.
    #[must_use]
    pub const fn with_rule(mut self, rule: SmoothingRule) -> Self {
        self.rule = rule;
        self
    }

    /// Returns the rule in use.
    #[inline]
    #[must_use]
    pub const fn rule(&self) -> SmoothingRule {
        self.rule
    }

    /// Runs one pass: reads the front buffer, writes the back, swaps.
    ///
    /// Returns the number of cells that changed.
    pub fn pass(&self, buffers: &mut DoubleBufferedGrid) -> usize {
        let (front, back) = buffers.split();
        let previous = front.cells();
        let mut changed = 0;

        for (index, next) in back.cells_mut().iter_mut().enumerate() {
            let alive = previous[index];
            let state = self
                .rule
                .next_state(alive, front.alive_neighbours(index, self.policy));
            changed += usize::from(state != alive);
            *next = state;
        }

        buffers.swap();
        changed
    }

    /// Runs `passes` whole-grid passes over `grid`.
    pub fn run(&self, grid: &mut Grid, passes: usize) -> SmoothingStats {
        let mut stats = SmoothingStats::default();
        if passes == 0 {
            return stats;
        }

        let mut buffers = DoubleBufferedGrid::new(grid.clone());
        for _ in 0..passes {
            stats.changed_per_pass.push(self.pass(&mut buffers));
        }
        *grid = buffers.into_front();

        stats
    }
}
