//! # Noise Seeding
//!
//! The first pipeline stage: every cell independently becomes a wall with
//! probability `p / 100`. There is no spatial correlation at this stage;
//! smoothing turns the noise into caves.
//!
//! ## Probability Law
//!
//! For each cell a value `r` is drawn uniformly from `0..100` (0 through 99).
//! The cell is a wall iff `r < p`. Therefore:
//!
//! - `p = 0` never produces a wall
//! - `p = 100` always produces a wall
//! - any `p` in between gives exactly `p / 100`

use cavern_core::Grid;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::seed::CaveSeed;

/// Chance, in percent, that a seeded cell starts as a wall.
///
/// Clamped to `[0, 100]` at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AliveChance(u8);

impl AliveChance {
    /// Upper bound of the percentage.
    pub const MAX: u8 = 100;

    /// Creates a chance, clamping anything above 100.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
    pub const fn clamped(percent: u32) -> Self {
        if percent > Self::MAX as u32 {
            Self(Self::MAX)
        } else {
            // Fits: at most 100 here.
            Self(percent as u8)
        }
    }

    /// Returns the (clamped) percentage.
    #[inline]
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Draws one cell.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        rng.gen_range(0..Self::MAX) < self.0
    }
}

impl Default for AliveChance {
    fn default() -> Self {
        Self(44)
    }
}

/// Fills grids with random walls from an owned engine.
pub struct NoiseSeeder {
    /// Wall probability.
    chance: AliveChance,
    /// The engine, owned for the lifetime of the seeder only.
    rng: ChaCha8Rng,
}

impl NoiseSeeder {
    /// Creates a seeder from a seed and a wall chance.
    #[must_use]
    pub fn new(seed: CaveSeed, chance: AliveChance) -> Self {
        Self {
            chance,
            rng: seed.rng(),
        }
    }

    /// Overwrites every cell of `grid`, returning the number of walls placed.
    pub fn fill(&mut self, grid: &mut Grid) -> usize {
        let mut walls = 0;
        for cell in grid.cells_mut() {
            *cell = self.chance.sample(&mut self.rng);
            walls += usize::from(*cell);
        }
        walls
    }
}

/// Seeds `grid` with noise in one call.
///
/// Returns the number of walls placed.
pub fn seed_noise(grid: &mut Grid, chance: AliveChance, seed: CaveSeed) -> usize {
    NoiseSeeder::new(seed, chance).fill(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_fraction(percent: u32, seed: u64) -> f64 {
        let mut grid = Grid::new(100, 100).unwrap();
        let walls = seed_noise(&mut grid, AliveChance::clamped(percent), CaveSeed::new(seed));
        assert_eq!(walls, grid.wall_count());
        walls as f64 / grid.size() as f64
    }

    #[test]
    fn test_determinism() {
        let mut a = Grid::new(64, 48).unwrap();
        let mut b = Grid::new(64, 48).unwrap();

        seed_noise(&mut a, AliveChance::clamped(44), CaveSeed::new(12345));
        seed_noise(&mut b, AliveChance::clamped(44), CaveSeed::new(12345));

        assert_eq!(a, b, "Noise should be deterministic");
    }

    #[test]
    fn test_different_seeds_different_noise() {
        let mut a = Grid::new(64, 48).unwrap();
        let mut b = Grid::new(64, 48).unwrap();

        seed_noise(&mut a, AliveChance::clamped(44), CaveSeed::new(1));
        seed_noise(&mut b, AliveChance::clamped(44), CaveSeed::new(2));

        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_percent_is_empty() {
        assert_eq!(wall_fraction(0, 42), 0.0);
    }

    #[test]
    fn test_hundred_percent_is_full() {
        assert_eq!(wall_fraction(100, 42), 1.0);
    }

    #[test]
    fn test_above_hundred_clamps_to_full() {
        assert_eq!(AliveChance::clamped(250).percent(), 100);
        assert_eq!(AliveChance::clamped(u32::MAX).percent(), 100);
        assert_eq!(wall_fraction(250, 42), 1.0);
    }

    #[test]
    fn test_draw_range_excludes_hundred() {
        // With r drawn from 0..100, p = 99 leaves roughly 1% floor and p = 1
        // leaves roughly 1% wall.
        let high = wall_fraction(99, 7);
        let low = wall_fraction(1, 7);

        assert!(high < 1.0 && high > 0.98, "p=99 gave {high}");
        assert!(low > 0.0 && low < 0.02, "p=1 gave {low}");
    }

    #[test]
    fn test_probability_law() {
        for seed in [1, 2, 3] {
            let fraction = wall_fraction(50, seed);
            assert!(
                (0.46..0.54).contains(&fraction),
                "p=50 gave wall fraction {fraction} for seed {seed}"
            );
        }
    }
}
