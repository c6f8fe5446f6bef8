//! # Cave Seeds
//!
//! Every random decision in the pipeline derives from one `CaveSeed`.
//!
//! ## Determinism Guarantee
//!
//! The engine behind a seed is `ChaCha8Rng`, whose output stream is stable
//! across platforms and releases. Given the same `CaveSeed` and configuration, a cave
//! is **bit-identical** on any platform, any time.
//!
//! There is no process-wide random state: each generator builds its own
//! engine from its seed, so two generators never interfere.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};
#[cfg(target_arch = "wasm32")]
use web_time::{SystemTime, UNIX_EPOCH};

/// Seed for deterministic cave generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaveSeed(u64);

impl CaveSeed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for a specific purpose.
    ///
    /// Uses a hash function to create independent streams from one seed.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }

    /// Creates a seed from the wall clock.
    ///
    /// Every call is expected to differ; use it when reproducibility is not
    /// wanted. A clock set before the Unix epoch yields the epoch seed.
    #[must_use]
    pub fn from_clock() -> Self {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let mixed = elapsed.as_secs().wrapping_mul(1_000_000_007) ^ u64::from(elapsed.subsec_nanos());
        Self(mixed).derive(0)
    }

    /// Builds the random engine for this seed.
    #[must_use]
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }
}

impl Default for CaveSeed {
    /// A fixed constant, so default generation is reproducible.
    fn default() -> Self {
        Self(0x5EED_CAFE_D00D_F00D)
    }
}

impl From<u64> for CaveSeed {
    fn from(seed: u64) -> Self {
        Self(seed)
    }
}
