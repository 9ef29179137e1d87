//! Deterministic random numbers for auto-play.
//!
//! RULE: Auto-play never touches a platform RNG. Every think time comes
//! from one PCG stream seeded from the configured seed, so a seed fully
//! determines a simulated game.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct ThinkRng {
    inner: Pcg64Mcg,
}

impl ThinkRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform in [lo, hi). Returns `lo` when the band is empty.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        lo + (hi - lo) * self.next_f64()
    }
}
