//! Deterministic per-run RNG.
//!
//! # Determinism strategy
//!
//! Every cascade run gets its own independent `SmallRng` seeded by:
//!
//!   seed = campaign_seed XOR (node_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive node IDs uniformly across the seed space.
//! This means:
//!
//! - Runs never share RNG state (no contention, no ordering dependency).
//! - A run's random stream depends only on the campaign seed and its seed
//!   node, so the result for node `n` is the same whether it is simulated
//!   first, last, or on another thread.
//! - All RNG calls are local to the owning run; no synchronisation needed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::NodeId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-run deterministic RNG.
///
/// Created once per cascade run and owned by it.
pub struct RunRng(SmallRng);

impl RunRng {
    /// Seed deterministically from the campaign seed and the run's seed node.
    pub fn new(campaign_seed: u64, node: NodeId) -> Self {
        RunRng(SmallRng::seed_from_u64(Self::derive_seed(campaign_seed, node)))
    }

    /// The sub-seed used for `node` under `campaign_seed`.
    #[inline]
    pub fn derive_seed(campaign_seed: u64, node: NodeId) -> u64 {
        campaign_seed ^ (node.0 as u64).wrapping_mul(MIXING_CONSTANT)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

/// Draw a fresh campaign seed from OS entropy.
///
/// Used when no seed was configured.  The drawn seed is fixed for the whole
/// campaign, so every run still derives from a single value.
pub fn draw_campaign_seed() -> u64 {
    rand::random()
}
