//! Deterministic per-agent RNG.
//!
//! # Determinism strategy
//!
//! Each settler gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! The colony grows while it runs, and because a newcomer's seed depends only
//! on its own id, spawning settlers never disturbs the random streams of the
//! ones already alive.  Two runs with the same seed and the same spawn order
//! make identical decisions.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Behavior states draw their randomized timers (idle decision time, work
/// shift length) and wander targets from the owning agent's `AgentRng`.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform `f32` in `[lo, hi]`; returns `lo` when the span is empty.
    ///
    /// Tuning ranges come from config files, so `lo == hi` (a fixed value)
    /// must not panic the way `gen_range(lo..hi)` would.
    #[inline]
    pub fn between(&mut self, lo: f32, hi: f32) -> f32 {
        if hi > lo { self.0.gen_range(lo..=hi) } else { lo }
    }
}

