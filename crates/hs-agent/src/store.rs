//! Agent storage: `AgentStore` (settler records) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! A behavior state needs `&mut Agent` and `&mut AgentRng` for the same
//! settler at the same time, while the scheduler also holds the building
//! registry mutably.  Keeping RNGs in a separate `AgentRngs` lets the
//! scheduler borrow the two arrays as disjoint fields:
//!
//! ```ignore
//! let agent = sim.agents.get_mut(id)?;
//! let rng   = sim.rngs.get_mut(id);
//! machine.update(agent, rng, &mut env, &ctx);
//! ```
//!
//! Both arrays grow together in creation order; an `AgentId` is the index
//! into each of them.

use std::sync::Arc;

use hs_core::{AgentId, AgentRng, Position};

use crate::{Agent, NeedsConfig, Profession};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] for the
/// split-borrow pattern above.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
    seed: u64,
}

impl AgentRngs {
    pub fn new(global_seed: u64) -> Self {
        Self { inner: Vec::new(), seed: global_seed }
    }

    /// Seed and append the RNG for a newly spawned agent.
    pub(crate) fn push(&mut self, agent: AgentId) {
        debug_assert_eq!(agent.index(), self.inner.len());
        self.inner.push(AgentRng::new(self.seed, agent));
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Creation-ordered storage for every settler.
///
/// Iteration order is creation order, which is also the scheduler's update
/// order.  Agents are never removed mid-run, so ids stay dense.
#[derive(Default)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a settler at `position` and return its id.  The matching RNG is
    /// appended to `rngs` in the same call so the two arrays never drift.
    pub fn spawn(
        &mut self,
        rngs:       &mut AgentRngs,
        name:       impl Into<String>,
        profession: Arc<Profession>,
        position:   Position,
        needs:      &NeedsConfig,
    ) -> AgentId {
        let id = AgentId(self.agents.len() as u32);
        self.agents.push(Agent::new(id, name, profession, position, needs));
        rngs.push(id);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Agent> {
        self.agents.get(agent.index())
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(agent.index())
    }

    /// Iterator over all `AgentId`s in creation order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    pub fn as_mut_slice(&mut self) -> &mut [Agent] {
        &mut self.agents
    }
}
