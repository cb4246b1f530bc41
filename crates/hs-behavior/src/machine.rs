//! The per-settler state machine.

use hs_agent::Agent;
use hs_core::{AgentId, AgentRng};
use tracing::{debug, warn};

use crate::memory::StateMemory;
use crate::{
    BehaviorError, BehaviorResult, BehaviorTuning, Blackboard, Environment, StateKind,
    TickContext, Value, states,
};

/// A state change that happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub agent: AgentId,
    pub from:  StateKind,
    pub to:    StateKind,
}

/// Current state, its typed memory, and the previous state of one settler.
///
/// The machine does not own the settler: the scheduler stores machines in a
/// parallel array and lends the matching [`Agent`] and [`AgentRng`] on every
/// call.  Exactly one state is current at any time.
#[derive(Clone, Debug)]
pub struct StateMachine {
    memory:      StateMemory,
    previous:    Option<StateKind>,
    blackboard:  Blackboard,
    transitions: u64,
}

impl StateMachine {
    /// A machine that has just entered Idle, with no previous state.
    pub fn new(rng: &mut AgentRng, tuning: &BehaviorTuning) -> Self {
        Self {
            memory:      states::initial(rng, tuning),
            previous:    None,
            blackboard:  Blackboard::new(),
            transitions: 0,
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────────

    /// Run one tick: the current state's update hook, then its guards in
    /// priority order.  The first guard that holds triggers a transition.
    ///
    /// When no guard holds, nothing but the state's own memory changes.
    pub fn update(
        &mut self,
        agent: &mut Agent,
        rng:   &mut AgentRng,
        env:   &mut dyn Environment,
        ctx:   &TickContext<'_>,
    ) -> Option<Transition> {
        states::update(&mut self.memory, agent, env, ctx);
        let target = states::next(&self.memory, agent, ctx)?;
        Some(self.transition_to(target, agent, rng, env, ctx))
    }

    /// Leave the current state and enter `target`.
    ///
    /// The old state's exit hook runs before anything changes; its hand-off
    /// is then given to the new state's enter hook.  Re-entering the current
    /// state is allowed and runs both hooks.
    pub fn transition_to(
        &mut self,
        target: StateKind,
        agent:  &mut Agent,
        rng:    &mut AgentRng,
        env:    &mut dyn Environment,
        ctx:    &TickContext<'_>,
    ) -> Transition {
        let from = self.current();
        let handoff = states::exit(&self.memory, agent);

        self.previous = Some(from);
        self.memory = states::enter(target, agent, rng, env, ctx, handoff);
        self.transitions += 1;

        debug!(agent = %agent.id, %from, to = %target, tick = %ctx.tick, "state transition");
        Transition { agent: agent.id, from, to: target }
    }

    /// [`transition_to`](Self::transition_to) by state name, for external
    /// callers such as a debug console.
    ///
    /// # Errors
    ///
    /// [`BehaviorError::UnknownState`] if `name` is not a state; the machine
    /// is left untouched.
    pub fn transition_to_named(
        &mut self,
        name:  &str,
        agent: &mut Agent,
        rng:   &mut AgentRng,
        env:   &mut dyn Environment,
        ctx:   &TickContext<'_>,
    ) -> BehaviorResult<Transition> {
        let target: StateKind = name.parse().inspect_err(|_: &BehaviorError| {
            warn!(agent = %agent.id, target = name, "unknown state; transition aborted");
        })?;
        Ok(self.transition_to(target, agent, rng, env, ctx))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn current(&self) -> StateKind {
        self.memory.kind()
    }

    #[inline]
    pub fn previous(&self) -> Option<StateKind> {
        self.previous
    }

    pub fn current_name(&self) -> &'static str {
        self.current().as_str()
    }

    pub fn previous_name(&self) -> Option<&'static str> {
        self.previous.map(StateKind::as_str)
    }

    /// Number of transitions since the machine was created.
    #[inline]
    pub fn transition_count(&self) -> u64 {
        self.transitions
    }

    pub fn memory(&self) -> &StateMemory {
        &self.memory
    }

    /// Direct access to the current state's memory, for tools that need to
    /// nudge a timer.  Changing the variant here skips the enter/exit hooks;
    /// use [`transition_to`](Self::transition_to) for that.
    pub fn memory_mut(&mut self) -> &mut StateMemory {
        &mut self.memory
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut Blackboard {
        &mut self.blackboard
    }

    /// Read `key` from the current state's memory, falling back to the
    /// blackboard.
    pub fn read(&self, key: &str) -> Option<Value> {
        self.memory.get(key).or_else(|| self.blackboard.get(key).cloned())
    }
}
