//! The eleven behavior states and their dispatch.
//!
//! Each state is a handful of free functions (`enter`, `update`, optional
//! `exit`) over its typed memory record, plus a `GUARDS` table.  Guards are
//! evaluated in table order and the first one that holds names the next
//! state, so table order is behavioral priority.

mod food;
mod idle;
mod rest;
mod travel;
mod wander;
mod work;

use hs_agent::Agent;
use hs_core::AgentRng;

use crate::memory::StateMemory;
use crate::{BehaviorTuning, Environment, Handoff, StateKind, TickContext};

// ── Guards ────────────────────────────────────────────────────────────────────

/// One outgoing edge: `target` is taken when `when` holds.
pub(crate) struct Guard<M> {
    pub target: StateKind,
    pub when:   fn(&Agent, &M, &TickContext<'_>) -> bool,
}

fn first_firing<M>(
    guards: &[Guard<M>],
    agent:  &Agent,
    memory: &M,
    ctx:    &TickContext<'_>,
) -> Option<StateKind> {
    guards.iter().find(|g| (g.when)(agent, memory, ctx)).map(|g| g.target)
}

fn targets<M>(guards: &[Guard<M>]) -> Vec<StateKind> {
    guards.iter().map(|g| g.target).collect()
}

/// Outgoing edges of `kind`, in priority order.
pub fn guard_targets(kind: StateKind) -> Vec<StateKind> {
    match kind {
        StateKind::Idle     => targets(idle::GUARDS),
        StateKind::FindWork => targets(work::FIND_WORK_GUARDS),
        StateKind::GoToWork => targets(work::GO_TO_WORK_GUARDS),
        StateKind::Working  => targets(work::WORKING_GUARDS),
        StateKind::FindFood => targets(food::FIND_FOOD_GUARDS),
        StateKind::GoToFood => targets(food::GO_TO_FOOD_GUARDS),
        StateKind::Eating   => targets(food::EATING_GUARDS),
        StateKind::Rest     => targets(rest::REST_GUARDS),
        StateKind::Wander   => targets(wander::GUARDS),
        StateKind::GoHome   => targets(rest::GO_HOME_GUARDS),
        StateKind::Sleeping => targets(rest::SLEEPING_GUARDS),
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Idle memory for a freshly spawned settler.
pub(crate) fn initial(rng: &mut AgentRng, tuning: &BehaviorTuning) -> StateMemory {
    StateMemory::Idle(idle::enter(rng, tuning))
}

pub(crate) fn enter(
    kind:    StateKind,
    agent:   &mut Agent,
    rng:     &mut AgentRng,
    env:     &mut dyn Environment,
    ctx:     &TickContext<'_>,
    handoff: Handoff,
) -> StateMemory {
    match kind {
        StateKind::Idle     => StateMemory::Idle(idle::enter(rng, ctx.tuning)),
        StateKind::FindWork => StateMemory::FindWork(work::enter_find_work(agent, env, ctx.tuning)),
        StateKind::GoToWork => StateMemory::GoToWork(work::enter_go_to_work(agent, env, ctx)),
        StateKind::Working  => StateMemory::Working(work::enter_working(rng, ctx.tuning)),
        StateKind::FindFood => StateMemory::FindFood(food::enter_find_food(agent, env)),
        StateKind::GoToFood => StateMemory::GoToFood(food::enter_go_to_food(agent, env, ctx, handoff)),
        StateKind::Eating   => StateMemory::Eating(Default::default()),
        StateKind::Rest     => StateMemory::Rest(Default::default()),
        StateKind::Wander   => StateMemory::Wander(wander::enter(agent, rng, ctx)),
        StateKind::GoHome   => StateMemory::GoHome(rest::enter_go_home(agent, env, ctx)),
        StateKind::Sleeping => StateMemory::Sleeping(rest::enter_sleeping(agent)),
    }
}

pub(crate) fn update(
    memory: &mut StateMemory,
    agent:  &mut Agent,
    env:    &mut dyn Environment,
    ctx:    &TickContext<'_>,
) {
    match memory {
        StateMemory::Idle(m)     => idle::update(m, ctx),
        StateMemory::FindWork(m) => work::update_find_work(m, ctx),
        StateMemory::GoToWork(m) => travel::update(m, agent, ctx),
        StateMemory::Working(m)  => work::update_working(m, agent, env, ctx),
        StateMemory::FindFood(m) => food::update_find_food(m, ctx),
        StateMemory::GoToFood(m) => travel::update(m, agent, ctx),
        StateMemory::Eating(m)   => food::update_eating(m, agent, ctx),
        StateMemory::Rest(m)     => rest::update_rest(m, agent, ctx),
        StateMemory::Wander(m)   => wander::update(m, agent, ctx),
        StateMemory::GoHome(m)   => travel::update(m, agent, ctx),
        StateMemory::Sleeping(m) => rest::update_sleeping(m, agent, ctx),
    }
}

/// Run the outgoing state's exit hook.  The memory itself is dropped by the
/// caller once the successor is entered.
pub(crate) fn exit(memory: &StateMemory, agent: &mut Agent) -> Handoff {
    match memory {
        StateMemory::FindFood(m) => food::exit_find_food(m),
        StateMemory::Sleeping(_) => {
            rest::exit_sleeping(agent);
            Handoff::NONE
        }
        _ => Handoff::NONE,
    }
}

/// The first guard of the current state that holds, if any.
pub(crate) fn next(memory: &StateMemory, agent: &Agent, ctx: &TickContext<'_>) -> Option<StateKind> {
    match memory {
        StateMemory::Idle(m)     => first_firing(idle::GUARDS, agent, m, ctx),
        StateMemory::FindWork(m) => first_firing(work::FIND_WORK_GUARDS, agent, m, ctx),
        StateMemory::GoToWork(m) => first_firing(work::GO_TO_WORK_GUARDS, agent, m, ctx),
        StateMemory::Working(m)  => first_firing(work::WORKING_GUARDS, agent, m, ctx),
        StateMemory::FindFood(m) => first_firing(food::FIND_FOOD_GUARDS, agent, m, ctx),
        StateMemory::GoToFood(m) => first_firing(food::GO_TO_FOOD_GUARDS, agent, m, ctx),
        StateMemory::Eating(m)   => first_firing(food::EATING_GUARDS, agent, m, ctx),
        StateMemory::Rest(m)     => first_firing(rest::REST_GUARDS, agent, m, ctx),
        StateMemory::Wander(m)   => first_firing(wander::GUARDS, agent, m, ctx),
        StateMemory::GoHome(m)   => first_firing(rest::GO_HOME_GUARDS, agent, m, ctx),
        StateMemory::Sleeping(m) => first_firing(rest::SLEEPING_GUARDS, agent, m, ctx),
    }
}
