//! FindFood, GoToFood, and Eating.

use hs_agent::{Agent, NeedKind};
use tracing::debug;

use super::{Guard, travel};
use crate::memory::{FindFoodMemory, TimerMemory, TravelMemory};
use crate::{Environment, Handoff, StateKind, TickContext};

// ── FindFood ──────────────────────────────────────────────────────────────────

pub(super) fn enter_find_food(agent: &Agent, env: &mut dyn Environment) -> FindFoodMemory {
    FindFoodMemory { timer: 0.0, destination: env.nearest_food(agent.position) }
}

pub(super) fn update_find_food(m: &mut FindFoodMemory, ctx: &TickContext<'_>) {
    m.timer += ctx.dt;
}

pub(super) fn exit_find_food(m: &FindFoodMemory) -> Handoff {
    m.destination.map_or(Handoff::NONE, Handoff::to)
}

pub(super) const FIND_FOOD_GUARDS: &[Guard<FindFoodMemory>] = &[
    Guard { target: StateKind::GoToFood, when: food_found },
    Guard { target: StateKind::Idle,     when: search_timed_out },
];

fn food_found(_: &Agent, m: &FindFoodMemory, _: &TickContext<'_>) -> bool {
    m.destination.is_some()
}

fn search_timed_out(_: &Agent, m: &FindFoodMemory, ctx: &TickContext<'_>) -> bool {
    m.timer > ctx.tuning.food_search_timeout
}

// ── GoToFood ──────────────────────────────────────────────────────────────────

/// Uses the handed-off destination, or asks for the nearest food itself when
/// entered directly.  With no food anywhere the settler eats where it stands.
pub(super) fn enter_go_to_food(
    agent:   &Agent,
    env:     &mut dyn Environment,
    ctx:     &TickContext<'_>,
    handoff: Handoff,
) -> TravelMemory {
    let target = handoff
        .destination
        .or_else(|| env.nearest_food(agent.position))
        .unwrap_or_else(|| {
            debug!(agent = %agent.id, "no food source; eating in place");
            agent.position
        });
    travel::towards(agent, target, ctx)
}

pub(super) const GO_TO_FOOD_GUARDS: &[Guard<TravelMemory>] = &[
    Guard { target: StateKind::Eating, when: travel::arrived },
];

// ── Eating ────────────────────────────────────────────────────────────────────

pub(super) fn update_eating(m: &mut TimerMemory, agent: &mut Agent, ctx: &TickContext<'_>) {
    m.timer += ctx.dt;
    agent.needs.raise(NeedKind::Hunger, ctx.tuning.eat_rate * ctx.dt);
}

pub(super) const EATING_GUARDS: &[Guard<TimerMemory>] = &[
    Guard { target: StateKind::Idle, when: done_eating },
];

fn done_eating(a: &Agent, m: &TimerMemory, ctx: &TickContext<'_>) -> bool {
    m.timer > ctx.tuning.eat_duration || a.need(NeedKind::Hunger) > ctx.tuning.sated_above
}
