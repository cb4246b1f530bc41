//! Rest, GoHome, and Sleeping.

use hs_agent::{Agent, NeedKind};
use tracing::warn;

use super::{Guard, travel};
use crate::memory::{TimerMemory, TravelMemory};
use crate::{Environment, StateKind, TickContext};

// ── Rest ──────────────────────────────────────────────────────────────────────

pub(super) fn update_rest(m: &mut TimerMemory, agent: &mut Agent, ctx: &TickContext<'_>) {
    m.timer += ctx.dt;
    agent.needs.raise(NeedKind::Energy, ctx.tuning.rest_rate * ctx.dt);
}

pub(super) const REST_GUARDS: &[Guard<TimerMemory>] = &[
    Guard { target: StateKind::Idle, when: rested },
];

fn rested(a: &Agent, m: &TimerMemory, ctx: &TickContext<'_>) -> bool {
    m.timer > ctx.tuning.rest_duration || a.need(NeedKind::Energy) > ctx.tuning.rested_above
}

// ── GoHome ────────────────────────────────────────────────────────────────────

/// Homeless settlers, and settlers whose house is gone, sleep where they
/// stand.
pub(super) fn enter_go_home(
    agent: &mut Agent,
    env:   &mut dyn Environment,
    ctx:   &TickContext<'_>,
) -> TravelMemory {
    let target = match agent.home {
        Some(home) => env.building_position(home).unwrap_or_else(|| {
            warn!(agent = %agent.id, building = %home, "home no longer exists; clearing");
            agent.home = None;
            agent.position
        }),
        None => agent.position,
    };
    travel::towards(agent, target, ctx)
}

pub(super) const GO_HOME_GUARDS: &[Guard<TravelMemory>] = &[
    Guard { target: StateKind::Sleeping, when: travel::arrived },
];

// ── Sleeping ──────────────────────────────────────────────────────────────────

pub(super) fn enter_sleeping(agent: &mut Agent) -> TimerMemory {
    agent.hidden = true;
    TimerMemory::default()
}

pub(super) fn update_sleeping(m: &mut TimerMemory, agent: &mut Agent, ctx: &TickContext<'_>) {
    m.timer += ctx.dt;
    agent.needs.raise(NeedKind::Energy, ctx.tuning.sleep_energy_rate * ctx.dt);
    agent.needs.raise(NeedKind::Happiness, ctx.tuning.sleep_happiness_rate * ctx.dt);
}

pub(super) fn exit_sleeping(agent: &mut Agent) {
    agent.hidden = false;
}

pub(super) const SLEEPING_GUARDS: &[Guard<TimerMemory>] = &[
    Guard { target: StateKind::Idle, when: slept },
];

fn slept(a: &Agent, m: &TimerMemory, ctx: &TickContext<'_>) -> bool {
    m.timer > ctx.tuning.sleep_duration || a.need(NeedKind::Energy) > ctx.tuning.slept_above
}
