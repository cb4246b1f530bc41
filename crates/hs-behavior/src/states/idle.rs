//! Idle: loiter, then decide.

use hs_agent::{Agent, NeedKind};
use hs_core::AgentRng;

use super::Guard;
use crate::memory::IdleMemory;
use crate::{BehaviorTuning, StateKind, TickContext};

pub(super) fn enter(rng: &mut AgentRng, tuning: &BehaviorTuning) -> IdleMemory {
    IdleMemory {
        timer:         0.0,
        next_decision: rng.between(tuning.idle_decision_min, tuning.idle_decision_max),
    }
}

pub(super) fn update(m: &mut IdleMemory, ctx: &TickContext<'_>) {
    m.timer += ctx.dt;
}

pub(super) const GUARDS: &[Guard<IdleMemory>] = &[
    Guard { target: StateKind::FindWork, when: wants_work },
    Guard { target: StateKind::GoToWork, when: shift_starts },
    Guard { target: StateKind::FindFood, when: hungry },
    Guard { target: StateKind::GoHome,   when: tired_with_home },
    Guard { target: StateKind::Wander,   when: bored },
];

fn bored(_: &Agent, m: &IdleMemory, _: &TickContext<'_>) -> bool {
    m.timer > m.next_decision
}

fn wants_work(a: &Agent, m: &IdleMemory, ctx: &TickContext<'_>) -> bool {
    a.has_profession() && bored(a, m, ctx) && a.workplace.is_none()
}

fn shift_starts(a: &Agent, _: &IdleMemory, ctx: &TickContext<'_>) -> bool {
    a.workplace.is_some() && ctx.work_time
}

fn hungry(a: &Agent, _: &IdleMemory, ctx: &TickContext<'_>) -> bool {
    a.need(NeedKind::Hunger) < ctx.tuning.hungry_below
}

fn tired_with_home(a: &Agent, _: &IdleMemory, ctx: &TickContext<'_>) -> bool {
    a.need(NeedKind::Energy) < ctx.tuning.tired_below && a.home.is_some()
}
