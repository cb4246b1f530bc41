//! FindWork, GoToWork, and Working.

use hs_agent::{Agent, NeedKind};
use hs_core::AgentRng;
use tracing::{debug, warn};

use super::{Guard, travel};
use crate::memory::{FindWorkMemory, TravelMemory, WorkingMemory};
use crate::{BehaviorTuning, Environment, StateKind, TickContext};

// ── FindWork ──────────────────────────────────────────────────────────────────

pub(super) fn enter_find_work(
    agent:  &mut Agent,
    env:    &mut dyn Environment,
    tuning: &BehaviorTuning,
) -> FindWorkMemory {
    if !env.find_work(agent) {
        debug!(agent = %agent.id, profession = %agent.profession.kind, "no workplace vacancy");
    }
    FindWorkMemory { timer: 0.0, timeout: tuning.find_work_timeout, failed: false }
}

pub(super) fn update_find_work(m: &mut FindWorkMemory, ctx: &TickContext<'_>) {
    m.timer += ctx.dt;
    if m.timer > m.timeout {
        m.failed = true;
    }
}

pub(super) const FIND_WORK_GUARDS: &[Guard<FindWorkMemory>] = &[
    Guard { target: StateKind::GoToWork, when: employed },
    Guard { target: StateKind::Idle,     when: search_failed },
];

fn employed(a: &Agent, _: &FindWorkMemory, _: &TickContext<'_>) -> bool {
    a.workplace.is_some()
}

fn search_failed(_: &Agent, m: &FindWorkMemory, _: &TickContext<'_>) -> bool {
    m.failed
}

// ── GoToWork ──────────────────────────────────────────────────────────────────

pub(super) fn enter_go_to_work(
    agent: &mut Agent,
    env:   &mut dyn Environment,
    ctx:   &TickContext<'_>,
) -> TravelMemory {
    let Some(workplace) = agent.workplace else {
        return TravelMemory::default();
    };
    match env.building_position(workplace) {
        Some(target) => travel::towards(agent, target, ctx),
        None => {
            warn!(agent = %agent.id, building = %workplace, "workplace no longer exists; clearing");
            agent.workplace = None;
            TravelMemory::default()
        }
    }
}

pub(super) const GO_TO_WORK_GUARDS: &[Guard<TravelMemory>] = &[
    Guard { target: StateKind::Working, when: travel::arrived },
    Guard { target: StateKind::Idle,    when: unemployed },
];

fn unemployed(a: &Agent, _: &TravelMemory, _: &TickContext<'_>) -> bool {
    a.workplace.is_none()
}

// ── Working ───────────────────────────────────────────────────────────────────

pub(super) fn enter_working(rng: &mut AgentRng, tuning: &BehaviorTuning) -> WorkingMemory {
    WorkingMemory {
        work_timer:       0.0,
        production_timer: 0.0,
        duration:         rng.between(tuning.work_duration_min, tuning.work_duration_max),
    }
}

pub(super) fn update_working(
    m:     &mut WorkingMemory,
    agent: &mut Agent,
    env:   &mut dyn Environment,
    ctx:   &TickContext<'_>,
) {
    let t = ctx.tuning;
    agent.needs.lower(NeedKind::Energy, t.work_energy_drain * ctx.dt);
    agent.needs.lower(NeedKind::Hunger, t.work_hunger_drain * ctx.dt);

    m.work_timer += ctx.dt;
    m.production_timer += ctx.dt;

    // A long tick can span several intervals.
    if t.production_interval > 0.0 {
        while m.production_timer >= t.production_interval {
            m.production_timer -= t.production_interval;
            agent.experience += 1;
            env.perform_work(agent);
        }
    }
}

pub(super) const WORKING_GUARDS: &[Guard<WorkingMemory>] = &[
    Guard { target: StateKind::FindFood, when: hungry_at_work },
    Guard { target: StateKind::Rest,     when: tired_at_work },
    Guard { target: StateKind::Idle,     when: shift_over },
];

fn hungry_at_work(a: &Agent, _: &WorkingMemory, ctx: &TickContext<'_>) -> bool {
    a.need(NeedKind::Hunger) < ctx.tuning.work_hungry_below
}

fn tired_at_work(a: &Agent, _: &WorkingMemory, ctx: &TickContext<'_>) -> bool {
    a.need(NeedKind::Energy) < ctx.tuning.work_tired_below
}

fn shift_over(_: &Agent, m: &WorkingMemory, _: &TickContext<'_>) -> bool {
    m.work_timer > m.duration
}
