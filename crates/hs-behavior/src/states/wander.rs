//! Wander: stroll to a random nearby point at reduced speed.

use std::f32::consts::TAU;

use hs_agent::Agent;
use hs_core::AgentRng;

use super::{Guard, travel};
use crate::memory::WanderMemory;
use crate::{StateKind, TickContext};

pub(super) fn enter(agent: &Agent, rng: &mut AgentRng, ctx: &TickContext<'_>) -> WanderMemory {
    let t = ctx.tuning;
    let heading = rng.between(0.0, TAU);
    let distance = rng.between(t.wander_distance_min, t.wander_distance_max);
    let target = agent.position.offset_polar(heading, distance);
    WanderMemory { timer: 0.0, path: ctx.planner.plan(agent.position, target) }
}

pub(super) fn update(m: &mut WanderMemory, agent: &mut Agent, ctx: &TickContext<'_>) {
    m.timer += ctx.dt;
    travel::walk(agent, &mut m.path, ctx.tuning.wander_speed_factor, ctx.dt);
}

pub(super) const GUARDS: &[Guard<WanderMemory>] = &[
    Guard { target: StateKind::Idle, when: done_wandering },
];

fn done_wandering(_: &Agent, m: &WanderMemory, ctx: &TickContext<'_>) -> bool {
    m.timer > ctx.tuning.wander_duration || m.path.is_complete()
}
