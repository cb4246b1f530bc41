//! Shared path walking for GoToWork, GoToFood, and GoHome.

use hs_agent::Agent;
use hs_core::Position;
use hs_mobility::{Step, advance, move_speed};
use hs_spatial::WaypointPath;

use crate::TickContext;
use crate::memory::TravelMemory;

/// Walk `path` for one tick at the settler's speed times `multiplier`.
pub(super) fn walk(agent: &mut Agent, path: &mut WaypointPath, multiplier: f32, dt: f32) -> Step {
    let speed = move_speed(&agent.profession, multiplier);
    advance(agent, path, speed, dt)
}

pub(super) fn towards(agent: &Agent, target: Position, ctx: &TickContext<'_>) -> TravelMemory {
    TravelMemory { path: Some(ctx.planner.plan(agent.position, target)) }
}

pub(super) fn update(m: &mut TravelMemory, agent: &mut Agent, ctx: &TickContext<'_>) {
    if let Some(path) = m.path.as_mut() {
        walk(agent, path, 1.0, ctx.dt);
    }
}

pub(super) fn arrived(_: &Agent, m: &TravelMemory, _: &TickContext<'_>) -> bool {
    m.arrived()
}
