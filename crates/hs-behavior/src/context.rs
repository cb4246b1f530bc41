//! Per-tick inputs shared by every settler's state machine.

use hs_core::Tick;
use hs_spatial::Planner;

use crate::BehaviorTuning;

/// Read-only inputs for one tick, built once by the scheduler and lent to
/// every [`StateMachine::update`][crate::StateMachine::update] call.
///
/// # Lifetimes
///
/// Borrows live for one tick's update phase.
#[derive(Copy, Clone)]
pub struct TickContext<'a> {
    pub tick: Tick,

    /// Simulated seconds covered by this tick (already scaled by game speed).
    pub dt: f32,

    /// Whether the colony clock is inside working hours.
    pub work_time: bool,

    pub tuning: &'a BehaviorTuning,

    /// Builds every travel state's waypoint path.
    pub planner: &'a dyn Planner,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(
        tick:      Tick,
        dt:        f32,
        work_time: bool,
        tuning:    &'a BehaviorTuning,
        planner:   &'a dyn Planner,
    ) -> Self {
        Self { tick, dt, work_time, tuning, planner }
    }
}
