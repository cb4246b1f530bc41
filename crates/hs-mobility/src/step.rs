//! One tick of path following.

use hs_agent::Agent;
use hs_spatial::{ARRIVAL_RADIUS, WaypointPath};

/// What happened during one call to [`advance`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The settler moved toward the current waypoint.
    InTransit,
    /// The current waypoint was reached; the index moved on.  The settler did
    /// not move this tick.
    WaypointReached,
    /// The last waypoint was reached, or the path was already used up.
    Complete,
}

impl Step {
    #[inline]
    pub fn is_complete(self) -> bool {
        matches!(self, Step::Complete)
    }
}

/// Advance `agent` one tick along `path` at `speed` units per second.
///
/// Writes `agent.position` and, while moving, `agent.heading`
/// (`atan2(dx, dz)`).  An empty path is a no-op that reports
/// [`Step::Complete`].
pub fn advance(agent: &mut Agent, path: &mut WaypointPath, speed: f32, dt: f32) -> Step {
    let Some(target) = path.current() else {
        return Step::Complete;
    };

    let dx = target.x - agent.position.x;
    let dz = target.z - agent.position.z;
    let dist = (dx * dx + dz * dz).sqrt();

    if dist < ARRIVAL_RADIUS {
        path.advance_index();
        return if path.is_complete() { Step::Complete } else { Step::WaypointReached };
    }

    let travel = (speed * dt.max(0.0)).min(dist);
    agent.position.x += dx / dist * travel;
    agent.position.z += dz / dist * travel;
    agent.heading = dx.atan2(dz);
    Step::InTransit
}
