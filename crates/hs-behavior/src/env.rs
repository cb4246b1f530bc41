//! The collaborator seam: everything a state needs from the world.

use hs_agent::Agent;
use hs_core::{BuildingId, Position};

/// World services the behavior states call out to.
///
/// The scheduler implements this over its building registry; states never
/// see buildings directly.  Calls are strictly sequential: one settler at a
/// time, in creation order, so `find_work` may mutate shared worker lists
/// without synchronization.
pub trait Environment {
    /// Where `building` stands, or `None` if it no longer exists.
    fn building_position(&self, building: BuildingId) -> Option<Position>;

    /// The closest food source to `from`, if any exists.
    fn nearest_food(&self, from: Position) -> Option<Position>;

    /// Try to bind `agent` to a workplace.  On success sets
    /// `agent.workplace` and returns `true`.
    fn find_work(&mut self, agent: &mut Agent) -> bool;

    /// Called once per completed production interval in Working.
    fn perform_work(&mut self, agent: &Agent);
}

/// An [`Environment`] with no buildings and no food.
///
/// Useful in tests and for settlers in an empty map: every lookup misses and
/// work has no effect.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullEnvironment;

impl Environment for NullEnvironment {
    fn building_position(&self, _building: BuildingId) -> Option<Position> {
        None
    }

    fn nearest_food(&self, _from: Position) -> Option<Position> {
        None
    }

    fn find_work(&mut self, _agent: &mut Agent) -> bool {
        false
    }

    fn perform_work(&mut self, _agent: &Agent) {}
}
