//! Binds the building registry and work handler to the behavior
//! [`Environment`] seam.

use hs_agent::Agent;
use hs_behavior::Environment;
use hs_core::{BuildingId, Position};
use hs_world::{BuildingRegistry, find_work};

use crate::WorkHandler;

/// The world as one settler's state machine sees it during a tick.
///
/// Borrowed fresh for each tick's update phase.
pub struct ColonyEnv<'a> {
    pub registry: &'a mut BuildingRegistry,
    pub work:     &'a mut dyn WorkHandler,
}

impl<'a> ColonyEnv<'a> {
    pub fn new(registry: &'a mut BuildingRegistry, work: &'a mut dyn WorkHandler) -> Self {
        Self { registry, work }
    }
}

impl Environment for ColonyEnv<'_> {
    fn building_position(&self, building: BuildingId) -> Option<Position> {
        self.registry.position(building)
    }

    fn nearest_food(&self, from: Position) -> Option<Position> {
        self.registry.nearest_food(from).map(|(_, pos)| pos)
    }

    fn find_work(&mut self, agent: &mut Agent) -> bool {
        find_work(agent, self.registry).is_ok()
    }

    fn perform_work(&mut self, agent: &Agent) {
        let workplace = agent.workplace.and_then(|w| self.registry.get(w));
        self.work.perform_work(agent, workplace);
    }
}
