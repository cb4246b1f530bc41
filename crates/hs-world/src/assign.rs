//! First-fit home and workplace assignment.

use hs_agent::{Agent, ProfessionKind};
use hs_core::BuildingId;
use tracing::debug;

use crate::{AssignError, AssignResult, BuildingKind, BuildingRegistry};

/// The building kind a profession works at, or `None` for the unemployed.
pub fn workplace_kind(profession: ProfessionKind) -> Option<BuildingKind> {
    match profession {
        ProfessionKind::None       => None,
        ProfessionKind::Farmer     => Some(BuildingKind::Farm),
        ProfessionKind::Lumberjack => Some(BuildingKind::LumberMill),
        ProfessionKind::Miner      => Some(BuildingKind::Mine),
        ProfessionKind::Fisher     => Some(BuildingKind::FishingDock),
        ProfessionKind::Blacksmith => Some(BuildingKind::Smithy),
        ProfessionKind::Baker      => Some(BuildingKind::Bakery),
    }
}

/// Bind `agent` to the first complete house, in creation order, with an
/// occupant count below its capacity.
///
/// A settler that already has a live home keeps it; there is no
/// reassignment or eviction.
///
/// # Errors
///
/// [`AssignError::NoVacancy`] when every house is full or unfinished.
pub fn assign_home(agent: &mut Agent, registry: &mut BuildingRegistry) -> AssignResult<BuildingId> {
    if let Some(home) = agent.home.filter(|h| registry.get(*h).is_some()) {
        return Ok(home);
    }

    let Some(house) = registry.of_kind(BuildingKind::House).find(|b| b.has_room()).map(|b| b.id)
    else {
        debug!(agent = %agent.id, "no house has room");
        return Err(AssignError::NoVacancy(BuildingKind::House));
    };

    registry.add_occupant(house);
    agent.home = Some(house);
    debug!(agent = %agent.id, building = %house, "home assigned");
    Ok(house)
}

/// Bind `agent` to the first building of its profession's workplace kind,
/// in creation order, with a free worker slot.  The agent is appended to
/// that building's worker list before returning.
///
/// A settler already listed at a live workplace keeps it.
///
/// # Errors
///
/// [`AssignError::NoWorkplaceKind`] for the unemployed profession,
/// [`AssignError::NoVacancy`] when every matching building is full.
pub fn find_work(agent: &mut Agent, registry: &mut BuildingRegistry) -> AssignResult<BuildingId> {
    if let Some(current) = agent.workplace {
        if registry.get(current).is_some_and(|b| b.employs(agent.id)) {
            return Ok(current);
        }
    }

    let profession = agent.profession.kind;
    let kind = workplace_kind(profession).ok_or(AssignError::NoWorkplaceKind(profession))?;

    let Some(workplace) = registry.of_kind(kind).find(|b| b.has_vacancy()).map(|b| b.id) else {
        debug!(agent = %agent.id, %kind, "no workplace vacancy");
        return Err(AssignError::NoVacancy(kind));
    };

    registry.add_worker(workplace, agent.id);
    agent.workplace = Some(workplace);
    debug!(agent = %agent.id, building = %workplace, %kind, "workplace assigned");
    Ok(workplace)
}

/// Unbind `agent` from its workplace, removing it from the building's worker
/// list.  Returns the released building, if there was one.
pub fn release_workplace(agent: &mut Agent, registry: &mut BuildingRegistry) -> Option<BuildingId> {
    let workplace = agent.workplace.take()?;
    registry.remove_worker(workplace, agent.id);
    debug!(agent = %agent.id, building = %workplace, "workplace released");
    Some(workplace)
}
