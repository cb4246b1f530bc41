//! The building store.

use rustc_hash::FxHashMap;
use tracing::debug;

use hs_core::{AgentId, BuildingId, Position};
use hs_spatial::PointIndex;

use crate::{Building, BuildingKind};

/// Every building in the colony, addressable by id and scannable per kind in
/// creation order.
///
/// # Layout
///
/// `slots[id.index()]` holds the building, or `None` once it is removed; ids
/// are never reused, so a stale handle can never alias a newer building.
/// `by_kind` lists ids per kind in creation order, and `food` is an R-tree
/// over complete food sources.
#[derive(Default)]
pub struct BuildingRegistry {
    slots:   Vec<Option<Building>>,
    by_kind: FxHashMap<BuildingKind, Vec<BuildingId>>,
    food:    PointIndex<BuildingId>,
}

impl BuildingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Placement ─────────────────────────────────────────────────────────────

    /// Place a complete building with default capacity and worker slots.
    pub fn add(&mut self, kind: BuildingKind, position: Position) -> BuildingId {
        self.insert(kind, position, true)
    }

    /// Place an unfinished building; it takes no residents and feeds no one
    /// until [`complete`](Self::complete) is called.
    pub fn add_site(&mut self, kind: BuildingKind, position: Position) -> BuildingId {
        self.insert(kind, position, false)
    }

    fn insert(&mut self, kind: BuildingKind, position: Position, complete: bool) -> BuildingId {
        let id = BuildingId(self.slots.len() as u32);
        let mut building = Building::new(id, kind, position);
        building.complete = complete;
        if complete && kind.is_food_source() {
            self.food.insert(position, id);
        }
        self.slots.push(Some(building));
        self.by_kind.entry(kind).or_default().push(id);
        debug!(building = %id, %kind, %position, complete, "building placed");
        id
    }

    /// Finish construction.  Returns `false` for unknown or already complete
    /// buildings.
    pub fn complete(&mut self, id: BuildingId) -> bool {
        let Some(b) = self.get_mut(id) else { return false };
        if b.complete {
            return false;
        }
        b.complete = true;
        let (kind, position) = (b.kind, b.position);
        if kind.is_food_source() {
            self.food.insert(position, id);
        }
        true
    }

    /// Remove a building.  Settlers still holding its id are left with a
    /// dangling handle, which they clear the next time they try to use it.
    pub fn remove(&mut self, id: BuildingId) -> Option<Building> {
        let building = self.slots.get_mut(id.index())?.take()?;
        if let Some(ids) = self.by_kind.get_mut(&building.kind) {
            ids.retain(|b| *b != id);
        }
        if building.complete && building.kind.is_food_source() {
            self.food.remove(building.position, id);
        }
        debug!(building = %id, kind = %building.kind, "building removed");
        Some(building)
    }

    // ── Lookup ────────────────────────────────────────────────────────────────

    pub fn get(&self, id: BuildingId) -> Option<&Building> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: BuildingId) -> Option<&mut Building> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    #[inline]
    pub fn position(&self, id: BuildingId) -> Option<Position> {
        self.get(id).map(|b| b.position)
    }

    /// Ids of live buildings of `kind`, in creation order.
    pub fn ids_of_kind(&self, kind: BuildingKind) -> &[BuildingId] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Live buildings of `kind`, in creation order.
    pub fn of_kind(&self, kind: BuildingKind) -> impl Iterator<Item = &Building> + '_ {
        self.ids_of_kind(kind).iter().filter_map(|id| self.get(*id))
    }

    /// All live buildings in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Building> + '_ {
        self.slots.iter().flatten()
    }

    /// Number of live buildings.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Closest complete food source to `from`.
    pub fn nearest_food(&self, from: Position) -> Option<(BuildingId, Position)> {
        self.food.nearest(from).map(|(pos, id)| (id, pos))
    }

    // ── Membership ────────────────────────────────────────────────────────────

    /// Append `agent` to the worker list.  Returns `false` if the building
    /// does not exist or already lists the agent.  Slot limits are the
    /// assignment policy's concern, not this method's.
    pub fn add_worker(&mut self, id: BuildingId, agent: AgentId) -> bool {
        match self.get_mut(id) {
            Some(b) if !b.employs(agent) => {
                b.workers.push(agent);
                true
            }
            _ => false,
        }
    }

    /// Drop `agent` from the worker list.  Returns `false` if it was not
    /// listed.
    pub fn remove_worker(&mut self, id: BuildingId, agent: AgentId) -> bool {
        let Some(b) = self.get_mut(id) else { return false };
        let before = b.workers.len();
        b.workers.retain(|a| *a != agent);
        b.workers.len() != before
    }

    pub fn add_occupant(&mut self, id: BuildingId) -> bool {
        match self.get_mut(id) {
            Some(b) => {
                b.occupants += 1;
                true
            }
            None => false,
        }
    }

    pub fn remove_occupant(&mut self, id: BuildingId) -> bool {
        match self.get_mut(id) {
            Some(b) if b.occupants > 0 => {
                b.occupants -= 1;
                true
            }
            _ => false,
        }
    }

    // ── Totals ────────────────────────────────────────────────────────────────

    pub fn total_occupants(&self) -> u32 {
        self.iter().map(|b| b.occupants).sum()
    }

    pub fn total_workers(&self) -> usize {
        self.iter().map(|b| b.workers.len()).sum()
    }
}
