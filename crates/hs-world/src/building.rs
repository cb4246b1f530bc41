//! Building kinds and records.

use std::str::FromStr;

use hs_core::{AgentId, BuildingId, Position};

/// Type of building.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BuildingKind {
    House,
    Farm,
    LumberMill,
    Mine,
    FishingDock,
    Smithy,
    Bakery,
    Granary,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 8] = [
        BuildingKind::House,
        BuildingKind::Farm,
        BuildingKind::LumberMill,
        BuildingKind::Mine,
        BuildingKind::FishingDock,
        BuildingKind::Smithy,
        BuildingKind::Bakery,
        BuildingKind::Granary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildingKind::House       => "house",
            BuildingKind::Farm        => "farm",
            BuildingKind::LumberMill  => "lumber_mill",
            BuildingKind::Mine        => "mine",
            BuildingKind::FishingDock => "fishing_dock",
            BuildingKind::Smithy      => "smithy",
            BuildingKind::Bakery      => "bakery",
            BuildingKind::Granary     => "granary",
        }
    }

    /// Hungry settlers walk to the nearest complete building of these kinds.
    pub fn is_food_source(self) -> bool {
        matches!(
            self,
            BuildingKind::Farm | BuildingKind::FishingDock | BuildingKind::Bakery | BuildingKind::Granary
        )
    }

    /// Residents a new building of this kind can house.
    pub fn default_capacity(self) -> u32 {
        match self {
            BuildingKind::House => 4,
            _ => 0,
        }
    }

    /// Worker slots a new building of this kind offers.
    pub fn default_required_workers(self) -> u32 {
        match self {
            BuildingKind::House       => 0,
            BuildingKind::Farm        => 3,
            BuildingKind::LumberMill  => 2,
            BuildingKind::Mine        => 3,
            BuildingKind::FishingDock => 2,
            BuildingKind::Smithy      => 1,
            BuildingKind::Bakery      => 2,
            BuildingKind::Granary     => 1,
        }
    }
}

impl std::fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildingKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown building kind `{s}`"))
    }
}

// ── Building ──────────────────────────────────────────────────────────────────

/// One placed building.
#[derive(Clone, Debug, PartialEq)]
pub struct Building {
    pub id:       BuildingId,
    pub kind:     BuildingKind,
    pub position: Position,

    /// Construction finished.  Only complete houses take residents and only
    /// complete food sources feed anyone.
    pub complete: bool,

    /// Resident limit (houses).
    pub capacity:  u32,
    pub occupants: u32,

    /// Worker slots; `workers.len()` never exceeds this through the
    /// assignment policy.
    pub required_workers: u32,
    pub workers:          Vec<AgentId>,
}

impl Building {
    /// A complete building with the kind's default capacity and slots.
    pub fn new(id: BuildingId, kind: BuildingKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            complete: true,
            capacity: kind.default_capacity(),
            occupants: 0,
            required_workers: kind.default_required_workers(),
            workers: Vec::new(),
        }
    }

    #[inline]
    pub fn has_room(&self) -> bool {
        self.complete && self.occupants < self.capacity
    }

    #[inline]
    pub fn has_vacancy(&self) -> bool {
        (self.workers.len() as u32) < self.required_workers
    }

    #[inline]
    pub fn employs(&self, agent: AgentId) -> bool {
        self.workers.contains(&agent)
    }
}
