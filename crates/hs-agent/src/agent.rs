//! The settler record.

use std::sync::Arc;

use hs_core::{AgentId, BuildingId, Position};

use crate::{NeedKind, Needs, NeedsConfig, Profession};

/// One simulated settler.
///
/// Behavior state is *not* stored here: the scheduler keeps one state
/// machine per agent in a parallel array so that the machine can borrow the
/// agent mutably while it runs.
#[derive(Clone, Debug)]
pub struct Agent {
    pub id:   AgentId,
    pub name: String,

    /// Shared, immutable capability descriptor.
    pub profession: Arc<Profession>,

    pub position: Position,

    /// Facing angle in radians, written while travelling.  `atan2(dx, dz)`,
    /// so 0 faces +z.
    pub heading: f32,

    /// Non-owning handle to the settler's house.  The building registry owns
    /// the building; a stale handle resolves to nothing.
    pub home: Option<BuildingId>,

    /// Non-owning handle to the settler's workplace.
    pub workplace: Option<BuildingId>,

    pub needs: Needs,

    /// Completed work cycles.
    pub experience: u32,

    /// Set while asleep indoors; renderers skip hidden settlers.
    pub hidden: bool,
}

impl Agent {
    /// A fresh settler: every need at maximum, no home, no workplace.
    pub fn new(
        id:         AgentId,
        name:       impl Into<String>,
        profession: Arc<Profession>,
        position:   Position,
        needs:      &NeedsConfig,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            profession,
            position,
            heading: 0.0,
            home: None,
            workplace: None,
            needs: Needs::full(needs),
            experience: 0,
            hidden: false,
        }
    }

    /// `false` for the unemployed `none` profession.
    #[inline]
    pub fn has_profession(&self) -> bool {
        !self.profession.kind.is_none()
    }

    /// Apply one tick of need decay.
    #[inline]
    pub fn decay_needs(&mut self, config: &NeedsConfig, delta_secs: f32) {
        self.needs.decay(config, delta_secs);
    }

    #[inline]
    pub fn need(&self, kind: NeedKind) -> f32 {
        self.needs.get(kind)
    }
}
