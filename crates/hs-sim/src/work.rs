//! What a completed production interval does.

use rustc_hash::FxHashMap;
use tracing::trace;

use hs_agent::Agent;
use hs_world::{Building, BuildingKind};

/// Receives every completed production interval.
///
/// Production and resources live outside the settler core; this is the hook
/// an economy layer plugs into.  `workplace` is `None` when the settler was
/// made to work without a live workplace.
pub trait WorkHandler {
    fn perform_work(&mut self, agent: &Agent, workplace: Option<&Building>);
}

/// A [`WorkHandler`] that ignores work.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopWork;

impl WorkHandler for NoopWork {
    fn perform_work(&mut self, _agent: &Agent, _workplace: Option<&Building>) {}
}

/// Sums output per workplace kind.  Each interval yields the worker's
/// profession `work_speed` in units.
#[derive(Clone, Debug, Default)]
pub struct ProductionTally {
    by_kind: FxHashMap<BuildingKind, f64>,
    cycles:  u64,
}

impl ProductionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Units produced at buildings of `kind`.
    pub fn produced(&self, kind: BuildingKind) -> f64 {
        self.by_kind.get(&kind).copied().unwrap_or(0.0)
    }

    /// Production intervals completed, with or without a workplace.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Totals in [`BuildingKind::ALL`] order, skipping kinds with no output.
    pub fn totals(&self) -> Vec<(BuildingKind, f64)> {
        BuildingKind::ALL
            .into_iter()
            .filter_map(|k| self.by_kind.get(&k).map(|v| (k, *v)))
            .collect()
    }
}

impl WorkHandler for ProductionTally {
    fn perform_work(&mut self, agent: &Agent, workplace: Option<&Building>) {
        self.cycles += 1;
        if let Some(b) = workplace {
            let units = agent.profession.work_speed.max(0.0) as f64;
            *self.by_kind.entry(b.kind).or_default() += units;
            trace!(agent = %agent.id, building = %b.id, units, "work performed");
        }
    }
}
