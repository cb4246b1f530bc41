//! Fluent builder for constructing a [`Sim`].

use hs_agent::{AgentRngs, AgentStore, NeedsConfig, ProfessionTable};
use hs_behavior::BehaviorTuning;
use hs_core::SimConfig;
use hs_spatial::Planner;
use hs_world::BuildingRegistry;

use crate::{Settings, Sim, SimResult, WorkHandler, settings};

/// Fluent builder for [`Sim<W, P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: seed, tick length, game speed, run length, …
/// - `W: WorkHandler`: what completed work does (e.g. [`NoopWork`][crate::NoopWork])
/// - `P: Planner`: path planner (e.g. [`hs_spatial::LinearPlanner`])
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                         |
/// |--------------------|---------------------------------|
/// | `.needs(c)`        | `NeedsConfig::default()`        |
/// | `.tuning(t)`       | `BehaviorTuning::default()`     |
/// | `.professions(t)`  | Built-in `ProfessionTable`      |
/// | `.registry(r)`     | Empty `BuildingRegistry`        |
///
/// # Example
///
/// ```rust,ignore
/// let settings = Settings::load("village.toml")?;
/// let mut sim = SimBuilder::from_settings(settings, ProductionTally::new(), LinearPlanner)
///     .registry(registry)
///     .build()?;
/// sim.spawn_agent("Ada", ProfessionKind::Farmer, Position::new(0.0, 0.0));
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<W: WorkHandler, P: Planner> {
    config:      SimConfig,
    needs:       NeedsConfig,
    tuning:      BehaviorTuning,
    professions: ProfessionTable,
    registry:    BuildingRegistry,
    work:        W,
    planner:     P,
}

impl<W: WorkHandler, P: Planner> SimBuilder<W, P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, work: W, planner: P) -> Self {
        Self {
            config,
            needs:       NeedsConfig::default(),
            tuning:      BehaviorTuning::default(),
            professions: ProfessionTable::default(),
            registry:    BuildingRegistry::new(),
            work,
            planner,
        }
    }

    /// Everything a settings file configures.
    pub fn from_settings(settings: Settings, work: W, planner: P) -> Self {
        let professions = settings.profession_table();
        Self::new(settings.sim, work, planner)
            .needs(settings.needs)
            .tuning(settings.behavior)
            .professions(professions)
    }

    pub fn needs(mut self, needs: NeedsConfig) -> Self {
        self.needs = needs;
        self
    }

    pub fn tuning(mut self, tuning: BehaviorTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn professions(mut self, professions: ProfessionTable) -> Self {
        self.professions = professions;
        self
    }

    /// Start with buildings already placed.
    pub fn registry(mut self, registry: BuildingRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sim`] with no
    /// settlers.
    pub fn build(self) -> SimResult<Sim<W, P>> {
        settings::validate(&self.config, &self.needs, &self.tuning)?;

        Ok(Sim {
            clock:       self.config.make_clock(),
            agents:      AgentStore::new(),
            rngs:        AgentRngs::new(self.config.seed),
            config:      self.config,
            machines:    Vec::new(),
            registry:    self.registry,
            needs:       self.needs,
            tuning:      self.tuning,
            professions: self.professions,
            work:        self.work,
            planner:     self.planner,
        })
    }
}
