//! The `Sim` struct and its tick loop.

use tracing::{debug, info, trace};

use hs_agent::{AgentRngs, AgentStore, NeedsConfig, ProfessionKind, ProfessionTable};
use hs_behavior::{BehaviorTuning, StateKind, StateMachine, TickContext, Transition};
use hs_core::{AgentId, BuildingId, CoreError, Position, SimClock, SimConfig, Tick};
use hs_spatial::Planner;
use hs_world::{BuildingKind, BuildingRegistry, assign_home, release_workplace};

use crate::{ColonyEnv, SimObserver, SimResult, WorkHandler};

/// The colony scheduler.
///
/// `Sim<W, P>` owns every settler, their state machines, and the buildings,
/// and drives the per-tick loop:
///
/// 1. **Decay**: every settler's needs drop by `rate × dt` (on Rayon's pool
///    with the `parallel` feature; decay reads nothing but the settler
///    itself).
/// 2. **Behavior** (sequential, creation order): each settler's state
///    machine runs its update hook and guards.  Assignment mutates shared
///    worker lists here, which is sound only because this phase never runs
///    two settlers at once.
/// 3. **Clock**: advance one tick of `tick_secs × game_speed` seconds.
///
/// Without the `parallel` feature decay and behavior interleave per settler;
/// the outcome is the same either way.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<W: WorkHandler, P: Planner> {
    /// Global configuration (seed, tick length, run length, …).
    pub config: SimConfig,

    /// Tick counter, elapsed seconds, and time of day.
    pub clock: SimClock,

    /// Every settler, in creation order.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// `machines[i]` drives the settler with id `i`.
    pub machines: Vec<StateMachine>,

    /// Buildings: homes, workplaces, food sources.
    pub registry: BuildingRegistry,

    pub needs:       NeedsConfig,
    pub tuning:      BehaviorTuning,
    pub professions: ProfessionTable,

    /// Receives completed production intervals.
    pub work: W,

    /// Builds every travel state's path.
    pub planner: P,
}

impl<W: WorkHandler, P: Planner> Sim<W, P> {
    // ── Population ────────────────────────────────────────────────────────

    /// Add a settler: needs at maximum, Idle, no workplace.  A home is
    /// assigned if any house has room; failing that the settler stays
    /// homeless.
    pub fn spawn_agent(
        &mut self,
        name:       impl Into<String>,
        profession: ProfessionKind,
        position:   Position,
    ) -> AgentId {
        let descriptor = self.professions.get(profession);
        let id = self.agents.spawn(&mut self.rngs, name, descriptor, position, &self.needs);
        self.machines.push(StateMachine::new(self.rngs.get_mut(id), &self.tuning));

        if let Some(agent) = self.agents.get_mut(id) {
            if let Err(e) = assign_home(agent, &mut self.registry) {
                debug!(agent = %id, error = %e, "settler is homeless");
            }
            debug!(agent = %id, %profession, home = ?agent.home, "settler spawned");
        }
        id
    }

    /// Place a complete building.
    pub fn add_building(&mut self, kind: BuildingKind, position: Position) -> BuildingId {
        self.registry.add(kind, position)
    }

    /// Switch a settler's profession.  The old workplace is released first,
    /// then the settler is forced back to Idle.
    pub fn change_profession(
        &mut self,
        agent:      AgentId,
        profession: ProfessionKind,
    ) -> SimResult<Transition> {
        let descriptor = self.professions.get(profession);
        let settler = self.agents.get_mut(agent).ok_or(CoreError::AgentNotFound(agent))?;
        release_workplace(settler, &mut self.registry);
        settler.profession = descriptor;
        debug!(%agent, %profession, "profession changed");
        self.force_transition(agent, StateKind::Idle)
    }

    // ── Forced transitions ────────────────────────────────────────────────

    /// Move a settler to `target` immediately, running exit and enter hooks.
    pub fn force_transition(&mut self, agent: AgentId, target: StateKind) -> SimResult<Transition> {
        let work_time = self.clock.is_work_time(self.config.work_hours);
        let ctx = TickContext::new(self.clock.current_tick, 0.0, work_time, &self.tuning, &self.planner);
        let settler = self.agents.get_mut(agent).ok_or(CoreError::AgentNotFound(agent))?;
        let machine = &mut self.machines[agent.index()];
        let rng = self.rngs.get_mut(agent);
        let mut env = ColonyEnv::new(&mut self.registry, &mut self.work);
        Ok(machine.transition_to(target, settler, rng, &mut env, &ctx))
    }

    /// [`force_transition`](Self::force_transition) by state name.
    ///
    /// # Errors
    ///
    /// [`SimError::Behavior`][crate::SimError::Behavior] for an unknown name;
    /// the settler's state is unchanged.
    pub fn force_transition_named(&mut self, agent: AgentId, name: &str) -> SimResult<Transition> {
        let work_time = self.clock.is_work_time(self.config.work_hours);
        let ctx = TickContext::new(self.clock.current_tick, 0.0, work_time, &self.tuning, &self.planner);
        let settler = self.agents.get_mut(agent).ok_or(CoreError::AgentNotFound(agent))?;
        let machine = &mut self.machines[agent.index()];
        let rng = self.rngs.get_mut(agent);
        let mut env = ColonyEnv::new(&mut self.registry, &mut self.work);
        Ok(machine.transition_to_named(name, settler, rng, &mut env, &ctx)?)
    }

    // ── Readers ───────────────────────────────────────────────────────────

    pub fn machine(&self, agent: AgentId) -> Option<&StateMachine> {
        self.machines.get(agent.index())
    }

    /// Mutable machine access, e.g. to write blackboard annotations.
    pub fn machine_mut(&mut self, agent: AgentId) -> Option<&mut StateMachine> {
        self.machines.get_mut(agent.index())
    }

    pub fn state(&self, agent: AgentId) -> Option<StateKind> {
        self.machine(agent).map(StateMachine::current)
    }

    pub fn state_name(&self, agent: AgentId) -> Option<&'static str> {
        self.machine(agent).map(StateMachine::current_name)
    }

    pub fn previous_state_name(&self, agent: AgentId) -> Option<&'static str> {
        self.machine(agent).and_then(StateMachine::previous_name)
    }

    /// Settlers per state, in [`StateKind::ALL`] order.
    pub fn state_counts(&self) -> [(StateKind, usize); 11] {
        let mut counts = StateKind::ALL.map(|k| (k, 0));
        for m in &self.machines {
            counts[m.current() as usize].1 += 1;
        }
        counts
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            settlers = self.agents.len(),
            buildings = self.registry.len(),
            end = %self.config.end_tick(),
            "simulation start"
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.observed_step(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(clock = %self.clock, "simulation end");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer);
        }
        Ok(())
    }

    /// Advance one tick without an observer and return its transitions.
    pub fn step(&mut self) -> Vec<Transition> {
        let transitions = self.process_tick(self.clock.current_tick);
        self.clock.advance(self.config.delta_secs());
        transitions
    }

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let transitions = self.process_tick(now);
        for t in &transitions {
            observer.on_transition(t);
        }
        observer.on_tick_end(now, transitions.len());

        // Snapshots describe the end of the tick: post-update positions read
        // against the advanced clock.
        self.clock.advance(self.config.delta_secs());
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.clock, &self.agents, &self.machines);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> Vec<Transition> {
        let dt = self.config.delta_secs();
        let work_time = self.clock.is_work_time(self.config.work_hours);

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let needs = &self.needs;
            self.agents
                .as_mut_slice()
                .par_iter_mut()
                .for_each(|agent| agent.decay_needs(needs, dt));
        }

        // Explicit field borrows so the borrow checker sees disjoint access.
        let ctx = TickContext::new(now, dt, work_time, &self.tuning, &self.planner);
        let mut env = ColonyEnv::new(&mut self.registry, &mut self.work);

        let mut transitions = Vec::new();
        let settlers = self
            .agents
            .as_mut_slice()
            .iter_mut()
            .zip(self.machines.iter_mut())
            .zip(self.rngs.inner.iter_mut());
        for ((agent, machine), rng) in settlers {
            #[cfg(not(feature = "parallel"))]
            agent.decay_needs(&self.needs, dt);

            if let Some(t) = machine.update(agent, rng, &mut env, &ctx) {
                transitions.push(t);
            }
        }

        trace!(tick = %now, transitions = transitions.len(), "tick processed");
        transitions
    }
}
