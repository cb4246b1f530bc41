//! Integration tests for hs-sim.

use hs_agent::{NeedKind, ProfessionKind};
use hs_behavior::{BehaviorError, StateKind, Transition};
use hs_core::{AgentId, CoreError, Position, SimClock, SimConfig, Tick};
use hs_spatial::LinearPlanner;
use hs_world::BuildingKind;

use crate::{NoopObserver, ProductionTally, Settings, Sim, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig { total_ticks, output_interval_ticks: 100, ..SimConfig::default() }
}

fn colony(total_ticks: u64) -> Sim<ProductionTally, LinearPlanner> {
    SimBuilder::new(test_config(total_ticks), ProductionTally::new(), LinearPlanner)
        .build()
        .unwrap()
}

#[derive(Default)]
struct Recorder {
    starts:      u64,
    ends:        u64,
    transitions: Vec<Transition>,
    snapshots:   Vec<(Tick, usize)>,
    stamped_at:  Vec<(Tick, f64)>,
    finished:    Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.starts += 1;
    }

    fn on_transition(&mut self, transition: &Transition) {
        self.transitions.push(*transition);
    }

    fn on_tick_end(&mut self, _tick: Tick, _transitions: usize) {
        self.ends += 1;
    }

    fn on_snapshot(
        &mut self,
        tick:     Tick,
        clock:    &SimClock,
        agents:   &hs_agent::AgentStore,
        machines: &[hs_behavior::StateMachine],
    ) {
        assert_eq!(agents.len(), machines.len());
        self.snapshots.push((tick, agents.len()));
        self.stamped_at.push((tick, clock.elapsed_secs));
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.finished = Some(final_tick);
    }
}

// ── Builder & settings ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_empty_colony() {
        let sim = colony(10);
        assert!(sim.agents.is_empty());
        assert!(sim.machines.is_empty());
        assert_eq!(sim.clock.current_tick, Tick::ZERO);
    }

    #[test]
    fn rejects_non_positive_tick() {
        let config = SimConfig { tick_secs: 0.0, ..SimConfig::default() };
        let result = SimBuilder::new(config, ProductionTally::new(), LinearPlanner).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn rejects_inverted_range() {
        let mut settings = Settings::default();
        settings.behavior.work_duration_min = 90.0;
        let result = SimBuilder::from_settings(settings, ProductionTally::new(), LinearPlanner).build();
        assert!(matches!(result, Err(SimError::Config(msg)) if msg.contains("work_duration")));
    }
}

#[cfg(test)]
mod settings_tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_document_is_stock_colony() {
        let s = Settings::from_toml_str("").unwrap();
        assert_eq!(s.sim.seed, SimConfig::default().seed);
        assert_eq!(s.behavior, hs_behavior::BehaviorTuning::default());
        assert!(s.professions.is_empty());
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let s = Settings::from_toml_str(
            r#"
            [sim]
            seed = 7
            game_speed = 2.0

            [needs.hunger]
            max = 100.0
            decay_per_sec = 0.8
            critical = 20.0

            [behavior]
            wander_speed_factor = 0.25

            [[professions]]
            kind = "farmer"
            move_speed = 4.5
            "#,
        )
        .unwrap();
        assert_eq!(s.sim.seed, 7);
        assert_eq!(s.sim.tick_secs, 0.1);
        assert_eq!(s.needs.hunger.decay_per_sec, 0.8);
        assert_eq!(s.needs.energy.decay_per_sec, 0.3);
        assert_eq!(s.behavior.wander_speed_factor, 0.25);
        assert_eq!(s.behavior.hungry_below, 30.0);

        let table = s.profession_table();
        assert_eq!(table.get(ProfessionKind::Farmer).move_speed, Some(4.5));
        assert_eq!(table.get(ProfessionKind::Farmer).work_speed, 1.0);
        assert_eq!(
            table.get(ProfessionKind::Miner).move_speed,
            hs_agent::Profession::builtin(ProfessionKind::Miner).move_speed
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = Settings::from_toml_str("[sim]\ngame_speed = -1.0\n").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Settings::from_toml_str("[sim\nseed = ").unwrap_err();
        assert!(matches!(err, SimError::Settings(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sim]\ntotal_ticks = 123").unwrap();
        let s = Settings::load(file.path()).unwrap();
        assert_eq!(s.sim.total_ticks, 123);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}

// ── Population ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn_tests {
    use super::*;

    #[test]
    fn spawned_settler_is_idle_and_full() {
        let mut sim = colony(10);
        let id = sim.spawn_agent("Ada", ProfessionKind::Farmer, Position::new(1.0, 2.0));
        assert_eq!(id, AgentId(0));
        assert_eq!(sim.state(id), Some(StateKind::Idle));
        assert_eq!(sim.previous_state_name(id), None);
        let agent = sim.agents.get(id).unwrap();
        for kind in NeedKind::ALL {
            assert_eq!(agent.need(kind), 100.0);
        }
        assert_eq!(agent.workplace, None);
    }

    #[test]
    fn homes_fill_first_fit_then_run_out() {
        let mut sim = colony(10);
        let house = sim.add_building(BuildingKind::House, Position::new(0.0, 5.0));
        let ids: Vec<AgentId> = (0..5)
            .map(|i| sim.spawn_agent(format!("s{i}"), ProfessionKind::None, Position::ORIGIN))
            .collect();
        for id in &ids[..4] {
            assert_eq!(sim.agents.get(*id).unwrap().home, Some(house));
        }
        // The failed assignment leaves the newcomer homeless, not unspawned.
        assert_eq!(sim.agents.get(ids[4]).unwrap().home, None);
        assert_eq!(sim.state(ids[4]), Some(StateKind::Idle));
        assert_eq!(sim.registry.get(house).unwrap().occupants, 4);
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_tests {
    use super::*;

    #[test]
    fn step_decays_needs_and_advances_clock() {
        let mut sim = colony(10);
        let id = sim.spawn_agent("Ada", ProfessionKind::None, Position::ORIGIN);
        assert!(sim.step().is_empty());
        let hunger = sim.agents.get(id).unwrap().need(NeedKind::Hunger);
        assert!((hunger - 99.95).abs() < 1e-4, "hunger {hunger}");
        assert_eq!(sim.clock.current_tick, Tick(1));
        assert!((sim.clock.elapsed_secs - 0.1).abs() < 1e-6);
    }

    #[test]
    fn run_calls_every_hook() {
        let mut sim = colony(250);
        sim.spawn_agent("Ada", ProfessionKind::None, Position::ORIGIN);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.starts, 250);
        assert_eq!(rec.ends, 250);
        assert_eq!(rec.snapshots, vec![(Tick(0), 1), (Tick(100), 1), (Tick(200), 1)]);
        assert_eq!(rec.finished, Some(Tick(250)));
        // An idle settler with nothing to do wanders within 25 s.
        assert!(rec.transitions.iter().any(|t| t.to == StateKind::Wander));
    }

    #[test]
    fn snapshots_carry_end_of_tick_time() {
        let mut sim = colony(250);
        sim.spawn_agent("Ada", ProfessionKind::None, Position::ORIGIN);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.stamped_at.len(), 3);
        for (tick, secs) in &rec.stamped_at {
            let end = (tick.0 + 1) as f64 * sim.config.delta_secs() as f64;
            assert!((secs - end).abs() < 1e-4, "{tick}: {secs} vs {end}");
        }
    }

    #[test]
    fn same_seed_same_colony() {
        let run = || {
            let mut sim = colony(0);
            sim.add_building(BuildingKind::House, Position::new(-4.0, 0.0));
            sim.add_building(BuildingKind::Farm, Position::new(8.0, 3.0));
            for i in 0..4 {
                sim.spawn_agent(format!("s{i}"), ProfessionKind::Farmer, Position::new(i as f32, 0.0));
            }
            sim.run_ticks(600, &mut NoopObserver).unwrap();
            sim.agents
                .iter()
                .map(|a| (a.position, sim.state(a.id)))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn farmer_finds_work_and_produces() {
        let mut sim = colony(0);
        let farm = sim.add_building(BuildingKind::Farm, Position::new(6.0, 0.0));
        let id = sim.spawn_agent("Ada", ProfessionKind::Farmer, Position::ORIGIN);

        let mut rec = Recorder::default();
        sim.run_ticks(400, &mut rec).unwrap();

        let agent = sim.agents.get(id).unwrap();
        assert_eq!(agent.workplace, Some(farm));
        assert!(agent.experience >= 1);
        assert!(sim.work.produced(BuildingKind::Farm) >= 1.0);
        assert_eq!(sim.registry.get(farm).unwrap().workers, vec![id]);

        let path: Vec<StateKind> = rec.transitions.iter().map(|t| t.to).take(3).collect();
        assert_eq!(path, vec![StateKind::FindWork, StateKind::GoToWork, StateKind::Working]);
    }

    #[test]
    fn hungry_settler_eats_at_nearest_food() {
        let mut sim = colony(0);
        sim.add_building(BuildingKind::Granary, Position::new(30.0, 0.0));
        let bakery = Position::new(0.0, 3.0);
        sim.add_building(BuildingKind::Bakery, bakery);
        let id = sim.spawn_agent("Ada", ProfessionKind::None, Position::ORIGIN);
        sim.agents.get_mut(id).unwrap().needs.set(NeedKind::Hunger, 25.0);

        // Short enough that the meal is still in progress at the end.
        let mut rec = Recorder::default();
        sim.run_ticks(40, &mut rec).unwrap();

        let states: Vec<StateKind> = rec.transitions.iter().map(|t| t.to).take(3).collect();
        assert_eq!(states, vec![StateKind::FindFood, StateKind::GoToFood, StateKind::Eating]);
        let agent = sim.agents.get(id).unwrap();
        assert!(agent.position.distance(bakery) < 0.1);
        assert!(agent.need(NeedKind::Hunger) > 25.0);
    }

    #[test]
    fn needs_stay_in_bounds_at_high_speed() {
        let config = SimConfig { game_speed: 25.0, total_ticks: 4_000, ..test_config(0) };
        let mut sim = SimBuilder::new(config, ProductionTally::new(), LinearPlanner)
            .build()
            .unwrap();
        sim.add_building(BuildingKind::House, Position::new(5.0, 5.0));
        sim.add_building(BuildingKind::Farm, Position::new(-8.0, 2.0));
        sim.add_building(BuildingKind::Mine, Position::new(15.0, -3.0));
        for (i, kind) in ProfessionKind::ALL.into_iter().enumerate() {
            sim.spawn_agent(format!("s{i}"), kind, Position::ORIGIN);
        }
        sim.run(&mut NoopObserver).unwrap();

        for agent in sim.agents.iter() {
            for (kind, value) in agent.needs.iter() {
                assert!((0.0..=agent.needs.max(kind)).contains(&value), "{kind} = {value}");
            }
            assert!(agent.position.x.is_finite() && agent.position.z.is_finite());
        }
        let total: usize = sim.state_counts().iter().map(|(_, n)| n).sum();
        assert_eq!(total, ProfessionKind::ALL.len());
    }
}

// ── External control ──────────────────────────────────────────────────────────

#[cfg(test)]
mod control_tests {
    use super::*;

    #[test]
    fn change_profession_releases_workplace() {
        let mut sim = colony(0);
        let farm = sim.add_building(BuildingKind::Farm, Position::new(6.0, 0.0));
        let id = sim.spawn_agent("Ada", ProfessionKind::Farmer, Position::ORIGIN);
        sim.run_ticks(200, &mut NoopObserver).unwrap();
        assert_eq!(sim.agents.get(id).unwrap().workplace, Some(farm));
        let before = sim.state(id).unwrap();

        let t = sim.change_profession(id, ProfessionKind::Miner).unwrap();
        assert_eq!((t.from, t.to), (before, StateKind::Idle));
        let agent = sim.agents.get(id).unwrap();
        assert_eq!(agent.workplace, None);
        assert_eq!(agent.profession.kind, ProfessionKind::Miner);
        assert!(sim.registry.get(farm).unwrap().workers.is_empty());
    }

    #[test]
    fn unknown_named_target_is_reported() {
        let mut sim = colony(0);
        let id = sim.spawn_agent("Ada", ProfessionKind::None, Position::ORIGIN);
        let err = sim.force_transition_named(id, "NONEXISTENT").unwrap_err();
        assert!(matches!(
            err,
            SimError::Behavior(BehaviorError::UnknownState(ref s)) if s == "NONEXISTENT"
        ));
        assert_eq!(sim.state(id), Some(StateKind::Idle));
        assert_eq!(sim.machine(id).unwrap().transition_count(), 0);
    }

    #[test]
    fn forced_sleep_hides_settler() {
        let mut sim = colony(0);
        let id = sim.spawn_agent("Ada", ProfessionKind::None, Position::ORIGIN);
        sim.force_transition_named(id, "Sleeping").unwrap();
        assert_eq!(sim.state_name(id), Some("Sleeping"));
        assert_eq!(sim.previous_state_name(id), Some("Idle"));
        assert!(sim.agents.get(id).unwrap().hidden);
    }

    #[test]
    fn missing_agent_is_an_error() {
        let mut sim = colony(0);
        let err = sim.force_transition(AgentId(3), StateKind::Rest).unwrap_err();
        assert!(matches!(err, SimError::Core(CoreError::AgentNotFound(AgentId(3)))));
    }

    #[test]
    fn blackboard_is_writable_through_sim() {
        let mut sim = colony(0);
        let id = sim.spawn_agent("Ada", ProfessionKind::None, Position::ORIGIN);
        sim.machine_mut(id).unwrap().blackboard_mut().set("note", "foreman");
        sim.run_ticks(50, &mut NoopObserver).unwrap();
        assert_eq!(
            sim.machine(id).unwrap().read("note"),
            Some(hs_behavior::Value::Text("foreman".into()))
        );
    }
}
