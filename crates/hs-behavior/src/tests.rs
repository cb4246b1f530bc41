//! Unit tests for hs-behavior.

use std::sync::Arc;

use hs_agent::{Agent, NeedKind, NeedsConfig, Profession, ProfessionKind};
use hs_core::{AgentId, AgentRng, BuildingId, Position, Tick};
use hs_spatial::LinearPlanner;

use crate::memory::StateMemory;
use crate::{
    BehaviorError, BehaviorTuning, Environment, Handoff, StateKind, StateMachine, TickContext, Transition,
    Value, guard_targets,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct MockEnv {
    buildings: Vec<(BuildingId, Position)>,
    food:      Option<Position>,
    vacancy:   Option<BuildingId>,
    work_done: u32,
}

impl Environment for MockEnv {
    fn building_position(&self, building: BuildingId) -> Option<Position> {
        self.buildings.iter().find(|(id, _)| *id == building).map(|(_, p)| *p)
    }

    fn nearest_food(&self, _from: Position) -> Option<Position> {
        self.food
    }

    fn find_work(&mut self, agent: &mut Agent) -> bool {
        match self.vacancy {
            Some(b) => {
                agent.workplace = Some(b);
                true
            }
            None => false,
        }
    }

    fn perform_work(&mut self, _agent: &Agent) {
        self.work_done += 1;
    }
}

struct Harness {
    agent:     Agent,
    rng:       AgentRng,
    env:       MockEnv,
    tuning:    BehaviorTuning,
    machine:   StateMachine,
    work_time: bool,
}

impl Harness {
    fn new(kind: ProfessionKind) -> Self {
        let agent = Agent::new(
            AgentId(0),
            "Bram",
            Arc::new(Profession::builtin(kind)),
            Position::ORIGIN,
            &NeedsConfig::default(),
        );
        let mut rng = AgentRng::new(7, AgentId(0));
        let tuning = BehaviorTuning::default();
        let machine = StateMachine::new(&mut rng, &tuning);
        Self { agent, rng, env: MockEnv::default(), tuning, machine, work_time: false }
    }

    fn tick(&mut self, dt: f32) -> Option<Transition> {
        let ctx = TickContext::new(Tick::ZERO, dt, self.work_time, &self.tuning, &LinearPlanner);
        self.machine.update(&mut self.agent, &mut self.rng, &mut self.env, &ctx)
    }

    fn force(&mut self, kind: StateKind) -> Transition {
        let ctx = TickContext::new(Tick::ZERO, 0.0, self.work_time, &self.tuning, &LinearPlanner);
        self.machine.transition_to(kind, &mut self.agent, &mut self.rng, &mut self.env, &ctx)
    }

    fn force_named(&mut self, name: &str) -> Result<Transition, BehaviorError> {
        let ctx = TickContext::new(Tick::ZERO, 0.0, self.work_time, &self.tuning, &LinearPlanner);
        self.machine
            .transition_to_named(name, &mut self.agent, &mut self.rng, &mut self.env, &ctx)
    }

    fn set_idle(&mut self, timer: f32, next_decision: f32) {
        match self.machine.memory_mut() {
            StateMemory::Idle(m) => {
                m.timer = timer;
                m.next_decision = next_decision;
            }
            other => panic!("expected Idle, got {:?}", other.kind()),
        }
    }

    fn set_need(&mut self, kind: NeedKind, value: f32) {
        self.agent.needs.set(kind, value);
    }

    fn state(&self) -> StateKind {
        self.machine.current()
    }

    /// Tick until the state changes, at most `limit` times.
    fn run_until_transition(&mut self, dt: f32, limit: usize) -> Option<Transition> {
        (0..limit).find_map(|_| self.tick(dt))
    }
}

// ── StateKind ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kind_tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for kind in StateKind::ALL {
            assert_eq!(kind.as_str().parse::<StateKind>(), Ok(kind));
        }
        assert_eq!("gotowork".parse::<StateKind>(), Ok(StateKind::GoToWork));
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert_eq!(
            "Dancing".parse::<StateKind>(),
            Err(BehaviorError::UnknownState("Dancing".into()))
        );
    }

    #[test]
    fn every_state_has_an_exit() {
        for kind in StateKind::ALL {
            assert!(!guard_targets(kind).is_empty(), "{kind} has no guards");
        }
    }

    #[test]
    fn idle_guard_priority_order() {
        assert_eq!(
            guard_targets(StateKind::Idle),
            vec![
                StateKind::FindWork,
                StateKind::GoToWork,
                StateKind::FindFood,
                StateKind::GoHome,
                StateKind::Wander,
            ]
        );
        assert_eq!(
            guard_targets(StateKind::Working),
            vec![StateKind::FindFood, StateKind::Rest, StateKind::Idle]
        );
    }
}

// ── Machine core ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod machine_tests {
    use super::*;

    #[test]
    fn starts_idle_without_previous() {
        let h = Harness::new(ProfessionKind::Farmer);
        assert_eq!(h.state(), StateKind::Idle);
        assert_eq!(h.machine.previous(), None);
        assert_eq!(h.machine.previous_name(), None);
        assert_eq!(h.machine.transition_count(), 0);
        let next = h.machine.read("next_decision").and_then(|v| v.as_number()).unwrap();
        assert!((2.0..=5.0).contains(&next));
    }

    #[test]
    fn no_guard_means_no_transition() {
        let mut h = Harness::new(ProfessionKind::None);
        h.set_idle(0.0, 3.0);
        assert!(h.tick(0.5).is_none());
        assert_eq!(h.state(), StateKind::Idle);
        assert_eq!(h.machine.previous(), None);
        assert_eq!(h.machine.transition_count(), 0);
        // Memory still advances.
        assert_eq!(h.machine.read("timer"), Some(Value::Number(0.5)));
    }

    #[test]
    fn unknown_target_leaves_state_unchanged() {
        let mut h = Harness::new(ProfessionKind::Farmer);
        h.force(StateKind::Rest);
        let before = h.machine.memory().clone();

        let err = h.force_named("NONEXISTENT").unwrap_err();
        assert_eq!(err, BehaviorError::UnknownState("NONEXISTENT".into()));
        assert_eq!(h.state(), StateKind::Rest);
        assert_eq!(h.machine.previous(), Some(StateKind::Idle));
        assert_eq!(h.machine.transition_count(), 1);
        assert_eq!(h.machine.memory(), &before);
    }

    #[test]
    fn forced_transition_records_previous() {
        let mut h = Harness::new(ProfessionKind::Farmer);
        let t = h.force_named("rest").unwrap();
        assert_eq!(t, Transition { agent: AgentId(0), from: StateKind::Idle, to: StateKind::Rest });
        assert_eq!(h.machine.current_name(), "Rest");
        assert_eq!(h.machine.previous_name(), Some("Idle"));
    }

    #[test]
    fn reentering_current_state_resets_memory() {
        let mut h = Harness::new(ProfessionKind::None);
        h.set_idle(1.5, 4.0);
        h.force(StateKind::Idle);
        assert_eq!(h.machine.read("timer"), Some(Value::Number(0.0)));
        assert_eq!(h.machine.previous(), Some(StateKind::Idle));
    }

    #[test]
    fn blackboard_survives_transitions() {
        let mut h = Harness::new(ProfessionKind::Farmer);
        h.machine.blackboard_mut().set("label", "night watch");
        h.force(StateKind::Rest);
        h.force(StateKind::Idle);
        assert_eq!(h.machine.read("label"), Some(Value::Text("night watch".into())));
    }

    #[test]
    fn memory_keys_do_not_leak_between_states() {
        let mut h = Harness::new(ProfessionKind::Farmer);
        h.force(StateKind::Working);
        assert!(h.machine.read("production_timer").is_some());
        h.force(StateKind::Rest);
        assert!(h.machine.read("production_timer").is_none());
        assert!(h.machine.read("duration").is_none());
    }
}

// ── Idle ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod idle_tests {
    use super::*;

    #[test]
    fn find_work_beats_hunger() {
        let mut h = Harness::new(ProfessionKind::Farmer);
        h.set_idle(3.0, 2.0);
        h.set_need(NeedKind::Hunger, 25.0);
        let t = h.tick(0.0).unwrap();
        assert_eq!(t.to, StateKind::FindWork);
    }

    #[test]
    fn hunger_threshold_is_strict() {
        let mut h = Harness::new(ProfessionKind::None);
        h.set_idle(0.0, 4.0);
        h.set_need(NeedKind::Hunger, 30.0);
        assert!(h.tick(0.0).is_none());

        h.set_need(NeedKind::Hunger, 29.9);
        assert_eq!(h.tick(0.0).map(|t| t.to), Some(StateKind::FindFood));
    }

    #[test]
    fn goes_to_work_during_work_hours() {
        let mut h = Harness::new(ProfessionKind::Farmer);
        h.agent.workplace = Some(BuildingId(1));
        h.env.buildings.push((BuildingId(1), Position::new(5.0, 0.0)));
        h.set_idle(0.0, 4.0);
        assert!(h.tick(0.0).is_none());

        h.work_time = true;
        assert_eq!(h.tick(0.0).map(|t| t.to), Some(StateKind::GoToWork));
    }

    #[test]
    fn tired_settler_goes_home_only_with_a_home() {
        let mut h = Harness::new(ProfessionKind::None);
        h.set_idle(0.0, 4.0);
        h.set_need(NeedKind::Energy, 20.0);
        assert!(h.tick(0.0).is_none());

        h.agent.home = Some(BuildingId(2));
        h.env.buildings.push((BuildingId(2), Position::new(0.0, 3.0)));
        assert_eq!(h.tick(0.0).map(|t| t.to), Some(StateKind::GoHome));
    }

    #[test]
    fn unemployed_settler_wanders_when_bored() {
        let mut h = Harness::new(ProfessionKind::None);
        h.set_idle(0.0, 2.0);
        assert!(h.tick(1.0).is_none());
        assert_eq!(h.tick(1.5).map(|t| t.to), Some(StateKind::Wander));
    }
}

// ── Work ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod work_tests {
    use super::*;

    #[test]
    fn full_commute_and_shift() {
        let mut h = Harness::new(ProfessionKind::Farmer);
        let farm = BuildingId(4);
        h.env.vacancy = Some(farm);
        h.env.buildings.push((farm, Position::new(6.0, 0.0)));

        h.set_idle(3.0, 2.0);
        assert_eq!(h.tick(0.0).map(|t| t.to), Some(StateKind::FindWork));
        assert_eq!(h.agent.workplace, Some(farm));
        assert_eq!(h.tick(0.0).map(|t| t.to), Some(StateKind::GoToWork));

        let arrived = h.run_until_transition(0.1, 1_000).unwrap();
        assert_eq!(arrived.to, StateKind::Working);
        assert!(h.agent.position.distance(Position::new(6.0, 0.0)) < 0.1);

        for _ in 0..5 {
            assert!(h.tick(1.0).is_none());
        }
        assert_eq!(h.agent.experience, 1);
        assert_eq!(h.env.work_done, 1);
        assert!((h.agent.need(NeedKind::Energy) - 90.0).abs() < 1e-4);
        assert!((h.agent.need(NeedKind::Hunger) - 95.0).abs() < 1e-4);
    }

    #[test]
    fn long_tick_produces_every_interval() {
        let mut h = Harness::new(ProfessionKind::Baker);
        h.force(StateKind::Working);
        h.tick(12.0);
        assert_eq!(h.agent.experience, 2);
        assert_eq!(h.machine.read("production_timer"), Some(Value::Number(2.0)));
    }

    #[test]
    fn find_work_times_out_to_idle() {
        let mut h = Harness::new(ProfessionKind::Miner);
        h.force(StateKind::FindWork);
        assert!(h.tick(10.0).is_none());
        assert_eq!(h.tick(0.1).map(|t| t.to), Some(StateKind::Idle));
    }

    #[test]
    fn hunger_checked_before_energy_at_work() {
        let mut h = Harness::new(ProfessionKind::Farmer);
        h.force(StateKind::Working);
        h.set_need(NeedKind::Hunger, 10.0);
        h.set_need(NeedKind::Energy, 10.0);
        assert_eq!(h.tick(0.0).map(|t| t.to), Some(StateKind::FindFood));
    }

    #[test]
    fn shift_ends_after_duration() {
        let mut h = Harness::new(ProfessionKind::Farmer);
        h.force(StateKind::Working);
        if let StateMemory::Working(m) = h.machine.memory_mut() {
            m.duration = 30.0;
        }
        assert!(h.tick(30.0).is_none());
        assert_eq!(h.tick(0.1).map(|t| t.to), Some(StateKind::Idle));
    }

    #[test]
    fn vanished_workplace_falls_back_to_idle() {
        let mut h = Harness::new(ProfessionKind::Farmer);
        h.agent.workplace = Some(BuildingId(9));
        h.force(StateKind::GoToWork);
        assert_eq!(h.agent.workplace, None);
        assert_eq!(h.tick(0.1).map(|t| t.to), Some(StateKind::Idle));
    }
}

// ── Food ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod food_tests {
    use super::*;

    #[test]
    fn destination_is_handed_to_go_to_food() {
        let mut h = Harness::new(ProfessionKind::None);
        h.env.food = Some(Position::new(20.0, 0.0));
        h.force(StateKind::FindFood);
        // The lookup happened on entry; later changes do not matter.
        h.env.food = None;
        assert_eq!(h.tick(0.0).map(|t| t.to), Some(StateKind::GoToFood));
        assert_eq!(h.machine.read("destination"), Some(Value::Point(Position::new(20.0, 0.0))));
    }

    #[test]
    fn find_food_exit_hands_over_only_a_found_source() {
        use crate::memory::FindFoodMemory;

        let mut h = Harness::new(ProfessionKind::None);
        let found = StateMemory::FindFood(FindFoodMemory {
            timer:       1.0,
            destination: Some(Position::new(4.0, -2.0)),
        });
        assert_eq!(crate::states::exit(&found, &mut h.agent), Handoff::to(Position::new(4.0, -2.0)));

        let empty = StateMemory::FindFood(FindFoodMemory { timer: 6.0, destination: None });
        assert_eq!(crate::states::exit(&empty, &mut h.agent), Handoff::NONE);
    }

    #[test]
    fn no_food_times_out_to_idle() {
        let mut h = Harness::new(ProfessionKind::None);
        h.force(StateKind::FindFood);
        assert!(h.tick(5.0).is_none());
        assert_eq!(h.tick(0.1).map(|t| t.to), Some(StateKind::Idle));
    }

    #[test]
    fn forced_go_to_food_without_food_eats_in_place() {
        let mut h = Harness::new(ProfessionKind::None);
        h.agent.position = Position::new(2.0, 2.0);
        h.force(StateKind::GoToFood);
        let t = h.run_until_transition(0.1, 20).unwrap();
        assert_eq!(t.to, StateKind::Eating);
        assert_eq!(h.agent.position, Position::new(2.0, 2.0));
    }

    #[test]
    fn sated_settler_stops_eating_early() {
        let mut h = Harness::new(ProfessionKind::None);
        h.force(StateKind::Eating);
        if let StateMemory::Eating(m) = h.machine.memory_mut() {
            m.timer = 4.9;
        }
        h.set_need(NeedKind::Hunger, 85.0);
        assert_eq!(h.tick(0.0).map(|t| t.to), Some(StateKind::Idle));
    }

    #[test]
    fn eating_raises_hunger_until_timer_runs_out() {
        let mut h = Harness::new(ProfessionKind::None);
        h.force(StateKind::Eating);
        h.set_need(NeedKind::Hunger, 10.0);
        assert!(h.tick(1.0).is_none());
        assert!((h.agent.need(NeedKind::Hunger) - 30.0).abs() < 1e-4);
    }
}

// ── Rest, home, sleep ─────────────────────────────────────────────────────────

#[cfg(test)]
mod rest_tests {
    use super::*;

    #[test]
    fn rest_ends_once_energy_recovers() {
        let mut h = Harness::new(ProfessionKind::None);
        h.force(StateKind::Rest);
        h.set_need(NeedKind::Energy, 75.0);
        assert_eq!(h.tick(1.0).map(|t| t.to), Some(StateKind::Idle));
        assert!((h.agent.need(NeedKind::Energy) - 85.0).abs() < 1e-4);
    }

    #[test]
    fn walks_home_then_sleeps_hidden() {
        let mut h = Harness::new(ProfessionKind::None);
        let house = BuildingId(1);
        h.agent.home = Some(house);
        h.env.buildings.push((house, Position::new(0.0, 4.0)));
        h.set_need(NeedKind::Energy, 20.0);

        h.force(StateKind::GoHome);
        let t = h.run_until_transition(0.1, 1_000).unwrap();
        assert_eq!(t.to, StateKind::Sleeping);
        assert!(h.agent.hidden);

        let t = h.run_until_transition(1.0, 30).unwrap();
        assert_eq!(t.to, StateKind::Idle);
        assert!(!h.agent.hidden);
    }

    #[test]
    fn sleeping_restores_energy_and_happiness_capped() {
        let mut h = Harness::new(ProfessionKind::None);
        h.set_need(NeedKind::Energy, 50.0);
        h.set_need(NeedKind::Happiness, 98.0);
        h.force(StateKind::Sleeping);
        assert!(h.tick(1.0).is_none());
        assert!((h.agent.need(NeedKind::Energy) - 65.0).abs() < 1e-4);
        assert_eq!(h.agent.need(NeedKind::Happiness), 100.0);
    }

    #[test]
    fn vanished_home_sleeps_in_place() {
        let mut h = Harness::new(ProfessionKind::None);
        h.agent.home = Some(BuildingId(5));
        h.agent.position = Position::new(-3.0, 1.0);
        h.force(StateKind::GoHome);
        assert_eq!(h.agent.home, None);
        let t = h.run_until_transition(0.1, 20).unwrap();
        assert_eq!(t.to, StateKind::Sleeping);
        assert_eq!(h.agent.position, Position::new(-3.0, 1.0));
    }
}

// ── Wander ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wander_tests {
    use super::*;

    #[test]
    fn wander_target_within_range() {
        let mut h = Harness::new(ProfessionKind::None);
        h.force(StateKind::Wander);
        let Some(Value::Point(dest)) = h.machine.read("destination") else {
            panic!("wander has no destination");
        };
        let d = dest.distance(Position::ORIGIN);
        assert!((4.99..=15.01).contains(&d), "distance {d}");
        assert_eq!(h.machine.read("path_len"), Some(Value::Number(11.0)));
    }

    #[test]
    fn wander_moves_at_half_speed() {
        let mut h = Harness::new(ProfessionKind::None);
        h.force(StateKind::Wander);
        // First waypoint is the start point.
        h.tick(0.1);
        h.tick(0.1);
        let moved = h.agent.position.distance(Position::ORIGIN);
        assert!((moved - 0.15).abs() < 1e-4, "moved {moved}");
    }

    #[test]
    fn wander_times_out() {
        let mut h = Harness::new(ProfessionKind::None);
        h.force(StateKind::Wander);
        assert_eq!(h.tick(10.5).map(|t| t.to), Some(StateKind::Idle));
    }
}
