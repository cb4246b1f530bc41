//! Unit tests for hs-mobility.

use std::sync::Arc;

use hs_agent::{Agent, NeedsConfig, Profession, ProfessionKind};
use hs_core::{AgentId, Position};
use hs_spatial::{WAYPOINT_COUNT, WaypointPath, build_path};

use crate::{DEFAULT_MOVE_SPEED, Step, advance, move_speed};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn settler_at(position: Position) -> Agent {
    Agent::new(
        AgentId(0),
        "Ada",
        Arc::new(Profession::builtin(ProfessionKind::Farmer)),
        position,
        &NeedsConfig::default(),
    )
}

// ── advance ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod advance_tests {
    use super::*;

    #[test]
    fn first_waypoint_under_feet_is_reached_without_moving() {
        let mut agent = settler_at(Position::ORIGIN);
        let mut path = build_path(Position::ORIGIN, Position::new(10.0, 0.0));
        assert_eq!(advance(&mut agent, &mut path, 2.0, 0.25), Step::WaypointReached);
        assert_eq!(agent.position, Position::ORIGIN);
        assert_eq!(path.index(), 1);
    }

    #[test]
    fn moves_speed_times_dt_toward_waypoint() {
        let mut agent = settler_at(Position::ORIGIN);
        let mut path = build_path(Position::ORIGIN, Position::new(10.0, 0.0));
        advance(&mut agent, &mut path, 2.0, 0.25);
        assert_eq!(advance(&mut agent, &mut path, 2.0, 0.25), Step::InTransit);
        assert!((agent.position.x - 0.5).abs() < 1e-6);
        assert_eq!(agent.position.z, 0.0);
        // Facing +x.
        assert!((agent.heading - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn large_step_stops_on_the_waypoint() {
        let mut agent = settler_at(Position::ORIGIN);
        let mut path = build_path(Position::ORIGIN, Position::new(10.0, 0.0));
        advance(&mut agent, &mut path, 100.0, 1.0);
        assert_eq!(advance(&mut agent, &mut path, 100.0, 1.0), Step::InTransit);
        assert!((agent.position.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn walks_whole_path_to_completion() {
        let end = Position::new(6.0, -8.0);
        let mut agent = settler_at(Position::ORIGIN);
        let mut path = build_path(Position::ORIGIN, end);
        let mut ticks = 0;
        while advance(&mut agent, &mut path, 3.0, 0.1) != Step::Complete {
            ticks += 1;
            assert!(ticks < 10_000, "never arrived");
        }
        assert!(path.is_complete());
        assert!(agent.position.distance(end) < 0.1);
    }

    #[test]
    fn coincident_path_completes_in_place() {
        let here = Position::new(3.0, 3.0);
        let mut agent = settler_at(here);
        let mut path = build_path(here, here);
        let mut steps = Vec::new();
        for _ in 0..WAYPOINT_COUNT {
            steps.push(advance(&mut agent, &mut path, 3.0, 0.1));
        }
        assert_eq!(steps.last(), Some(&Step::Complete));
        assert!(steps[..WAYPOINT_COUNT - 1].iter().all(|s| *s == Step::WaypointReached));
        assert_eq!(agent.position, here);
    }

    #[test]
    fn empty_path_is_noop() {
        let here = Position::new(1.0, 2.0);
        let mut agent = settler_at(here);
        let mut path = WaypointPath::default();
        assert!(advance(&mut agent, &mut path, 3.0, 0.1).is_complete());
        assert_eq!(agent.position, here);
        assert_eq!(agent.heading, 0.0);
    }

    #[test]
    fn zero_dt_does_not_move() {
        let mut agent = settler_at(Position::new(5.0, 5.0));
        let mut path = build_path(Position::ORIGIN, Position::new(1.0, 0.0));
        assert_eq!(advance(&mut agent, &mut path, 3.0, 0.0), Step::InTransit);
        assert_eq!(agent.position, Position::new(5.0, 5.0));
    }
}

// ── move_speed ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod speed_tests {
    use super::*;

    #[test]
    fn unset_speed_uses_default() {
        let p = Profession::builtin(ProfessionKind::None);
        assert!(p.move_speed.is_none());
        assert_eq!(move_speed(&p, 1.0), DEFAULT_MOVE_SPEED);
    }

    #[test]
    fn multiplier_scales_configured_speed() {
        let mut p = Profession::builtin(ProfessionKind::Farmer);
        p.move_speed = Some(4.0);
        assert_eq!(move_speed(&p, 0.5), 2.0);
    }

    #[test]
    fn invalid_speed_falls_back() {
        let mut p = Profession::builtin(ProfessionKind::Miner);
        p.move_speed = Some(f32::NAN);
        assert_eq!(move_speed(&p, 1.0), DEFAULT_MOVE_SPEED);
        p.move_speed = Some(-1.0);
        assert_eq!(move_speed(&p, 1.0), DEFAULT_MOVE_SPEED);
        assert_eq!(move_speed(&p, -2.0), 0.0);
    }
}
