//! Path-planning trait and the default straight-line planner.
//!
//! # Pluggability
//!
//! Travel states request paths through the [`Planner`] trait, so a real
//! navigation system (grid A*, navmesh) can replace [`LinearPlanner`]
//! without touching the behavior code.  The linear planner is a known
//! simplification: it walks through buildings, water, and other settlers.

use hs_core::Position;

use crate::path::{WaypointPath, build_path};

/// Pluggable path planner.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one planner can be shared by the
/// whole colony.
pub trait Planner: Send + Sync {
    /// Plan a path from `from` to `to`.  Must always return a usable path;
    /// an unreachable target should degrade to the best available
    /// approximation rather than fail.
    fn plan(&self, from: Position, to: Position) -> WaypointPath;
}

/// Straight-line interpolation into a fixed number of waypoints.
///
/// See [`build_path`] for the exact contract.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinearPlanner;

impl Planner for LinearPlanner {
    #[inline]
    fn plan(&self, from: Position, to: Position) -> WaypointPath {
        build_path(from, to)
    }
}
