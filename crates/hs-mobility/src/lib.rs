//! `hs-mobility`: moving settlers along waypoint paths.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`step`]  | `Step` outcome, `advance` (one tick of path following)     |
//! | [`speed`] | `move_speed`, `DEFAULT_MOVE_SPEED`                         |
//!
//! # Movement model (continuous, per tick)
//!
//! 1. A travel state builds a [`WaypointPath`][hs_spatial::WaypointPath] once
//!    on entry.
//! 2. Every tick it calls [`advance`] with the settler's resolved speed.
//! 3. A tick in which the settler is already within
//!    [`ARRIVAL_RADIUS`][hs_spatial::ARRIVAL_RADIUS] of the current waypoint
//!    only bumps the path index; the settler does not move that tick.
//! 4. Otherwise the settler walks toward the waypoint.  A large `dt` never
//!    carries it past the waypoint, so fast game speeds cannot make it
//!    oscillate around a target.
//!
//! There is no collision and no obstacle avoidance.

pub mod speed;
pub mod step;

#[cfg(test)]
mod tests;

pub use speed::{DEFAULT_MOVE_SPEED, move_speed};
pub use step::{Step, advance};
