//! `hs-core`: foundational types for the `homestead` colony simulation.
//!
//! This crate is a dependency of every other `hs-*` crate.  It intentionally
//! has no `hs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `BuildingId`                               |
//! | [`geo`]         | `Position` (x, z ground plane), distance, lerp        |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`, `WorkHours`          |
//! | [`rng`]         | `AgentRng` (per-agent, seed-mixed)                    |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (settings)   |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Position;
pub use ids::{AgentId, BuildingId};
pub use rng::AgentRng;
pub use time::{SimClock, SimConfig, Tick, WorkHours};
