//! `hs-spatial`: waypoint paths, path planning, and spatial indexing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`path`]    | `WaypointPath`, `build_path`, `WAYPOINT_COUNT`, `ARRIVAL_RADIUS` |
//! | [`planner`] | `Planner` trait, `LinearPlanner`                            |
//! | [`index`]   | `PointIndex<T>` (R-tree nearest-point lookup)               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `WaypointPath`.         |

pub mod index;
pub mod path;
pub mod planner;


pub use index::PointIndex;
pub use path::{ARRIVAL_RADIUS, WAYPOINT_COUNT, WaypointPath, build_path};
pub use planner::{LinearPlanner, Planner};
