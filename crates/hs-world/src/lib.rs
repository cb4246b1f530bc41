//! `hs-world`: buildings and the assignment policy that binds settlers to
//! them.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`building`] | `BuildingKind`, `Building`                                    |
//! | [`registry`] | `BuildingRegistry` - creation-ordered store + kind/food indexes |
//! | [`assign`]   | `assign_home`, `find_work`, `release_workplace`, `workplace_kind` |
//! | [`error`]    | `AssignError`, `AssignResult<T>`                              |
//!
//! # Ownership
//!
//! The registry owns every building.  Settlers hold plain `BuildingId`
//! handles; a removed building leaves those handles dangling and lookups
//! through them return `None`.
//!
//! # Assignment is first-fit and sequential
//!
//! Both policies scan candidates in creation order and bind the first with
//! room, mutating the building immediately.  The next settler to scan sees
//! the updated count, which is only sound because the scheduler assigns one
//! settler at a time.  Running assignment concurrently would need an atomic
//! reservation on each building instead.

pub mod assign;
pub mod building;
pub mod error;
pub mod registry;


pub use assign::{assign_home, find_work, release_workplace, workplace_kind};
pub use building::{Building, BuildingKind};
pub use error::{AssignError, AssignResult};
pub use registry::BuildingRegistry;
