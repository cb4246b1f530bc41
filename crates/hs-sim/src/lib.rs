//! `hs-sim`: the colony scheduler.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Decay    : every settler's needs drop by rate × dt
//!                 (parallel with the `parallel` feature).
//!   ② Behavior : in creation order, each settler's StateMachine runs its
//!                 update hook, then its guards; a firing guard exits the
//!                 old state and enters the new one.
//!   ③ Report   : observer hooks: transitions, tick end, snapshots.
//!   ④ Clock    : advance by tick_secs × game_speed.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`sim`]      | `Sim<W, P>` - state and tick loop                          |
//! | [`builder`]  | `SimBuilder` - validated construction                      |
//! | [`settings`] | `Settings` - TOML configuration                            |
//! | [`env`]      | `ColonyEnv` - registry + work handler as an `Environment`  |
//! | [`work`]     | `WorkHandler`, `NoopWork`, `ProductionTally`               |
//! | [`observer`] | `SimObserver`, `NoopObserver`                              |
//! | [`error`]    | `SimError`, `SimResult<T>`                                 |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the decay phase on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hs_core::{Position, SimConfig};
//! use hs_agent::ProfessionKind;
//! use hs_sim::{NoopObserver, NoopWork, SimBuilder};
//! use hs_spatial::LinearPlanner;
//! use hs_world::BuildingKind;
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), NoopWork, LinearPlanner).build()?;
//! sim.add_building(BuildingKind::House, Position::new(0.0, 5.0));
//! sim.add_building(BuildingKind::Farm, Position::new(12.0, 0.0));
//! sim.spawn_agent("Ada", ProfessionKind::Farmer, Position::ORIGIN);
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod env;
pub mod error;
pub mod observer;
pub mod settings;
pub mod sim;
pub mod work;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use env::ColonyEnv;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use settings::Settings;
pub use sim::Sim;
pub use work::{NoopWork, ProductionTally, WorkHandler};
