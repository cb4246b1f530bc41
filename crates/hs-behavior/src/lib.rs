//! `hs-behavior`: the settler state machine and its eleven states.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`kind`]       | `StateKind` (closed enum of states)                            |
//! | [`machine`]    | `StateMachine`, `Transition`                                   |
//! | [`memory`]     | `StateMemory` and the per-state memory records                 |
//! | `states`       | enter/update/exit hooks and ordered guard tables               |
//! | [`handoff`]    | `Handoff` - data passed across one transition                  |
//! | [`env`]        | `Environment` trait (world callbacks), `NullEnvironment`       |
//! | [`context`]    | `TickContext<'a>` - per-tick inputs shared by all settlers     |
//! | [`blackboard`] | `Blackboard`, `Value` - external annotations                   |
//! | [`tuning`]     | `BehaviorTuning` - every numeric constant                      |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Design notes
//!
//! Each tick the scheduler calls [`StateMachine::update`] once per settler,
//! after that settler's needs have decayed:
//!
//! 1. The current state's update hook runs (timers, need changes, walking).
//! 2. Its guards are checked in declared order; the first that holds wins.
//! 3. A winning guard exits the old state, then enters the new one.
//!
//! States never share memory.  Each has a typed record created on entry and
//! dropped on exit, and the only data crossing a transition is a
//! [`Handoff`].  The set of states is a closed enum, so dispatch is an
//! exhaustive `match`; the only runtime "unknown state" is a name passed to
//! [`StateMachine::transition_to_named`].

pub mod blackboard;
pub mod context;
pub mod env;
pub mod error;
pub mod handoff;
pub mod kind;
pub mod machine;
pub mod memory;
mod states;
pub mod tuning;

#[cfg(test)]
mod tests;

pub use blackboard::{Blackboard, Value};
pub use context::TickContext;
pub use env::{Environment, NullEnvironment};
pub use error::{BehaviorError, BehaviorResult};
pub use handoff::Handoff;
pub use kind::StateKind;
pub use machine::{StateMachine, Transition};
pub use memory::StateMemory;
pub use states::guard_targets;
pub use tuning::BehaviorTuning;
