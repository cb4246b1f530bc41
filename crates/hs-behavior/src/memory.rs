//! Transition-scoped working memory, one record type per state.
//!
//! A record is built by the state's `enter` and dropped by its `exit`.  No
//! state can observe another state's leftovers; the only data that crosses a
//! transition is the explicit [`Handoff`][crate::Handoff].

use hs_core::Position;
use hs_spatial::WaypointPath;

use crate::{StateKind, Value};

#[derive(Clone, Debug, PartialEq)]
pub struct IdleMemory {
    pub timer:         f32,
    /// Seconds of idling before the settler looks for work or wanders.
    pub next_decision: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FindWorkMemory {
    pub timer:   f32,
    pub timeout: f32,
    pub failed:  bool,
}

/// Shared by GoToWork, GoToFood, and GoHome.
///
/// `path` is `None` only when GoToWork has no resolvable workplace; that
/// state then leaves through its Idle guard.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TravelMemory {
    pub path: Option<WaypointPath>,
}

impl TravelMemory {
    #[inline]
    pub fn arrived(&self) -> bool {
        self.path.as_ref().is_some_and(WaypointPath::is_complete)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkingMemory {
    pub work_timer:       f32,
    pub production_timer: f32,
    /// Length of this shift, drawn on entry.
    pub duration:         f32,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct FindFoodMemory {
    pub timer:       f32,
    pub destination: Option<Position>,
}

/// Eating, Rest, and Sleeping only track time in state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TimerMemory {
    pub timer: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WanderMemory {
    pub timer: f32,
    pub path:  WaypointPath,
}

/// The current state together with its memory.
#[derive(Clone, Debug, PartialEq)]
pub enum StateMemory {
    Idle(IdleMemory),
    FindWork(FindWorkMemory),
    GoToWork(TravelMemory),
    Working(WorkingMemory),
    FindFood(FindFoodMemory),
    GoToFood(TravelMemory),
    Eating(TimerMemory),
    Rest(TimerMemory),
    Wander(WanderMemory),
    GoHome(TravelMemory),
    Sleeping(TimerMemory),
}

impl StateMemory {
    pub fn kind(&self) -> StateKind {
        match self {
            StateMemory::Idle(_)     => StateKind::Idle,
            StateMemory::FindWork(_) => StateKind::FindWork,
            StateMemory::GoToWork(_) => StateKind::GoToWork,
            StateMemory::Working(_)  => StateKind::Working,
            StateMemory::FindFood(_) => StateKind::FindFood,
            StateMemory::GoToFood(_) => StateKind::GoToFood,
            StateMemory::Eating(_)   => StateKind::Eating,
            StateMemory::Rest(_)     => StateKind::Rest,
            StateMemory::Wander(_)   => StateKind::Wander,
            StateMemory::GoHome(_)   => StateKind::GoHome,
            StateMemory::Sleeping(_) => StateKind::Sleeping,
        }
    }

    /// The path being walked, for travel states that have one.
    pub fn path(&self) -> Option<&WaypointPath> {
        match self {
            StateMemory::GoToWork(m) | StateMemory::GoToFood(m) | StateMemory::GoHome(m) => {
                m.path.as_ref()
            }
            StateMemory::Wander(m) => Some(&m.path),
            _ => None,
        }
    }

    /// Read one memory field by name for inspection tools.
    ///
    /// Keys are the snake-case field names (`"timer"`, `"next_decision"`,
    /// `"failed"`, `"duration"`, `"production_timer"`, `"destination"`) plus
    /// `"path_index"` and `"path_len"` for travel states.  Unknown keys and
    /// keys belonging to another state read as `None`.
    pub fn get(&self, key: &str) -> Option<Value> {
        match (self, key) {
            (StateMemory::Idle(m), "timer")         => Some(m.timer.into()),
            (StateMemory::Idle(m), "next_decision") => Some(m.next_decision.into()),

            (StateMemory::FindWork(m), "timer")   => Some(m.timer.into()),
            (StateMemory::FindWork(m), "timeout") => Some(m.timeout.into()),
            (StateMemory::FindWork(m), "failed")  => Some(m.failed.into()),

            (StateMemory::Working(m), "timer" | "work_timer") => Some(m.work_timer.into()),
            (StateMemory::Working(m), "production_timer")     => Some(m.production_timer.into()),
            (StateMemory::Working(m), "duration")             => Some(m.duration.into()),

            (StateMemory::FindFood(m), "timer")       => Some(m.timer.into()),
            (StateMemory::FindFood(m), "destination") => m.destination.map(Value::from),

            (StateMemory::Eating(m) | StateMemory::Rest(m) | StateMemory::Sleeping(m), "timer") => {
                Some(m.timer.into())
            }

            (StateMemory::Wander(m), "timer") => Some(m.timer.into()),

            (_, "path_index")  => self.path().map(|p| p.index().into()),
            (_, "path_len")    => self.path().map(|p| p.len().into()),
            (_, "destination") => self.path().and_then(WaypointPath::destination).map(Value::from),

            _ => None,
        }
    }
}
