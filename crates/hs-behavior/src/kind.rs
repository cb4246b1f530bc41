//! The closed set of behavior states.

use std::str::FromStr;

use crate::BehaviorError;

/// Every state a settler can be in.  Exhaustive matches over this enum do the
/// enter/update/exit/guard dispatch.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateKind {
    #[default]
    Idle,
    FindWork,
    GoToWork,
    Working,
    FindFood,
    GoToFood,
    Eating,
    Rest,
    Wander,
    GoHome,
    Sleeping,
}

impl StateKind {
    pub const ALL: [StateKind; 11] = [
        StateKind::Idle,
        StateKind::FindWork,
        StateKind::GoToWork,
        StateKind::Working,
        StateKind::FindFood,
        StateKind::GoToFood,
        StateKind::Eating,
        StateKind::Rest,
        StateKind::Wander,
        StateKind::GoHome,
        StateKind::Sleeping,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StateKind::Idle     => "Idle",
            StateKind::FindWork => "FindWork",
            StateKind::GoToWork => "GoToWork",
            StateKind::Working  => "Working",
            StateKind::FindFood => "FindFood",
            StateKind::GoToFood => "GoToFood",
            StateKind::Eating   => "Eating",
            StateKind::Rest     => "Rest",
            StateKind::Wander   => "Wander",
            StateKind::GoHome   => "GoHome",
            StateKind::Sleeping => "Sleeping",
        }
    }

    /// `true` for the states that walk a waypoint path.
    #[inline]
    pub fn is_travel(self) -> bool {
        matches!(
            self,
            StateKind::GoToWork | StateKind::GoToFood | StateKind::GoHome | StateKind::Wander
        )
    }
}

impl std::fmt::Display for StateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; `"gotowork"` and `"GoToWork"` both parse.
impl FromStr for StateKind {
    type Err = BehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StateKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| BehaviorError::UnknownState(s.to_owned()))
    }
}
