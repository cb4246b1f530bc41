//! Data carried from one state to the next across a transition.

use hs_core::Position;

/// Returned by the old state's `exit` and passed to the new state's `enter`.
///
/// State memory is dropped on exit, so anything a successor needs has to
/// travel here.  Today that is only FindFood's discovered food source,
/// consumed by GoToFood.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Handoff {
    pub destination: Option<Position>,
}

impl Handoff {
    pub const NONE: Handoff = Handoff { destination: None };

    #[inline]
    pub fn to(destination: Position) -> Self {
        Self { destination: Some(destination) }
    }
}
