use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BehaviorError {
    /// A transition was requested by name and the name is not a state.
    #[error("unknown behavior state `{0}`")]
    UnknownState(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
