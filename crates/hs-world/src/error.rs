use hs_agent::ProfessionKind;
use thiserror::Error;

use crate::BuildingKind;

/// Why a settler could not be housed or employed.  Never fatal: the settler
/// keeps its current state and may try again later.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AssignError {
    #[error("no {0} has room")]
    NoVacancy(BuildingKind),

    #[error("profession `{0}` has no workplace")]
    NoWorkplaceKind(ProfessionKind),
}

pub type AssignResult<T> = Result<T, AssignError>;
