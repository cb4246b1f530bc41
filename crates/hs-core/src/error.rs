//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need to surface it.

use thiserror::Error;

use crate::{AgentId, BuildingId};

/// The base error type for `hs-core` and a common building block for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("building {0} not found")]
    BuildingNotFound(BuildingId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `hs-core`.
pub type CoreResult<T> = Result<T, CoreError>;
