//! Error type shared by the simulation core
//!
//! The core is total over well-formed input: degenerate math is clamped and
//! lookups return `Option`. Errors are only raised when a caller builds
//! something structurally invalid.

use crate::body::{PrimaryId, SatelliteId};
use glam::DVec3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid direction {0:?}: must be finite and non-zero")]
    InvalidDirection(DVec3),

    #[error("transition '{id}' needs non-zero phase durations")]
    InvalidDuration { id: String },

    #[error("duplicate body id '{0}'")]
    DuplicateBody(String),

    #[error("unknown primary body {0:?}")]
    UnknownPrimary(PrimaryId),

    #[error("unknown satellite body {0:?}")]
    UnknownSatellite(SatelliteId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid scenario: {0}")]
    Scenario(#[from] serde_json::Error),
}

impl SimError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
