//! Error types for content loading and player rules.

use thiserror::Error;

use crate::world_state::LocationId;

/// Errors raised by the rules crate.
///
/// Everything except [`RulesError::UnknownSkill`] indicates a defect in the
/// static content and is meant to stop the game at startup.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("location '{0}' not found")]
    LocationNotFound(LocationId),

    #[error("invalid skill: {0}")]
    UnknownSkill(String),

    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("location '{location}' option {option} leads to missing location '{target}'")]
    DanglingDestination {
        location: LocationId,
        option: usize,
        target: LocationId,
    },

    #[error("location '{location}' option {option} has both a destination and an action")]
    AmbiguousOption { location: LocationId, option: usize },

    #[error("location '{location}' option {option} has neither a destination nor an action")]
    EmptyOption { location: LocationId, option: usize },

    #[error("location '{0}' has no options")]
    NoOptions(LocationId),

    #[error("exam has no questions")]
    EmptyExam,

    #[error("exam question {index} is malformed: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}
