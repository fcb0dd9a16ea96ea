//! # Academy Engine
//!
//! Drives a session of the AWS Adventure game over the static content in
//! `academy_rules`: it owns the player, walks the location graph through a
//! prompt/read/branch loop, gates options on skill checks, dispatches named
//! actions and runs the certification exam.
//!
//! ## Components
//!
//! - **engine**: navigation, option processing, action table, exam sequence
//! - **console**: the only I/O seam (terminal in production, scripted in tests)
//! - **random**: the source of the random-event draw
//! - **render**: player-facing text
//! - **config**: environment-driven settings
//!
//! The engine never exits the process. Game over and certification come back
//! from [`GameEngine::run`] as an [`Outcome`].

pub mod config;
pub mod console;
pub mod engine;
pub mod random;
pub mod render;

pub use config::*;
pub use console::*;
pub use engine::*;
pub use random::*;

use academy_rules::{LocationId, RulesError};
use thiserror::Error;

/// Errors that stop a session.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Content(#[from] RulesError),

    #[error("option '{text}' at '{location}' has neither a destination nor an action")]
    InvalidOption { location: LocationId, text: String },

    #[error("input stream closed")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid value {value:?} for {key}: {reason}")]
    Config {
        key: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
