//! # Academy Rules
//!
//! The static side of the AWS Adventure game: the content graph of locations
//! and options, the exam question set, the player model and the closed sets of
//! skills and actions. This crate performs no I/O and holds no randomness; the
//! engine crate drives it.

pub mod entities;
pub mod error;
pub mod mechanics;
pub mod world_state;

pub use entities::*;
pub use error::*;
pub use mechanics::*;
pub use world_state::*;
