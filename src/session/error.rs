//! Errors raised by session operations
//!
//! Only contract violations end up here. Rejected moves are reported through
//! [`TurnOutcome`](super::TurnOutcome) instead.

use crate::core::{InvalidDrawCount, RackError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Rack(#[from] RackError),
    #[error(transparent)]
    Draw(#[from] InvalidDrawCount),
    #[error("no rack tile is selected")]
    NoSelection,
    #[error("no player is active")]
    NoActivePlayer,
}
