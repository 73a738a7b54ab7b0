//! Game sessions
//!
//! Setup, the turn state machine and persistence of a whole game.

mod config;
mod engine;
mod error;
mod outcome;
pub mod persistence;

pub use config::{MAX_PLAYERS, MIN_PLAYERS, SessionConfig, SetupError};
pub use engine::{GameSession, StagedSlot};
pub use error::SessionError;
pub use outcome::{ScoreLine, TurnOutcome, TurnReport};
pub use persistence::{PersistenceError, SNAPSHOT_VERSION, SessionSnapshot};
