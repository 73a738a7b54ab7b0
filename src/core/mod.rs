//! Core domain types for the game
//!
//! Tiles, players and the bag. Nothing here knows about turns or the board;
//! the session module coordinates them.

mod bag;
mod language;
mod player;
mod tile;

pub use bag::{InvalidDrawCount, TileBag};
pub use language::{FrequencyEntry, InvalidLanguage, Language};
pub use player::{Player, RACK_CAPACITY, RackError};
pub use tile::{Placement, Position, Tile};
