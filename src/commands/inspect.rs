//! Save file inspection

use crate::board::Board;
use crate::core::Language;
use crate::session::{GameSession, PersistenceError, ScoreLine};
use std::path::Path;

/// What a save file holds, without resuming it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    pub language: Language,
    pub active: Option<String>,
    pub scoreboard: Vec<ScoreLine>,
    pub bag_remaining: usize,
    pub board_tiles: usize,
    pub game_over: bool,
}

/// Load and summarize a save file
///
/// # Errors
/// Everything [`GameSession::load`] can report.
pub fn inspect_save<P: AsRef<Path>>(path: P) -> Result<SaveSummary, PersistenceError> {
    let session: GameSession = GameSession::load(path, None)?;

    Ok(SaveSummary {
        language: session.language(),
        active: session.active_player().map(|p| p.name().to_string()),
        scoreboard: session.scoreboard(),
        bag_remaining: session.bag().remaining_count(),
        board_tiles: session.board().tile_count(),
        game_over: session.is_game_over(),
    })
}
