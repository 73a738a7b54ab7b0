//! Results of committing a turn

use serde::Serialize;

/// How a commit attempt ended
///
/// Every variant except `Success` leaves the turn with the same player and all
/// their tiles back on the rack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// Nothing was staged on the board
    NoTilesPlaced,
    /// The staged tiles do not form a legal shape
    IllegalPlacement,
    /// At least one formed word is not in the dictionary
    IllegalWord {
        words: Vec<String>,
        rejected: Vec<String>,
    },
    /// Tiles committed, points scored, turn passed on
    Success { words: Vec<String>, score: u32 },
}

impl TurnOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// One row of the scoreboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreLine {
    pub name: String,
    pub points: u32,
    /// Set for the current leader once they have scored
    pub is_leading: bool,
}

/// Everything the front end needs after a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    pub scoreboard: Vec<ScoreLine>,
    /// Only ever set after a successful commit
    pub game_over: bool,
}
