//! The game session: turn order and the placement/commit state machine
//!
//! A turn moves through these states:
//!
//! ```text
//! Idle(player) -> TileSelected(player, slot) -> tiles staged on the board
//!     -> commit -> Idle(next player)             on success
//!               -> Idle(same player)             on any rejection
//! ```
//!
//! Every rejection path puts the staged tiles back into the rack slots they came
//! from, so the bag, the racks and the board always account for every tile.

use super::config::{SessionConfig, SetupError};
use super::error::SessionError;
use super::outcome::{ScoreLine, TurnOutcome, TurnReport};
use crate::board::{Board, Grid};
use crate::core::{Language, Placement, Player, Position, RACK_CAPACITY, TileBag};
#[cfg(test)]
use crate::core::Tile;
use crate::wordlists::{Dictionary, DictionarySource};
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Remembers which rack slot a staged tile was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedSlot {
    pub position: Position,
    pub slot: usize,
}

/// Authoritative state of one game
pub struct GameSession<B: Board = Grid> {
    pub(crate) language: Language,
    pub(crate) players: Vec<Player>,
    pub(crate) active: Option<usize>,
    pub(crate) bag: TileBag,
    pub(crate) dictionary: Dictionary,
    pub(crate) selection: Option<usize>,
    pub(crate) staged: Vec<StagedSlot>,
    pub(crate) board: B,
    pub(crate) rng: StdRng,
}

impl GameSession<Grid> {
    /// Start a game on a fresh standard grid with the embedded dictionary
    ///
    /// # Errors
    /// `SetupError::InvalidLanguage` or `SetupError::InvalidPlayerCount` for bad input.
    ///
    /// # Examples
    /// ```
    /// use scrabble_session::session::GameSession;
    ///
    /// let session = GameSession::initialize(2, "EN").unwrap();
    /// assert_eq!(session.players().len(), 2);
    /// assert!(session.active_player().is_some());
    /// ```
    pub fn initialize(player_count: usize, language: &str) -> Result<Self, SetupError> {
        let config = SessionConfig::new(player_count, language)?;
        Self::start(&config, Grid::new())
    }
}

impl<B: Board> GameSession<B> {
    /// Start a game described by `config` on `board`
    ///
    /// # Errors
    /// `SetupError::Dictionary` if a dictionary file cannot be read.
    pub fn start(config: &SessionConfig, board: B) -> Result<Self, SetupError> {
        let source = config.dictionary_source();
        let dictionary = Dictionary::load(&source).map_err(|source_err| SetupError::Dictionary {
            path: match &source {
                DictionarySource::File(path) => path.clone(),
                DictionarySource::Embedded(language) => language.code().into(),
            },
            source: source_err,
        })?;
        Self::with_dictionary(config, board, dictionary)
    }

    /// Start a game with an already loaded dictionary
    ///
    /// Players are named "Player 1" to "Player N". The first player is picked at
    /// random and draws a full rack before this returns.
    ///
    /// # Errors
    /// `SetupError::Deal` if the opening draw fails.
    pub fn with_dictionary(
        config: &SessionConfig,
        board: B,
        dictionary: Dictionary,
    ) -> Result<Self, SetupError> {
        let players = (1..=config.players())
            .map(|i| Player::new(format!("Player {i}")))
            .collect();

        let mut session = Self {
            language: config.language(),
            players,
            active: None,
            bag: TileBag::from_table(config.language().frequency_table()),
            dictionary,
            selection: None,
            staged: Vec::new(),
            board,
            rng: config.rng(),
        };
        session.advance_turn()?;

        info!(
            players = config.players(),
            language = %config.language(),
            tiles = session.bag.total(),
            words = session.dictionary.len(),
            "session initialized"
        );
        Ok(session)
    }

    /// Hand the turn to the next player and refill their rack
    ///
    /// The first call picks a player at random; later calls rotate in seat
    /// order. Staged tiles go back to the outgoing player first. The draw is
    /// capped to what the bag still holds.
    ///
    /// # Errors
    /// Only on broken internal invariants (a draw or rack insert that cannot happen).
    pub fn advance_turn(&mut self) -> Result<(), SessionError> {
        self.abandon_turn()?;

        let next = match self.active {
            None => self.rng.random_range(0..self.players.len()),
            Some(current) => (current + 1) % self.players.len(),
        };
        self.active = Some(next);

        let player = &mut self.players[next];
        let wanted = player.missing_count().min(self.bag.remaining_count());
        let drawn = self.bag.draw(wanted as isize, &mut self.rng)?;
        for tile in drawn {
            player.add_tile(tile)?;
        }
        self.selection = None;

        info!(
            player = %self.players[next].name(),
            drew = wanted,
            bag = self.bag.remaining_count(),
            "turn started"
        );
        Ok(())
    }

    /// Give up the current turn: staged tiles return, the next player starts
    ///
    /// # Errors
    /// Same as [`GameSession::advance_turn`].
    pub fn pass_turn(&mut self) -> Result<(), SessionError> {
        if let Some(player) = self.active_player() {
            info!(player = %player.name(), "turn passed");
        }
        self.advance_turn()
    }

    /// Remember which rack slot the next placement takes its tile from
    ///
    /// # Errors
    /// `SessionError::Rack` if the slot is out of range or empty.
    pub fn select_rack_tile(&mut self, slot: usize) -> Result<(), SessionError> {
        let index = self.require_active()?;
        self.players[index].check_slot(slot)?;
        self.selection = Some(slot);
        debug!(slot, "rack tile selected");
        Ok(())
    }

    /// Move the selected tile onto the board at `position`
    ///
    /// Returns whether the board accepted it. On rejection the tile goes back
    /// to its slot and stays selected so the caller can try another square.
    ///
    /// # Errors
    /// - `SessionError::NoSelection` if no tile is selected
    /// - `SessionError::Rack` if the selected slot has been emptied meanwhile
    pub fn propose_placement(&mut self, position: Position) -> Result<bool, SessionError> {
        let slot = self.selection.ok_or(SessionError::NoSelection)?;
        let index = self.require_active()?;
        let tile = self.players[index].remove_tile(slot)?;
        let letter = tile.letter();

        match self.board.attempt_place(tile, position) {
            Ok(()) => {
                self.staged.push(StagedSlot { position, slot });
                self.selection = None;
                debug!(%letter, %position, slot, "tile staged");
                Ok(true)
            }
            Err(tile) => {
                self.players[index].restore_tile(slot, tile)?;
                warn!(%letter, %position, "placement rejected by board");
                Ok(false)
            }
        }
    }

    /// Return every staged tile to the active player's rack
    ///
    /// Safe to call at any time before a commit; with nothing staged it only
    /// clears the selection.
    ///
    /// # Errors
    /// `SessionError::NoActivePlayer` if tiles are staged but nobody holds the
    /// turn; the board keeps them. Otherwise only on broken internal invariants.
    pub fn abandon_turn(&mut self) -> Result<(), SessionError> {
        self.selection = None;
        if self.board.in_flight_positions().is_empty() {
            self.staged.clear();
            return Ok(());
        }

        let index = self.require_active()?;
        let withdrawn = self.board.withdraw_in_flight();
        let count = withdrawn.len();
        self.return_to_rack(index, withdrawn)?;
        debug!(count, "staged tiles returned to rack");
        Ok(())
    }

    /// Validate and commit the staged tiles
    ///
    /// Steps run in a fixed order: withdraw staged tiles, reject an empty move,
    /// check the shape, commit and score, check every word against the
    /// dictionary, then either award points and advance or undo everything.
    ///
    /// # Errors
    /// Only on broken internal invariants; rejected moves are reported in the
    /// returned [`TurnReport`].
    pub fn commit_turn(&mut self) -> Result<TurnReport, SessionError> {
        let index = self.require_active()?;
        self.selection = None;
        let placements = self.board.withdraw_in_flight();
        let positions: Vec<Position> = placements.iter().map(|p| p.position).collect();

        let outcome = if placements.is_empty() {
            TurnOutcome::NoTilesPlaced
        } else if !self.board.validate_placement_shape(&positions) {
            self.return_to_rack(index, placements)?;
            TurnOutcome::IllegalPlacement
        } else {
            let committed = self.board.commit(placements);
            let rejected: Vec<String> = committed
                .words
                .iter()
                .filter(|word| !self.permits_word(word))
                .cloned()
                .collect();

            if rejected.is_empty() {
                self.players[index].add_points(committed.score);
                self.staged.clear();
                self.advance_turn()?;
                TurnOutcome::Success {
                    words: committed.words,
                    score: committed.score,
                }
            } else {
                let taken_back: Vec<Placement> = positions
                    .iter()
                    .filter_map(|&position| {
                        self.board
                            .remove_committed(position)
                            .map(|tile| Placement::new(tile, position))
                    })
                    .collect();
                self.return_to_rack(index, taken_back)?;
                TurnOutcome::IllegalWord {
                    words: committed.words,
                    rejected,
                }
            }
        };
        self.staged.clear();

        match &outcome {
            TurnOutcome::Success { words, score } => {
                info!(player = %self.players[index].name(), ?words, score, "turn committed");
            }
            rejected => info!(player = %self.players[index].name(), outcome = ?rejected, "turn rejected"),
        }

        let game_over = outcome.is_success() && self.is_game_over();
        if game_over {
            info!(winner = ?self.winner().map(Player::name), "game over");
        }

        Ok(TurnReport {
            outcome,
            scoreboard: self.scoreboard(),
            game_over,
        })
    }

    /// Abandon the turn, then shuffle the active player's rack
    ///
    /// # Errors
    /// Same as [`GameSession::abandon_turn`].
    pub fn shuffle_rack(&mut self) -> Result<(), SessionError> {
        self.abandon_turn()?;
        let index = self.require_active()?;
        self.players[index].shuffle_rack(&mut self.rng);
        self.selection = None;
        Ok(())
    }

    /// The bag is empty, or fewer than two players remain
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.bag.is_empty() || self.players.len() < 2
    }

    /// Player with the most points; the earliest seat wins a tie
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.leader_index().map(|i| &self.players[i])
    }

    fn leader_index(&self) -> Option<usize> {
        self.players
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, u32)>, (i, player)| match best {
                Some((_, points)) if points >= player.points() => best,
                _ => Some((i, player.points())),
            })
            .map(|(i, _)| i)
    }

    /// Names and points in seat order, with the scoring leader flagged
    #[must_use]
    pub fn scoreboard(&self) -> Vec<ScoreLine> {
        let leader = self.leader_index();
        self.players
            .iter()
            .enumerate()
            .map(|(i, player)| ScoreLine {
                name: player.name().to_string(),
                points: player.points(),
                is_leading: Some(i) == leader && player.points() > 0,
            })
            .collect()
    }

    #[must_use]
    pub fn permits_word(&self, word: &str) -> bool {
        self.dictionary.permits(word)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.active.and_then(|i| self.players.get(i))
    }

    /// Selected rack slot of the active player
    #[must_use]
    pub const fn selection(&self) -> Option<usize> {
        self.selection
    }

    #[must_use]
    pub const fn bag(&self) -> &TileBag {
        &self.bag
    }

    #[must_use]
    pub const fn board(&self) -> &B {
        &self.board
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Tiles currently counted in the bag, on every rack and on the board
    #[must_use]
    pub fn tiles_accounted_for(&self) -> usize {
        self.bag.remaining_count()
            + self.players.iter().map(Player::tile_count).sum::<usize>()
            + self.board.tile_count()
    }

    /// Whether every tile created for this game is in exactly one place
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        self.tiles_accounted_for() == self.bag.total()
    }

    fn require_active(&self) -> Result<usize, SessionError> {
        self.active.ok_or(SessionError::NoActivePlayer)
    }

    /// Put tiles back into the slots they were staged from
    fn return_to_rack(
        &mut self,
        index: usize,
        placements: Vec<Placement>,
    ) -> Result<(), SessionError> {
        for Placement { tile, position } in placements {
            let slot = self.origin_slot(position);
            self.players[index].restore_tile(slot, tile)?;
        }
        self.staged.clear();
        Ok(())
    }

    /// Slot a staged tile came from; out of range (so "first free") if unknown
    fn origin_slot(&self, position: Position) -> usize {
        self.staged
            .iter()
            .find(|s| s.position == position)
            .map_or(RACK_CAPACITY, |s| s.slot)
    }
}

#[cfg(test)]
impl<B: Board> GameSession<B> {
    /// Swap the active rack for the given letters, taken from the bag
    pub(crate) fn rig_active_rack(&mut self, letters: &str) {
        let index = self.active.expect("no active player");
        let player = &mut self.players[index];
        let old: Vec<Tile> = (0..RACK_CAPACITY)
            .filter_map(|slot| player.remove_tile(slot).ok())
            .collect();
        self.bag.put_back(old);
        for letter in letters.chars() {
            let tile = self.bag.take_letter(letter).expect("letter not in bag");
            player.add_tile(tile).unwrap();
        }
    }

    pub(crate) fn player_mut(&mut self, index: usize) -> &mut Player {
        &mut self.players[index]
    }

    /// Throw away bag tiles until `keep` remain, shrinking the game's total with them
    pub(crate) fn shrink_bag(&mut self, keep: usize) {
        let keep_tiles = self.bag.tiles()[..keep].to_vec();
        let dropped = self.bag.remaining_count() - keep;
        self.bag = TileBag::from_parts(keep_tiles, self.bag.total() - dropped);
    }
}
