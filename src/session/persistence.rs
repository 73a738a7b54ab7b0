//! Saving and restoring whole sessions
//!
//! A save file is a versioned JSON snapshot of every field of the session
//! except the random generator, which is re-seeded on load.

use super::config::seeded_rng;
use super::engine::{GameSession, StagedSlot};
use crate::board::Board;
use crate::core::{Language, Player, TileBag};
use crate::wordlists::{Dictionary, DictionarySource};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Current snapshot layout version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed save data: {0}")]
    Format(#[from] serde_json::Error),
    #[error("unsupported save version {0} (expected {SNAPSHOT_VERSION})")]
    UnsupportedVersion(u32),
    #[error("inconsistent save data: {0}")]
    Corrupt(String),
    #[error("failed to reload dictionary: {0}")]
    Dictionary(#[source] io::Error),
}

/// Field-by-field image of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot<B> {
    pub version: u32,
    pub language: Language,
    pub dictionary: DictionarySource,
    pub players: Vec<Player>,
    pub active: Option<usize>,
    pub selection: Option<usize>,
    pub staged: Vec<StagedSlot>,
    pub bag: TileBag,
    pub board: B,
}

impl<B> SessionSnapshot<B>
where
    B: Board,
{
    /// Check the invariants a live session relies on
    fn validate(&self) -> Result<(), PersistenceError> {
        let corrupt = |msg: String| Err(PersistenceError::Corrupt(msg));

        if self.version != SNAPSHOT_VERSION {
            return Err(PersistenceError::UnsupportedVersion(self.version));
        }
        if self.players.is_empty() {
            return corrupt("no players".into());
        }
        let Some(active) = self.active else {
            return corrupt("no active player".into());
        };
        if active >= self.players.len() {
            return corrupt(format!("active player {active} does not exist"));
        }
        if let Some(slot) = self.selection
            && self.players[active].check_slot(slot).is_err()
        {
            return corrupt(format!("selected slot {slot} is empty"));
        }
        if !self.board.is_well_formed() {
            return corrupt("board layout does not match".into());
        }

        let mut in_flight = self.board.in_flight_positions();
        let mut staged: Vec<_> = self.staged.iter().map(|s| s.position).collect();
        in_flight.sort_unstable();
        staged.sort_unstable();
        if in_flight != staged {
            return corrupt("staged tiles do not match the board".into());
        }

        let accounted = self.bag.remaining_count()
            + self.players.iter().map(Player::tile_count).sum::<usize>()
            + self.board.tile_count();
        if accounted != self.bag.total() {
            return corrupt(format!(
                "{accounted} tiles found, {} expected",
                self.bag.total()
            ));
        }
        Ok(())
    }
}

impl<B> GameSession<B>
where
    B: Board + Clone + Serialize + DeserializeOwned,
{
    /// Capture the whole session
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot<B> {
        SessionSnapshot {
            version: SNAPSHOT_VERSION,
            language: self.language,
            dictionary: self.dictionary.source().clone(),
            players: self.players.clone(),
            active: self.active,
            selection: self.selection,
            staged: self.staged.clone(),
            bag: self.bag.clone(),
            board: self.board.clone(),
        }
    }

    /// Rebuild a session from a snapshot
    ///
    /// The dictionary is reloaded from its recorded source. `seed` makes the
    /// restored session's random choices reproducible.
    ///
    /// # Errors
    /// - `PersistenceError::UnsupportedVersion` for snapshots from another layout
    /// - `PersistenceError::Corrupt` if the snapshot breaks a session invariant
    /// - `PersistenceError::Dictionary` if the dictionary cannot be reloaded
    pub fn from_snapshot(
        snapshot: SessionSnapshot<B>,
        seed: Option<u64>,
    ) -> Result<Self, PersistenceError> {
        snapshot.validate()?;
        let dictionary =
            Dictionary::load(&snapshot.dictionary).map_err(PersistenceError::Dictionary)?;

        Ok(Self {
            language: snapshot.language,
            players: snapshot.players,
            active: snapshot.active,
            bag: snapshot.bag,
            dictionary,
            selection: snapshot.selection,
            staged: snapshot.staged,
            board: snapshot.board,
            rng: seeded_rng(seed),
        })
    }

    /// Serialize the session into an in-memory buffer
    ///
    /// # Errors
    /// `PersistenceError::Format` if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistenceError> {
        Ok(serde_json::to_vec_pretty(&self.snapshot())?)
    }

    /// Restore a session from [`GameSession::to_bytes`] output
    ///
    /// # Errors
    /// `PersistenceError::Format` for unreadable data, plus everything
    /// [`GameSession::from_snapshot`] can report.
    pub fn from_bytes(bytes: &[u8], seed: Option<u64>) -> Result<Self, PersistenceError> {
        let snapshot: SessionSnapshot<B> = serde_json::from_slice(bytes)?;
        Self::from_snapshot(snapshot, seed)
    }

    /// Write the session to `path`
    ///
    /// The data goes to a temporary sibling file that is renamed over `path`
    /// once fully written, so an existing save is never left half overwritten.
    ///
    /// # Errors
    /// `PersistenceError::Io` if the file cannot be written. The session itself
    /// is unaffected.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");

        let written = fs::write(&tmp, &bytes).and_then(|()| fs::rename(&tmp, path));
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            warn!(path = %path.display(), %err, "save failed");
            return Err(err.into());
        }

        info!(path = %path.display(), bytes = bytes.len(), "session saved");
        Ok(())
    }

    /// Read a session saved with [`GameSession::save`]
    ///
    /// # Errors
    /// `PersistenceError::Io` if the file cannot be read, plus everything
    /// [`GameSession::from_bytes`] can report.
    pub fn load<P: AsRef<Path>>(path: P, seed: Option<u64>) -> Result<Self, PersistenceError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let session = Self::from_bytes(&bytes, seed)?;
        info!(path = %path.display(), "session loaded");
        Ok(session)
    }
}
