//! Session configuration and setup errors

use crate::core::{InvalidLanguage, Language};
use crate::session::SessionError;
use crate::wordlists::DictionarySource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fewest players a game can start with
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can start with
pub const MAX_PLAYERS: usize = 4;

/// Errors raised while setting up a new session
///
/// These are caller-input errors: nothing has been created yet, so the caller
/// can simply ask again.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid player count {0}: a game needs {MIN_PLAYERS} to {MAX_PLAYERS} players")]
    InvalidPlayerCount(usize),
    #[error(transparent)]
    InvalidLanguage(#[from] InvalidLanguage),
    #[error("failed to load dictionary {}: {source}", path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to deal the opening rack: {0}")]
    Deal(#[from] SessionError),
}

/// Everything needed to start a new game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    players: usize,
    language: Language,
    seed: Option<u64>,
    dictionary_path: Option<PathBuf>,
}

impl SessionConfig {
    /// Validate a player count and a language code
    ///
    /// The language is checked first, then the player count.
    ///
    /// # Errors
    /// - `SetupError::InvalidLanguage` unless `language` is `FR` or `EN` (any case)
    /// - `SetupError::InvalidPlayerCount` unless `2 <= players <= 4`
    ///
    /// # Examples
    /// ```
    /// use scrabble_session::session::SessionConfig;
    ///
    /// let config = SessionConfig::new(2, "en").unwrap().with_seed(7);
    /// assert_eq!(config.players(), 2);
    /// assert!(SessionConfig::new(5, "EN").is_err());
    /// ```
    pub fn new(players: usize, language: &str) -> Result<Self, SetupError> {
        let language: Language = language.parse()?;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(SetupError::InvalidPlayerCount(players));
        }

        Ok(Self {
            players,
            language,
            seed: None,
            dictionary_path: None,
        })
    }

    /// Make every random choice reproducible
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a word list file instead of the embedded dictionary
    #[must_use]
    pub fn with_dictionary(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = Some(path.into());
        self
    }

    #[must_use]
    pub const fn players(&self) -> usize {
        self.players
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn dictionary_source(&self) -> DictionarySource {
        self.dictionary_path.clone().map_or(
            DictionarySource::Embedded(self.language),
            DictionarySource::File,
        )
    }

    /// The session's random generator: seeded if a seed was given, from the OS otherwise
    #[must_use]
    pub fn rng(&self) -> StdRng {
        seeded_rng(self.seed)
    }
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
