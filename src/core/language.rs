//! Supported languages and their tile distributions
//!
//! Distributions follow the standard Scrabble letter sets, without blank tiles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A row of a frequency table: letter, number of tiles, point value
pub type FrequencyEntry = (char, u32, u32);

#[rustfmt::skip]
const FRENCH_TILES: &[FrequencyEntry] = &[
    ('E', 15, 1), ('A', 9, 1), ('I', 8, 1), ('N', 6, 1), ('O', 6, 1),
    ('R', 6, 1), ('S', 6, 1), ('T', 6, 1), ('U', 6, 1), ('L', 5, 1),
    ('D', 3, 2), ('M', 3, 2), ('G', 2, 2), ('B', 2, 3), ('C', 2, 3),
    ('P', 2, 3), ('F', 2, 4), ('H', 2, 4), ('V', 2, 4), ('J', 1, 8),
    ('Q', 1, 8), ('K', 1, 10), ('W', 1, 10), ('X', 1, 10), ('Y', 1, 10),
    ('Z', 1, 10),
];

#[rustfmt::skip]
const ENGLISH_TILES: &[FrequencyEntry] = &[
    ('E', 12, 1), ('A', 9, 1), ('I', 9, 1), ('N', 6, 1), ('O', 8, 1),
    ('R', 6, 1), ('S', 4, 1), ('T', 6, 1), ('U', 4, 1), ('L', 4, 1),
    ('D', 4, 2), ('M', 2, 3), ('G', 3, 2), ('B', 2, 3), ('C', 2, 3),
    ('P', 2, 3), ('F', 2, 4), ('H', 2, 4), ('V', 2, 4), ('J', 1, 8),
    ('Q', 1, 10), ('K', 1, 5), ('W', 2, 4), ('X', 1, 8), ('Y', 2, 4),
    ('Z', 1, 10),
];

/// Raised when a language code is not supported
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language '{0}' (expected FR or EN)")]
pub struct InvalidLanguage(pub String);

/// Game language: selects both the tile set and the dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "FR")]
    French,
    #[serde(rename = "EN")]
    English,
}

impl Language {
    /// Letter distribution for this language
    #[must_use]
    pub const fn frequency_table(self) -> &'static [FrequencyEntry] {
        match self {
            Self::French => FRENCH_TILES,
            Self::English => ENGLISH_TILES,
        }
    }

    /// Total number of tiles in a full bag
    #[must_use]
    pub fn tile_total(self) -> usize {
        self.frequency_table()
            .iter()
            .map(|&(_, count, _)| count as usize)
            .sum()
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::French => "FR",
            Self::English => "EN",
        }
    }
}

impl FromStr for Language {
    type Err = InvalidLanguage;

    /// Parse `FR`/`EN`, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FR" => Ok(Self::French),
            "EN" => Ok(Self::English),
            _ => Err(InvalidLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
