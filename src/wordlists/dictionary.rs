//! Dictionary of playable words

use super::embedded::{ENGLISH, FRENCH};
use super::loader::load_from_file;
use crate::core::Language;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

/// Where a dictionary's words came from
///
/// Saved games record the source instead of the words themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DictionarySource {
    /// The list compiled into the binary for a language
    Embedded(Language),
    /// A word list file, one word per line
    File(PathBuf),
}

/// Immutable set of uppercase words, at least two letters long
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
    source: DictionarySource,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries shorter than two characters are dropped, the rest are uppercased.
    pub fn from_words<I, S>(words: I, source: DictionarySource) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| w.chars().count() > 1)
            .collect();

        debug!(count = words.len(), ?source, "dictionary built");
        Self { words, source }
    }

    /// Dictionary compiled into the binary for `language`
    #[must_use]
    pub fn embedded(language: Language) -> Self {
        let words = match language {
            Language::English => ENGLISH,
            Language::French => FRENCH,
        };
        Self::from_words(words.iter(), DictionarySource::Embedded(language))
    }

    /// Load a dictionary from its source
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file source cannot be read.
    pub fn load(source: &DictionarySource) -> io::Result<Self> {
        match source {
            DictionarySource::Embedded(language) => Ok(Self::embedded(*language)),
            DictionarySource::File(path) => {
                let words = load_from_file(path)?;
                let dictionary = Self::from_words(words, source.clone());
                info!(path = %path.display(), count = dictionary.len(), "dictionary loaded");
                Ok(dictionary)
            }
        }
    }

    /// Whether `word` is playable, ignoring case
    #[must_use]
    pub fn permits(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub const fn source(&self) -> &DictionarySource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words, DictionarySource::File(PathBuf::from("test.txt")))
    }

    #[test]
    fn lookups_ignore_case() {
        let dictionary = custom(&["cat", "Dog"]);
        assert!(dictionary.permits("CAT"));
        assert!(dictionary.permits("cat"));
        assert!(dictionary.permits("dOG"));
        assert!(!dictionary.permits("cow"));
    }

    #[test]
    fn single_letters_are_dropped() {
        let dictionary = custom(&["a", "I", "at", ""]);
        assert_eq!(dictionary.len(), 1);
        assert!(!dictionary.permits("a"));
        assert!(dictionary.permits("AT"));
    }

    #[test]
    fn embedded_lists_load() {
        let english = Dictionary::embedded(Language::English);
        assert!(english.permits("cat"));
        assert!(english.permits("QI"));
        assert!(!english.permits("A"));

        let french = Dictionary::embedded(Language::French);
        assert!(french.permits("maison"));
        assert!(!french.permits("zzz"));
        assert_eq!(french.source(), &DictionarySource::Embedded(Language::French));
    }

    #[test]
    fn load_from_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "chat\nx\nchien\n").unwrap();

        let dictionary = Dictionary::load(&DictionarySource::File(path)).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.permits("CHIEN"));
    }
}
