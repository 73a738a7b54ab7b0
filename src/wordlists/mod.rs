//! Word lists and dictionary lookup
//!
//! Provides the embedded per-language word lists and the `Dictionary` built from them.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionarySource};
pub use embedded::{ENGLISH, ENGLISH_COUNT, FRENCH, FRENCH_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_count_matches_const() {
        assert_eq!(ENGLISH.len(), ENGLISH_COUNT);
    }

    #[test]
    fn french_count_matches_const() {
        assert_eq!(FRENCH.len(), FRENCH_COUNT);
    }

    #[test]
    fn entries_are_lowercase_ascii() {
        for &word in ENGLISH.iter().chain(FRENCH) {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }
}
