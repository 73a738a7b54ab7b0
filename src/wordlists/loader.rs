//! Word list loading utilities
//!
//! Raw entries come either from a file (one word per line) or from the
//! embedded constants. Normalization happens in [`Dictionary`](super::Dictionary).

use std::fs;
use std::io;
use std::path::Path;

/// Load the raw entries of a word list file
///
/// Blank lines and `#` comments are skipped; everything else is returned trimmed.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use scrabble_session::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/en.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(entries(&content).map(str::to_string).collect())
}

fn entries(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_skip_blanks_and_comments() {
        let content = "# header\ncat\n\n  dog  \n#note\nA\n";
        let words: Vec<&str> = entries(content).collect();
        assert_eq!(words, vec!["cat", "dog", "A"]);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "maison\nchat\n\n").unwrap();

        assert_eq!(load_from_file(&path).unwrap(), vec!["maison", "chat"]);
    }
}
