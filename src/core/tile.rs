//! Tiles and board coordinates
//!
//! A `Tile` is deliberately `Clone` but not `Copy`: tiles move between the bag,
//! the racks and the board, and the type system keeps those moves explicit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single letter tile with its point value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    letter: char,
    value: u32,
}

impl Tile {
    /// Create a tile; the letter is normalized to uppercase
    ///
    /// # Examples
    /// ```
    /// use scrabble_session::core::Tile;
    ///
    /// let tile = Tile::new('c', 3);
    /// assert_eq!(tile.letter(), 'C');
    /// assert_eq!(tile.value(), 3);
    /// ```
    #[must_use]
    pub fn new(letter: char, value: u32) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            value,
        }
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.value)
    }
}

/// A board coordinate: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A tile standing on a board position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub tile: Tile,
    pub position: Position,
}

impl Placement {
    #[must_use]
    pub const fn new(tile: Tile, position: Position) -> Self {
        Self { tile, position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_letter_is_uppercased() {
        let tile = Tile::new('e', 1);
        assert_eq!(tile.letter(), 'E');
        assert_eq!(tile, Tile::new('E', 1));
    }

    #[test]
    fn tile_display() {
        assert_eq!(Tile::new('Q', 10).to_string(), "Q10");
    }

    #[test]
    fn positions_order_by_column_then_row() {
        let mut positions = vec![Position::new(3, 1), Position::new(1, 9), Position::new(1, 2)];
        positions.sort();
        assert_eq!(
            positions,
            vec![Position::new(1, 2), Position::new(1, 9), Position::new(3, 1)]
        );
    }
}
