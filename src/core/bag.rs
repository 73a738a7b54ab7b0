//! The shared bag of undrawn tiles

use super::language::FrequencyEntry;
use super::tile::Tile;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a draw asks for a negative count or more tiles than remain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot draw {requested} tiles: bag holds {remaining}")]
pub struct InvalidDrawCount {
    pub requested: isize,
    pub remaining: usize,
}

/// Multiset of undrawn tiles
///
/// `total` is fixed at creation and never changes: it is the number of tiles
/// that exist in the game, wherever they currently are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileBag {
    tiles: Vec<Tile>,
    total: usize,
}

impl TileBag {
    /// Build a full bag from `(letter, count, value)` rows
    ///
    /// # Examples
    /// ```
    /// use scrabble_session::core::TileBag;
    ///
    /// let bag = TileBag::from_table(&[('A', 3, 1), ('Z', 1, 10)]);
    /// assert_eq!(bag.remaining_count(), 4);
    /// ```
    #[must_use]
    pub fn from_table(table: &[FrequencyEntry]) -> Self {
        let tiles: Vec<Tile> = table
            .iter()
            .flat_map(|&(letter, count, value)| {
                (0..count).map(move |_| Tile::new(letter, value))
            })
            .collect();
        let total = tiles.len();
        Self { tiles, total }
    }

    /// Rebuild a bag from saved contents and the game's tile total
    #[must_use]
    pub const fn from_parts(tiles: Vec<Tile>, total: usize) -> Self {
        Self { tiles, total }
    }

    /// Draw `count` tiles uniformly at random, without replacement
    ///
    /// The drawn tiles leave the bag. A failed draw leaves the bag untouched.
    ///
    /// # Errors
    /// Returns `InvalidDrawCount` if `count` is negative or exceeds the remaining count.
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        count: isize,
        rng: &mut R,
    ) -> Result<Vec<Tile>, InvalidDrawCount> {
        let remaining = self.tiles.len();
        let n = usize::try_from(count)
            .ok()
            .filter(|&n| n <= remaining)
            .ok_or(InvalidDrawCount {
                requested: count,
                remaining,
            })?;

        self.tiles.shuffle(rng);
        Ok(self.tiles.drain(..n).collect())
    }

    #[inline]
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles created for this game
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Undrawn tiles, in no meaningful order
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

#[cfg(test)]
impl TileBag {
    pub(crate) fn take_letter(&mut self, letter: char) -> Option<Tile> {
        let index = self.tiles.iter().position(|t| t.letter() == letter)?;
        Some(self.tiles.swap_remove(index))
    }

    pub(crate) fn put_back(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Language;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn from_table_builds_exact_distribution() {
        let bag = TileBag::from_table(Language::English.frequency_table());
        assert_eq!(bag.remaining_count(), 98);
        assert_eq!(bag.total(), 98);

        let e_tiles = bag.tiles().iter().filter(|t| t.letter() == 'E').count();
        assert_eq!(e_tiles, 12);
        assert!(bag.tiles().iter().filter(|t| t.letter() == 'K').all(|t| t.value() == 5));
    }

    #[test]
    fn draw_moves_tiles_out() {
        let mut bag = TileBag::from_table(&[('A', 5, 1), ('B', 5, 3)]);
        let drawn = bag.draw(4, &mut rng()).unwrap();

        assert_eq!(drawn.len(), 4);
        assert_eq!(bag.remaining_count(), 6);
        assert_eq!(bag.total(), 10);

        let a_left = bag.tiles().iter().filter(|t| t.letter() == 'A').count();
        let a_drawn = drawn.iter().filter(|t| t.letter() == 'A').count();
        assert_eq!(a_left + a_drawn, 5);
    }

    #[test]
    fn draw_everything_then_nothing() {
        let mut bag = TileBag::from_table(&[('A', 3, 1)]);
        assert_eq!(bag.draw(3, &mut rng()).unwrap().len(), 3);
        assert!(bag.is_empty());
        assert!(bag.draw(0, &mut rng()).unwrap().is_empty());
    }

    #[test]
    fn invalid_draw_counts_leave_bag_unchanged() {
        let mut bag = TileBag::from_table(Language::French.frequency_table());
        let before = bag.clone();

        assert_eq!(
            bag.draw(-1, &mut rng()),
            Err(InvalidDrawCount {
                requested: -1,
                remaining: 100
            })
        );
        assert!(bag.draw(101, &mut rng()).is_err());
        assert_eq!(bag, before);
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let mut first = TileBag::from_table(Language::English.frequency_table());
        let mut second = first.clone();

        assert_eq!(
            first.draw(7, &mut rng()).unwrap(),
            second.draw(7, &mut rng()).unwrap()
        );
    }
}
