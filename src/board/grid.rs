//! Standard 15×15 board
//!
//! Scores are the plain sum of tile values for every word formed; the grid has
//! no premium squares.

use super::{Board, Committed};
use crate::core::{Placement, Position, Tile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the grid
pub const GRID_SIZE: usize = 15;

/// The square the opening placement must cover
pub const CENTER: Position = Position::new(GRID_SIZE / 2, GRID_SIZE / 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Neighbour of `position` one step backwards or forwards along this direction
    fn step(self, position: Position, forward: bool) -> Option<Position> {
        let Position { x, y } = position;
        let (x, y) = match (self, forward) {
            (Self::Horizontal, false) => (x.checked_sub(1)?, y),
            (Self::Horizontal, true) => (x + 1, y),
            (Self::Vertical, false) => (x, y.checked_sub(1)?),
            (Self::Vertical, true) => (x, y + 1),
        };
        (x < GRID_SIZE && y < GRID_SIZE).then_some(Position::new(x, y))
    }
}

/// Committed tiles in a row-major grid, plus the tiles staged this turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Option<Tile>>,
    staged: Vec<Placement>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cells: vec![None; GRID_SIZE * GRID_SIZE],
            staged: Vec::new(),
        }
    }
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn index(position: Position) -> Option<usize> {
        (position.x < GRID_SIZE && position.y < GRID_SIZE)
            .then_some(position.y * GRID_SIZE + position.x)
    }

    /// Committed tile at `position`
    #[must_use]
    pub fn committed_at(&self, position: Position) -> Option<&Tile> {
        Self::index(position)
            .and_then(|i| self.cells.get(i))
            .and_then(Option::as_ref)
    }

    /// Staged tile at `position`
    #[must_use]
    pub fn staged_at(&self, position: Position) -> Option<&Tile> {
        self.staged
            .iter()
            .find(|p| p.position == position)
            .map(|p| &p.tile)
    }

    /// Whether no tile has been committed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Committed tiles with their positions, row by row
    pub fn committed(&self) -> impl Iterator<Item = (Position, &Tile)> {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.as_ref()
                .map(|tile| (Position::new(i % GRID_SIZE, i / GRID_SIZE), tile))
        })
    }

    fn is_occupied(&self, position: Position) -> bool {
        self.committed_at(position).is_some() || self.staged_at(position).is_some()
    }

    fn touches_committed(&self, position: Position) -> bool {
        [Direction::Horizontal, Direction::Vertical]
            .into_iter()
            .flat_map(|d| [d.step(position, false), d.step(position, true)])
            .flatten()
            .any(|neighbour| self.committed_at(neighbour).is_some())
    }

    /// The committed word running through `position` along `direction`, if it
    /// is at least two letters long
    fn word_through(&self, position: Position, direction: Direction) -> Option<(String, u32)> {
        let mut start = position;
        while let Some(prev) = direction.step(start, false) {
            if self.committed_at(prev).is_none() {
                break;
            }
            start = prev;
        }

        let mut word = String::new();
        let mut score = 0;
        let mut cursor = Some(start);
        while let Some(tile) = cursor.and_then(|p| self.committed_at(p)) {
            word.push(tile.letter());
            score += tile.value();
            cursor = cursor.and_then(|p| direction.step(p, true));
        }

        (word.chars().count() > 1).then_some((word, score))
    }
}

impl Board for Grid {
    fn attempt_place(&mut self, tile: Tile, position: Position) -> Result<(), Tile> {
        if Self::index(position).is_none() || self.is_occupied(position) {
            return Err(tile);
        }
        self.staged.push(Placement::new(tile, position));
        Ok(())
    }

    fn withdraw_in_flight(&mut self) -> Vec<Placement> {
        std::mem::take(&mut self.staged)
    }

    fn validate_placement_shape(&self, positions: &[Position]) -> bool {
        let Some(&first) = positions.first() else {
            return false;
        };

        let mut sorted = positions.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != positions.len()
            || sorted
                .iter()
                .any(|&p| Self::index(p).is_none() || self.committed_at(p).is_some())
        {
            return false;
        }

        let direction = if positions.iter().all(|p| p.y == first.y) {
            Direction::Horizontal
        } else if positions.iter().all(|p| p.x == first.x) {
            Direction::Vertical
        } else {
            return false;
        };

        // Every square between the two ends must be covered, by a new or an old tile.
        let (Some(&start), Some(&end)) = (sorted.first(), sorted.last()) else {
            return false;
        };
        let mut cursor = start;
        while cursor != end {
            match direction.step(cursor, true) {
                Some(next) if sorted.contains(&next) || self.committed_at(next).is_some() => {
                    cursor = next;
                }
                _ => return false,
            }
        }

        if self.is_empty() {
            positions.len() > 1 && positions.contains(&CENTER)
        } else {
            positions.iter().any(|&p| self.touches_committed(p))
        }
    }

    fn commit(&mut self, placements: Vec<Placement>) -> Committed {
        let positions: Vec<Position> = placements.iter().map(|p| p.position).collect();
        for Placement { tile, position } in placements {
            if let Some(cell) = Self::index(position).and_then(|i| self.cells.get_mut(i)) {
                *cell = Some(tile);
            }
        }

        let Some(&first) = positions.first() else {
            return Committed::default();
        };

        let mut formed = Vec::new();
        if positions.len() == 1 {
            formed.extend(self.word_through(first, Direction::Horizontal));
            formed.extend(self.word_through(first, Direction::Vertical));
        } else {
            let main = if positions.iter().all(|p| p.y == first.y) {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            formed.extend(self.word_through(first, main));
            formed.extend(
                positions
                    .iter()
                    .filter_map(|&p| self.word_through(p, main.cross())),
            );
        }

        Committed {
            score: formed.iter().map(|(_, score)| score).sum(),
            words: formed.into_iter().map(|(word, _)| word).collect(),
        }
    }

    fn remove_committed(&mut self, position: Position) -> Option<Tile> {
        Self::index(position)
            .and_then(|i| self.cells.get_mut(i))
            .and_then(Option::take)
    }

    fn tile_count(&self) -> usize {
        self.cells.iter().flatten().count() + self.staged.len()
    }

    fn in_flight_positions(&self) -> Vec<Position> {
        self.staged.iter().map(|p| p.position).collect()
    }

    fn is_well_formed(&self) -> bool {
        self.cells.len() == GRID_SIZE * GRID_SIZE
            && self
                .staged
                .iter()
                .all(|p| Self::index(p.position).is_some() && self.committed_at(p.position).is_none())
    }
}

impl fmt::Display for Grid {
    /// Committed tiles in uppercase, staged tiles in lowercase
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..GRID_SIZE {
            write!(f, "{x:>3}")?;
        }
        writeln!(f)?;

        for y in 0..GRID_SIZE {
            write!(f, "{y:>3}")?;
            for x in 0..GRID_SIZE {
                let position = Position::new(x, y);
                let symbol = match (self.committed_at(position), self.staged_at(position)) {
                    (Some(tile), _) => tile.letter(),
                    (None, Some(tile)) => tile.letter().to_ascii_lowercase(),
                    (None, None) if position == CENTER => '*',
                    (None, None) => '.',
                };
                write!(f, "{symbol:>3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
