//! The board collaborator
//!
//! The session only talks to the board through the [`Board`] trait. [`Grid`] is
//! the standard 15×15 implementation used by the CLI and the tests.

mod grid;

pub use grid::{CENTER, GRID_SIZE, Grid};

use crate::core::{Placement, Position, Tile};

/// Words and score produced by a committed placement
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Committed {
    pub words: Vec<String>,
    pub score: u32,
}

/// A placement surface: owns geometry, word extraction and scoring
///
/// Tiles pass through two stages. Staged (in-flight) tiles can be withdrawn at
/// any time; committed tiles are permanent unless explicitly removed.
pub trait Board {
    /// Stage a tile at `position`
    ///
    /// # Errors
    /// Hands the tile back when the position cannot take it; the board is unchanged.
    fn attempt_place(&mut self, tile: Tile, position: Position) -> Result<(), Tile>;

    /// Remove and return every staged tile, emptying the staging area
    fn withdraw_in_flight(&mut self) -> Vec<Placement>;

    /// Whether a set of new positions forms a legal placement shape
    fn validate_placement_shape(&self, positions: &[Position]) -> bool;

    /// Fix tiles permanently and report the words they form and their score
    fn commit(&mut self, placements: Vec<Placement>) -> Committed;

    /// Take back one committed tile
    fn remove_committed(&mut self, position: Position) -> Option<Tile>;

    /// Number of tiles on the board, committed and staged
    fn tile_count(&self) -> usize;

    /// Positions currently holding staged tiles
    fn in_flight_positions(&self) -> Vec<Position>;

    /// Whether restored board state has the shape this board needs
    fn is_well_formed(&self) -> bool {
        true
    }
}
