//! Players and their racks
//!
//! A rack is a fixed row of seven slots. Slots empty out while tiles are staged
//! on the board and are refilled from the bag at the start of each turn.

use super::tile::Tile;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of slots on a rack
pub const RACK_CAPACITY: usize = 7;

/// Errors raised by rack mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RackError {
    #[error("rack is full")]
    RackFull,
    #[error("rack slot {0} is empty")]
    EmptySlot(usize),
    #[error("rack slot {0} is out of range (capacity {RACK_CAPACITY})")]
    IndexOutOfRange(usize),
}

/// A player: name, running score and rack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    points: u32,
    rack: [Option<Tile>; RACK_CAPACITY],
}

impl Player {
    /// Create a player with no points and an empty rack
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: 0,
            rack: Default::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Rack slots in order, `None` for empty slots
    #[inline]
    #[must_use]
    pub const fn rack(&self) -> &[Option<Tile>; RACK_CAPACITY] {
        &self.rack
    }

    /// Tile in a given slot, if any
    #[must_use]
    pub fn tile_at(&self, slot: usize) -> Option<&Tile> {
        self.rack.get(slot).and_then(Option::as_ref)
    }

    /// Put a tile into the first empty slot
    ///
    /// # Errors
    /// Returns `RackError::RackFull` (handing nothing back) when every slot is taken.
    pub fn add_tile(&mut self, tile: Tile) -> Result<usize, RackError> {
        let slot = self
            .rack
            .iter()
            .position(Option::is_none)
            .ok_or(RackError::RackFull)?;
        self.rack[slot] = Some(tile);
        Ok(slot)
    }

    /// Put a tile back into `slot`, or into the first empty slot if `slot` is taken
    ///
    /// Used by rollbacks so tiles return where they were picked from.
    ///
    /// # Errors
    /// Returns `RackError::RackFull` when no slot is free.
    pub fn restore_tile(&mut self, slot: usize, tile: Tile) -> Result<usize, RackError> {
        if self.rack.get(slot).is_some_and(Option::is_none) {
            self.rack[slot] = Some(tile);
            return Ok(slot);
        }
        self.add_tile(tile)
    }

    /// Take the tile out of `slot`, leaving the slot empty
    ///
    /// # Errors
    /// - `RackError::IndexOutOfRange` if `slot >= RACK_CAPACITY`
    /// - `RackError::EmptySlot` if the slot holds no tile
    pub fn remove_tile(&mut self, slot: usize) -> Result<Tile, RackError> {
        self.rack
            .get_mut(slot)
            .ok_or(RackError::IndexOutOfRange(slot))?
            .take()
            .ok_or(RackError::EmptySlot(slot))
    }

    /// Check that `slot` exists and holds a tile
    ///
    /// # Errors
    /// Same conditions as [`Player::remove_tile`], without mutating anything.
    pub fn check_slot(&self, slot: usize) -> Result<(), RackError> {
        match self.rack.get(slot) {
            None => Err(RackError::IndexOutOfRange(slot)),
            Some(None) => Err(RackError::EmptySlot(slot)),
            Some(Some(_)) => Ok(()),
        }
    }

    /// Number of occupied slots
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.rack.iter().flatten().count()
    }

    /// How many tiles are needed to fill the rack
    #[must_use]
    pub fn missing_count(&self) -> usize {
        RACK_CAPACITY - self.tile_count()
    }

    /// Randomly permute the slots, empty ones included
    pub fn shuffle_rack<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.rack.shuffle(rng);
    }

    pub fn add_points(&mut self, score: u32) {
        self.points = self.points.saturating_add(score);
    }
}
