#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use score::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod score;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord = 10;
    pub const DEFAULT_MINES: CellCount = 10;

    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// A board needs at least one cell and at least one safe cell.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        if mines >= mult(size, size) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Self::DEFAULT_MINES)
    }
}

/// A single player action on one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal(Position),
    ToggleFlag(Position),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
