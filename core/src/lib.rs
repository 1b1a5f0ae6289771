#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use display::*;
pub use economy::*;
pub use error::*;
pub use flag::*;
pub use game::*;
pub use generator::*;
pub use reveal::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod board;
mod display;
mod economy;
mod error;
mod flag;
mod game;
mod generator;
mod reveal;
mod tile;
mod types;
mod view;

/// Board side length, mine count and coin count for one round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
    pub coins: CellCount,
}

impl GameConfig {
    /// 3x3 board, 3 mines, 2 coins.
    pub const REFERENCE: Self = Self::new_unchecked(3, 3, 2);

    pub const fn new_unchecked(size: Coord, mines: CellCount, coins: CellCount) -> Self {
        Self { size, mines, coins }
    }

    pub fn new(size: Coord, mines: CellCount, coins: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines, coins);
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            log::warn!("Rejected game config: {}", err);
            GameError::InvalidConfig
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GameError::InvalidSize);
        }

        let total_tiles = self.total_tiles();
        if self.mines >= total_tiles {
            return Err(GameError::TooManyMines);
        }

        let requested = self.mines.saturating_add(self.coins);
        if requested > total_tiles {
            return Err(GameError::TooManyItems {
                requested,
                available: total_tiles,
            });
        }

        Ok(())
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_tiles(&self) -> CellCount {
        self.total_tiles().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
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

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
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
