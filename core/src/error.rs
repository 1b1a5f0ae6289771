use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size must be at least 1")]
    InvalidSize,
    #[error("Too many mines, at least one tile must be safe")]
    TooManyMines,
    #[error("Mines and coins do not fit on the board: {requested} requested, {available} tiles")]
    TooManyItems {
        requested: CellCount,
        available: CellCount,
    },
    #[error("Board is not a non-empty square grid")]
    InvalidBoardShape,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Coin placed on a mine tile")]
    OverlappingCoin,
    #[error("Game configuration could not be parsed")]
    InvalidConfig,
    #[error("Cell sampler ran out of coordinates")]
    SamplerExhausted,
}

pub type Result<T> = core::result::Result<T, GameError>;
