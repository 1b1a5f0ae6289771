use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer draws on a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    Empty,
    Flag,
    Mine,
    Coin,
    Number(u8),
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Flag => f.write_str("🚩"),
            Self::Mine => f.write_str("💣"),
            Self::Coin => f.write_str("🪙"),
            Self::Number(count) => write!(f, "{}", count),
        }
    }
}

/// Picks the glyph for a tile.
///
/// Once the game is over hidden tiles are drawn too, so the whole layout
/// shows after a loss or a win.
pub fn tile_display_content(tile: &Tile, game_over: bool) -> Glyph {
    if tile.is_flagged() {
        return Glyph::Flag;
    }

    if tile.is_unrevealed() && !game_over {
        return Glyph::Empty;
    }

    if tile.is_mine() {
        return Glyph::Mine;
    }

    if tile.is_revealed() && tile.has_coin() {
        return Glyph::Coin;
    }

    match tile.adjacent_mines() {
        0 => Glyph::Empty,
        count => Glyph::Number(count),
    }
}

/// Styling bucket of a tile, derived from tile and game state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileStatus {
    Hidden,
    Flagged,
    Revealed,
    /// A mine shown after the round was lost.
    Lose,
    /// A revealed tile of a won round.
    Win,
}

impl TileStatus {
    pub fn of(tile: &Tile, game_over: bool, game_won: bool) -> Self {
        if tile.is_flagged() {
            Self::Flagged
        } else if is_shown(tile, game_over) && tile.is_mine() {
            Self::Lose
        } else if tile.is_revealed() && game_won {
            Self::Win
        } else if tile.is_revealed() {
            Self::Revealed
        } else {
            Self::Hidden
        }
    }
}

/// Mines are shown once the game is over even if never revealed.
fn is_shown(tile: &Tile, game_over: bool) -> bool {
    tile.is_revealed() || (game_over && tile.is_mine())
}

/// Whether clicks on this tile should reach the engine at all.
pub fn accepts_input(tile: &Tile, game_over: bool) -> bool {
    !game_over && !is_shown(tile, game_over)
}
