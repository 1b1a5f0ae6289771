use serde::{Deserialize, Serialize};

/// One cell of the board.
///
/// Mine and adjacency data are fixed at generation. Only the engine flips the
/// reveal, flag and coin bits, so renderers get read-only accessors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    is_mine: bool,
    is_revealed: bool,
    is_flagged: bool,
    adjacent_mines: u8,
    has_coin: bool,
}

impl Tile {
    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Mines in the Moore neighborhood. Always 0 for mine tiles.
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn has_coin(&self) -> bool {
        self.has_coin
    }

    pub const fn is_unrevealed(&self) -> bool {
        !self.is_revealed
    }

    pub(crate) fn place_mine(&mut self) {
        self.is_mine = true;
        self.has_coin = false;
    }

    pub(crate) fn place_coin(&mut self) {
        debug_assert!(!self.is_mine);
        self.has_coin = true;
    }

    pub(crate) fn set_adjacent_mines(&mut self, count: u8) {
        self.adjacent_mines = count;
    }

    /// Returns `true` when the tile was hidden before.
    pub(crate) fn reveal(&mut self) -> bool {
        let was_hidden = !self.is_revealed;
        self.is_revealed = true;
        was_hidden
    }

    pub(crate) fn toggle_flag(&mut self) -> bool {
        self.is_flagged = !self.is_flagged;
        self.is_flagged
    }

    /// Takes the coin off the tile, returning whether there was one.
    pub(crate) fn collect_coin(&mut self) -> bool {
        core::mem::take(&mut self.has_coin)
    }
}
