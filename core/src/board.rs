use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of tiles owned by a single game.
///
/// Revealed and flagged tiles are counted at the mutation site, so the win
/// check and flag counter never rescan the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    tiles: Array2<Tile>,
    mine_count: CellCount,
    revealed_count: CellCount,
    flagged_count: CellCount,
}

impl Board {
    pub(crate) fn empty(size: Coord) -> Self {
        Self {
            tiles: Array2::default((size, size).to_nd_index()),
            mine_count: 0,
            revealed_count: 0,
            flagged_count: 0,
        }
    }

    /// Builds a board from explicit mine and coin positions.
    pub fn from_layout(size: Coord, mines: &[Coord2], coins: &[Coord2]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }

        let mut board = Self::empty(size);
        for &coords in mines {
            board.checked_tile_mut(coords)?.place_mine();
        }
        for &coords in coins {
            let tile = board.checked_tile_mut(coords)?;
            if tile.is_mine() {
                return Err(GameError::OverlappingCoin);
            }
            tile.place_coin();
        }

        board.mine_count = board.count_tiles(Tile::is_mine);
        if board.mine_count >= board.total_tiles() {
            return Err(GameError::TooManyMines);
        }
        board.fill_adjacent_counts();
        Ok(board)
    }

    pub fn size(&self) -> Coord {
        // the grid is square and allocated from a `Coord`
        Coord::try_from(self.tiles.nrows()).unwrap_or(Coord::MAX)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size())
    }

    pub fn get(&self, coords: Coord2) -> Option<&Tile> {
        self.tiles.get(coords.to_nd_index())
    }

    pub(crate) fn get_mut(&mut self, coords: Coord2) -> Option<&mut Tile> {
        self.tiles.get_mut(coords.to_nd_index())
    }

    fn checked_tile_mut(&mut self, coords: Coord2) -> Result<&mut Tile> {
        self.get_mut(coords).ok_or(GameError::InvalidCoords)
    }

    pub fn total_tiles(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_tile_count(&self) -> CellCount {
        self.total_tiles() - self.mine_count
    }

    /// Coins still lying on the board, collected or not yet exposed.
    pub fn coin_count(&self) -> CellCount {
        self.count_tiles(Tile::has_coin)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Every tile with its coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Tile)> {
        self.tiles
            .indexed_iter()
            .map(|((x, y), tile)| ((x as Coord, y as Coord), tile))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.tiles.iter_neighbors(coords)
    }

    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        let count = self
            .iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine())
            .count();
        // at most 8 neighbors
        count as u8
    }

    pub(crate) fn count_tiles(&self, predicate: impl Fn(&Tile) -> bool) -> CellCount {
        let count = self.tiles.iter().filter(|&tile| predicate(tile)).count();
        CellCount::try_from(count).unwrap_or(CellCount::MAX)
    }

    pub(crate) fn set_mine_count(&mut self, mine_count: CellCount) {
        self.mine_count = mine_count;
    }

    pub(crate) fn fill_adjacent_counts(&mut self) {
        let size = self.size();
        for x in 0..size {
            for y in 0..size {
                let coords = (x, y);
                if self[coords].is_mine() {
                    continue;
                }
                let count = self.count_adjacent_mines(coords);
                self.tiles[coords.to_nd_index()].set_adjacent_mines(count);
            }
        }
    }

    /// Reveals the tile at `coords`, returning whether it was hidden before.
    pub(crate) fn reveal_tile(&mut self, coords: Coord2) -> bool {
        let Some(tile) = self.get_mut(coords) else {
            return false;
        };
        let newly_revealed = tile.reveal();
        if newly_revealed {
            self.revealed_count += 1;
        }
        newly_revealed
    }

    pub(crate) fn collect_coin(&mut self, coords: Coord2) -> bool {
        self.get_mut(coords).is_some_and(Tile::collect_coin)
    }

    pub(crate) fn toggle_flag(&mut self, coords: Coord2) {
        let Some(tile) = self.get_mut(coords) else {
            return;
        };
        if tile.toggle_flag() {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
    }

    pub(crate) fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter()
            .filter(|(_, tile)| tile.is_mine())
            .map(|(coords, _)| coords)
    }
}

/// Wire form of a board. Counters are rebuilt from the tiles on load.
#[derive(Deserialize)]
struct BoardRepr {
    tiles: Array2<Tile>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        let (rows, cols) = repr.tiles.dim();
        if rows != cols || rows == 0 || Coord::try_from(rows).is_err() {
            return Err(GameError::InvalidBoardShape);
        }
        if repr.tiles.iter().any(|tile| tile.is_mine() && tile.has_coin()) {
            return Err(GameError::OverlappingCoin);
        }

        let mut board = Self {
            tiles: repr.tiles,
            mine_count: 0,
            revealed_count: 0,
            flagged_count: 0,
        };
        board.mine_count = board.count_tiles(Tile::is_mine);
        if board.mine_count >= board.total_tiles() {
            return Err(GameError::TooManyMines);
        }
        board.revealed_count = board.count_tiles(Tile::is_revealed);
        board.flagged_count = board.count_tiles(Tile::is_flagged);
        board.fill_adjacent_counts();
        Ok(board)
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}
