use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Source of candidate cells for mine and coin placement.
pub trait CellSampler {
    /// Draws one coordinate on a square board with side `size`.
    fn sample(&mut self, size: Coord) -> Result<Coord2>;
}

impl<S: CellSampler + ?Sized> CellSampler for &mut S {
    fn sample(&mut self, size: Coord) -> Result<Coord2> {
        (**self).sample(size)
    }
}

/// Builds a fresh board: mines first, then coins on the remaining safe
/// tiles, both by rejection sampling, then the adjacency counts.
pub fn generate<S: CellSampler + ?Sized>(config: &GameConfig, sampler: &mut S) -> Result<Board> {
    config.validate()?;

    let mut board = Board::empty(config.size);

    let mut mines_placed = 0;
    while mines_placed < config.mines {
        let coords = sampler.sample(config.size)?;
        match board.get_mut(coords) {
            Some(tile) if !tile.is_mine() => {
                tile.place_mine();
                mines_placed += 1;
            }
            Some(_) => {}
            None => log::trace!("Sampled {:?} outside of the board", coords),
        }
    }

    let mut coins_placed = 0;
    while coins_placed < config.coins {
        let coords = sampler.sample(config.size)?;
        match board.get_mut(coords) {
            Some(tile) if !tile.is_mine() && !tile.has_coin() => {
                tile.place_coin();
                coins_placed += 1;
            }
            Some(_) => {}
            None => log::trace!("Sampled {:?} outside of the board", coords),
        }
    }

    board.set_mine_count(board.count_tiles(Tile::is_mine));
    board.fill_adjacent_counts();

    log::debug!(
        "Generated {0}x{0} board with {1} mines and {2} coins",
        config.size,
        config.mines,
        config.coins
    );
    Ok(board)
}
