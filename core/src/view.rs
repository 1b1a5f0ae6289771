use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs to draw one frame, detached from the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub size: Coord,
    pub glyphs: Array2<Glyph>,
    pub statuses: Array2<TileStatus>,
    pub interactive: Array2<bool>,
    pub mine_count: CellCount,
    pub flag_count: CellCount,
    pub coins: CoinCount,
    pub total_coins_earned: CoinCount,
    pub can_cash_out: bool,
    pub state: GameState,
}

impl GameView {
    pub fn from_game(game: &Game) -> Self {
        let board = game.board();
        let size = board.size();
        let (game_over, game_won) = (game.game_over(), game.game_won());

        let mut glyphs = Array2::from_elem((size, size).to_nd_index(), Glyph::Empty);
        let mut statuses = Array2::from_elem((size, size).to_nd_index(), TileStatus::Hidden);
        let mut interactive = Array2::from_elem((size, size).to_nd_index(), false);

        for (coords, tile) in board.iter() {
            let index = coords.to_nd_index();
            glyphs[index] = tile_display_content(tile, game_over);
            statuses[index] = TileStatus::of(tile, game_over, game_won);
            interactive[index] = accepts_input(tile, game_over);
        }

        Self {
            size,
            glyphs,
            statuses,
            interactive,
            mine_count: game.mine_count(),
            flag_count: game.flag_count(),
            coins: game.coins(),
            total_coins_earned: game.total_coins_earned(),
            can_cash_out: game.can_cash_out(),
            state: game.state(),
        }
    }

    pub fn glyph_at(&self, coords: Coord2) -> Option<Glyph> {
        self.glyphs.get(coords.to_nd_index()).copied()
    }
}
