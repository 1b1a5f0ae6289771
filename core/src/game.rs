use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// One round of play plus the coin bank.
///
/// The board is owned and only mutated through `&mut self`, so every event
/// runs to completion before the next one is applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "GameRepr")]
pub struct Game {
    board: Board,
    game_over: bool,
    game_won: bool,
    mine_count: CellCount,
    flag_count: CellCount,
    coins: CoinCount,
    total_coins_earned: CoinCount,
}

/// Wire form of a game. Mine and flag counts come from the board on load.
#[derive(Deserialize)]
struct GameRepr {
    board: Board,
    game_over: bool,
    game_won: bool,
    coins: CoinCount,
    total_coins_earned: CoinCount,
}

impl From<GameRepr> for Game {
    fn from(repr: GameRepr) -> Self {
        Self {
            mine_count: repr.board.mine_count(),
            flag_count: repr.board.flagged_count(),
            board: repr.board,
            game_over: repr.game_over || repr.game_won,
            game_won: repr.game_won,
            coins: repr.coins,
            total_coins_earned: repr.total_coins_earned,
        }
    }
}

impl Game {
    pub fn generate<S: CellSampler + ?Sized>(config: &GameConfig, sampler: &mut S) -> Result<Self> {
        Ok(Self::from_board(generate(config, sampler)?))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            mine_count: board.mine_count(),
            flag_count: board.flagged_count(),
            board,
            game_over: false,
            game_won: false,
            coins: 0,
            total_coins_earned: 0,
        }
    }

    /// Replaces the whole game with a freshly generated one, coins and bank
    /// included. On error the current game is left as it was.
    pub fn restart<S: CellSampler + ?Sized>(
        &mut self,
        config: &GameConfig,
        sampler: &mut S,
    ) -> Result<()> {
        let next = Self::generate(config, sampler)?;
        if self.coins > 0 || self.total_coins_earned > 0 {
            log::info!(
                "Restart discards {} uncashed and {} banked coins",
                self.coins,
                self.total_coins_earned
            );
        }
        *self = next;
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn game_won(&self) -> bool {
        self.game_won
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    pub fn coins(&self) -> CoinCount {
        self.coins
    }

    pub fn total_coins_earned(&self) -> CoinCount {
        self.total_coins_earned
    }

    pub fn can_cash_out(&self) -> bool {
        can_cash_out(self.coins, self.game_over)
    }

    pub fn state(&self) -> GameState {
        if self.game_won {
            GameState::Won
        } else if self.game_over {
            GameState::Lost
        } else {
            GameState::Playing
        }
    }

    pub fn tile_content(&self, coords: Coord2) -> Option<Glyph> {
        self.board
            .get(coords)
            .map(|tile| tile_display_content(tile, self.game_over))
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealResult {
        let result = reveal(&mut self.board, coords, self.game_over);
        if result.outcome.has_update() {
            self.game_over = result.game_over;
            self.game_won = result.game_won;
            self.coins = self.coins.saturating_add(result.coins_earned);
        }
        result
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagResult {
        let result = toggle_flag(&mut self.board, coords, self.game_over);
        self.flag_count = result.flag_count;
        result
    }

    /// Banks the live balance regardless of [`Game::can_cash_out`].
    pub fn cash_out(&mut self) -> EconomyResult {
        let result = cash_out(self.coins, self.total_coins_earned);
        if self.coins > 0 {
            log::info!(
                "Cashed out {} coins, {} banked in total",
                self.coins,
                result.total_earned
            );
        }
        self.coins = result.coins;
        self.total_coins_earned = result.total_earned;
        result
    }

    pub fn view(&self) -> GameView {
        GameView::from_game(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord, mines: &[Coord2], coins: &[Coord2]) -> Game {
        Game::from_board(Board::from_layout(size, mines, coins).unwrap())
    }

    #[test]
    fn new_game_starts_clean() {
        let game = Game::generate(&GameConfig::REFERENCE, &mut RandomSampler::new(3)).unwrap();

        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.mine_count(), 3);
        assert_eq!(game.flag_count(), 0);
        assert_eq!(game.coins(), 0);
        assert_eq!(game.total_coins_earned(), 0);
        assert!(!game.can_cash_out());
    }

    #[test]
    fn coins_accumulate_and_enable_cash_out() {
        let mut game = game(3, &[(0, 0)], &[(1, 1), (0, 2)]);

        assert_eq!(game.reveal((1, 1)).coins_earned, 1);
        assert!(game.can_cash_out());

        // (2, 0) floods the rest of the board, the coin at (0, 2) stays put
        let result = game.reveal((2, 0));
        assert_eq!(result.outcome, RevealOutcome::Won);
        assert_eq!(result.coins_earned, 0);
        assert!(game.board()[(0, 2)].has_coin());
        assert_eq!(game.coins(), 1);
        assert!(!game.can_cash_out());
    }

    #[test]
    fn cash_out_moves_coins_into_the_bank() {
        let mut game = game(3, &[(0, 0)], &[(1, 1)]);
        game.reveal((1, 1));

        let result = game.cash_out();

        assert_eq!(result.coins, 0);
        assert_eq!(result.total_earned, 1);
        assert!(!result.can_cash_out);
        assert_eq!(game.coins(), 0);
        assert_eq!(game.total_coins_earned(), 1);
        assert!(!game.can_cash_out());
    }

    #[test]
    fn mine_ends_round_and_blocks_cash_out() {
        let mut game = game(3, &[(0, 0)], &[(1, 1)]);
        game.reveal((1, 1));

        let result = game.reveal((0, 0));

        assert_eq!(result.outcome, RevealOutcome::HitMine);
        assert_eq!(game.state(), GameState::Lost);
        assert!(game.game_over());
        assert!(!game.game_won());
        assert_eq!(game.coins(), 1);
        assert!(!game.can_cash_out());
    }

    #[test]
    fn finished_game_ignores_moves() {
        let mut game = game(2, &[(0, 0)], &[]);
        game.reveal((0, 1));
        game.reveal((1, 0));
        assert_eq!(game.reveal((1, 1)).outcome, RevealOutcome::Won);
        let before = game.clone();

        assert_eq!(game.reveal((0, 0)).outcome, RevealOutcome::NoChange);
        assert_eq!(game.toggle_flag((0, 0)).outcome, MarkOutcome::NoChange);

        assert_eq!(game, before);
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn tile_content_follows_round_state() {
        let mut game = game(2, &[(0, 0)], &[(1, 1)]);

        assert_eq!(game.tile_content((0, 0)), Some(Glyph::Empty));
        assert_eq!(game.tile_content((4, 4)), None);

        game.reveal((1, 1));
        assert_eq!(game.tile_content((1, 1)), Some(Glyph::Number(1)));

        game.reveal((0, 0));
        assert_eq!(game.tile_content((0, 0)), Some(Glyph::Mine));
        assert_eq!(game.tile_content((0, 1)), Some(Glyph::Number(1)));
    }

    #[test]
    fn flag_count_follows_toggles() {
        let mut game = game(3, &[(0, 0)], &[]);

        game.toggle_flag((0, 0));
        game.toggle_flag((2, 2));
        assert_eq!(game.flag_count(), 2);
        game.toggle_flag((2, 2));
        assert_eq!(game.flag_count(), 1);
    }

    #[test]
    fn restart_replaces_the_whole_game() {
        let mut game = game(3, &[(0, 0)], &[(1, 1), (1, 0)]);
        game.reveal((1, 1));
        game.cash_out();
        game.reveal((1, 0));
        game.toggle_flag((2, 2));
        assert_eq!(game.coins(), 1);
        assert_eq!(game.total_coins_earned(), 1);

        let config = GameConfig::new(4, 2, 1).unwrap();
        game.restart(&config, &mut RandomSampler::new(9)).unwrap();

        assert_eq!(game.coins(), 0);
        assert_eq!(game.total_coins_earned(), 0);
        assert_eq!(game.flag_count(), 0);
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.board().size(), 4);
        assert_eq!(game.mine_count(), 2);
        assert_eq!(
            game,
            Game::generate(&config, &mut RandomSampler::new(9)).unwrap()
        );
    }

    #[test]
    fn loading_recounts_and_keeps_balances() {
        let mut game = game(3, &[(0, 0)], &[(1, 1)]);
        game.reveal((1, 1));
        game.toggle_flag((0, 0));

        let mut value = serde_json::to_value(&game).unwrap();
        value["flag_count"] = serde_json::json!(0);
        value["mine_count"] = serde_json::json!(7);
        value["board"]["flagged_count"] = serde_json::json!(0);
        let mut loaded: Game = serde_json::from_value(value).unwrap();

        assert_eq!(loaded, game);
        assert_eq!(loaded.toggle_flag((0, 0)).flag_count, 0);
        assert_eq!(loaded.coins(), 1);
    }

    #[test]
    fn failed_restart_keeps_current_round() {
        let mut game = game(3, &[(0, 0)], &[]);
        game.reveal((1, 1));
        let before = game.clone();

        let result = game.restart(&GameConfig::new_unchecked(0, 0, 0), &mut RandomSampler::new(0));

        assert_eq!(result, Err(GameError::InvalidSize));
        assert_eq!(game, before);
    }

    #[test]
    fn reference_round_is_won_by_revealing_every_safe_tile() {
        for seed in 0..32 {
            let mut game =
                Game::generate(&GameConfig::REFERENCE, &mut RandomSampler::new(seed)).unwrap();
            let safe: alloc::vec::Vec<_> = game
                .board()
                .iter()
                .filter(|(_, tile)| !tile.is_mine())
                .map(|(coords, _)| coords)
                .collect();
            assert_eq!(safe.len(), 6);

            // reverse order exercises flood fills reaching tiles before their click
            let mut clicked_coins = 0;
            for &coords in safe.iter().rev() {
                let tile = game.board()[coords];
                if tile.is_unrevealed() && tile.has_coin() {
                    clicked_coins += 1;
                }
                let result = game.reveal(coords);
                assert_ne!(result.outcome, RevealOutcome::HitMine);
            }

            assert_eq!(game.state(), GameState::Won);
            assert_eq!(game.coins(), clicked_coins);
            assert_eq!(
                game.board().coin_count(),
                GameConfig::REFERENCE.coins - clicked_coins as CellCount
            );
        }
    }

    #[test]
    fn reference_round_is_lost_on_any_mine() {
        for seed in 0..32 {
            let mut game =
                Game::generate(&GameConfig::REFERENCE, &mut RandomSampler::new(seed)).unwrap();
            let mine = game
                .board()
                .iter()
                .find(|(_, tile)| tile.is_mine())
                .map(|(coords, _)| coords)
                .unwrap();

            game.reveal(mine);

            assert_eq!(game.state(), GameState::Lost);
            assert_eq!(game.board().revealed_count(), 3);
        }
    }
}
