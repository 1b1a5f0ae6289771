use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::*;

/// What a single reveal did to the round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResult {
    pub outcome: RevealOutcome,
    pub game_over: bool,
    pub game_won: bool,
    /// Coin collected from the clicked tile. Never set together with a loss.
    pub coins_earned: CoinCount,
}

impl RevealResult {
    const fn unchanged(game_over: bool) -> Self {
        Self {
            outcome: RevealOutcome::NoChange,
            game_over,
            game_won: false,
            coins_earned: 0,
        }
    }

    const fn lost() -> Self {
        Self {
            outcome: RevealOutcome::HitMine,
            game_over: true,
            game_won: false,
            coins_earned: 0,
        }
    }
}

pub fn can_reveal(board: &Board, coords: Coord2, game_over: bool) -> bool {
    !game_over
        && board
            .get(coords)
            .is_some_and(|tile| tile.is_unrevealed() && !tile.is_flagged())
}

/// Reveals the tile at `coords`.
///
/// Inputs that cannot be revealed (out of bounds, already shown, flagged, or
/// after the game ended) leave the board untouched. Hitting a mine exposes
/// every mine. A tile without adjacent mines opens its whole zero region and
/// the numbered ring around it. Only the clicked tile's coin is collected.
pub fn reveal(board: &mut Board, coords: Coord2, game_over: bool) -> RevealResult {
    if !can_reveal(board, coords, game_over) {
        log::trace!("Ignored reveal at {:?}", coords);
        return RevealResult::unchanged(game_over);
    }

    if board[coords].is_mine() {
        reveal_all_mines(board);
        log::info!("Mine hit at {:?}, game lost", coords);
        return RevealResult::lost();
    }

    board.reveal_tile(coords);
    let coins_earned = CoinCount::from(board.collect_coin(coords));

    if board[coords].adjacent_mines() == 0 {
        let opened = flood_fill(board, coords);
        log::debug!("Reveal at {:?} opened {} more tiles", coords, opened);
    } else {
        log::debug!("Reveal at {:?}", coords);
    }

    if board.revealed_count() == board.safe_tile_count() {
        log::info!("All {} safe tiles revealed, game won", board.safe_tile_count());
        RevealResult {
            outcome: RevealOutcome::Won,
            game_over: true,
            game_won: true,
            coins_earned,
        }
    } else {
        RevealResult {
            outcome: RevealOutcome::Revealed,
            game_over: false,
            game_won: false,
            coins_earned,
        }
    }
}

fn reveal_all_mines(board: &mut Board) {
    let mines: SmallVec<[Coord2; 16]> = board.mine_coords().collect();
    for coords in mines {
        board.reveal_tile(coords);
    }
}

/// Opens the region around a zero tile, returning how many tiles it revealed.
///
/// Flagged tiles are skipped and block the fill. Coins on opened tiles stay
/// where they are.
pub(crate) fn flood_fill(board: &mut Board, start: Coord2) -> CellCount {
    let mut opened = 0;
    let mut visited = HashSet::new();
    let mut to_visit: SmallVec<[Coord2; 16]> = smallvec![start];

    while let Some(visit_coords) = to_visit.pop() {
        if !visited.insert(visit_coords) {
            continue;
        }

        for pos in board.iter_neighbors(visit_coords) {
            let tile = board[pos];
            if tile.is_revealed() || tile.is_flagged() {
                continue;
            }

            board.reveal_tile(pos);
            opened += 1;

            if tile.adjacent_mines() == 0 && !visited.contains(&pos) {
                to_visit.push(pos);
            }
        }
    }

    opened
}
