use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagResult {
    pub outcome: MarkOutcome,
    /// Flags on the whole board after the toggle.
    pub flag_count: CellCount,
}

pub fn can_flag(board: &Board, coords: Coord2, game_over: bool) -> bool {
    !game_over && board.get(coords).is_some_and(Tile::is_unrevealed)
}

/// Flips the flag on a hidden tile. The flag count is not capped by the mine
/// count.
pub fn toggle_flag(board: &mut Board, coords: Coord2, game_over: bool) -> FlagResult {
    if !can_flag(board, coords, game_over) {
        log::trace!("Ignored flag toggle at {:?}", coords);
        return FlagResult {
            outcome: MarkOutcome::NoChange,
            flag_count: board.flagged_count(),
        };
    }

    board.toggle_flag(coords);
    log::debug!(
        "Flag at {:?} {}",
        coords,
        if board[coords].is_flagged() { "placed" } else { "removed" }
    );

    FlagResult {
        outcome: MarkOutcome::Changed,
        flag_count: board.flagged_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(size: Coord, mines: &[Coord2]) -> Board {
        Board::from_layout(size, mines, &[]).unwrap()
    }

    #[test]
    fn toggle_places_and_removes_flag() {
        let mut board = layout(3, &[(0, 0)]);

        let placed = toggle_flag(&mut board, (0, 0), false);
        assert_eq!(placed.outcome, MarkOutcome::Changed);
        assert_eq!(placed.flag_count, 1);
        assert!(board[(0, 0)].is_flagged());

        let removed = toggle_flag(&mut board, (0, 0), false);
        assert_eq!(removed.outcome, MarkOutcome::Changed);
        assert_eq!(removed.flag_count, 0);
        assert!(!board[(0, 0)].is_flagged());
    }

    #[test]
    fn double_toggle_restores_board() {
        let mut board = layout(3, &[(1, 1)]);
        toggle_flag(&mut board, (2, 0), false);
        let before = board.clone();

        toggle_flag(&mut board, (0, 2), false);
        let result = toggle_flag(&mut board, (0, 2), false);

        assert_eq!(result.flag_count, 1);
        assert_eq!(board, before);
    }

    #[test]
    fn revealed_tiles_and_finished_games_ignore_flags() {
        let mut board = layout(3, &[(0, 0)]);
        toggle_flag(&mut board, (2, 2), false);
        reveal(&mut board, (1, 1), false);

        let on_revealed = toggle_flag(&mut board, (1, 1), false);
        let after_game = toggle_flag(&mut board, (0, 1), true);
        let out_of_range = toggle_flag(&mut board, (5, 1), false);

        for result in [on_revealed, after_game, out_of_range] {
            assert_eq!(
                result,
                FlagResult {
                    outcome: MarkOutcome::NoChange,
                    flag_count: 1,
                }
            );
        }
        assert!(!board[(1, 1)].is_flagged());
        assert!(!board[(0, 1)].is_flagged());
    }

    #[test]
    fn flags_may_outnumber_mines() {
        let mut board = layout(2, &[(0, 0)]);

        for coords in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            toggle_flag(&mut board, coords, false);
        }

        assert_eq!(board.flagged_count(), 4);
        assert!(can_flag(&board, (0, 0), false));
        assert!(!can_flag(&board, (0, 0), true));
    }
}
