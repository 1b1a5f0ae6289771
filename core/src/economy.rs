use serde::{Deserialize, Serialize};

use crate::*;

/// Balances after a cash out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyResult {
    pub coins: CoinCount,
    pub total_earned: CoinCount,
    pub can_cash_out: bool,
}

/// Whether the live balance may be banked: there is something to bank and
/// the round is still running.
pub const fn can_cash_out(coins: CoinCount, game_over: bool) -> bool {
    coins > 0 && !game_over
}

/// Moves the live balance into the cumulative total.
///
/// Always succeeds, even when [`can_cash_out`] says otherwise; offering the
/// action is up to the caller.
pub const fn cash_out(coins: CoinCount, total_earned: CoinCount) -> EconomyResult {
    EconomyResult {
        coins: 0,
        total_earned: total_earned.saturating_add(coins),
        can_cash_out: false,
    }
}
