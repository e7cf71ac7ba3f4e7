//! Vanilla CFR traversal of one Kuhn poker hand.

use crate::cards::Deal;
use crate::cfr::{InfoSetTable, Strategy};
use crate::game::{History, InfoSetKey, ALL_ACTIONS, NUM_ACTIONS};

/// Walk every branch below `history` for a fixed `deal`, updating regrets
/// and strategy sums on the way back up.
///
/// `p0` and `p1` are the reach probabilities each player contributes along
/// the path to `history`. Returns the value of `history` for the player
/// acting there.
pub fn walk(table: &mut InfoSetTable, deal: &Deal, history: History, p0: f64, p1: f64) -> f64 {
    if let Some(payoff) = history.terminal_payoff(deal) {
        return payoff;
    }

    let acting = history.acting_player();
    let (own_reach, opponent_reach) = if acting == 0 { (p0, p1) } else { (p1, p0) };

    let key = InfoSetKey::for_deal(deal, history);
    let strategy = table.get_or_create(key).current_strategy(own_reach);

    let mut util: Strategy = [0.0; NUM_ACTIONS];
    let mut node_value = 0.0;
    for action in ALL_ACTIONS {
        let a = action.index();
        let next = history.with(action);
        // Only the acting player's reach is scaled by the action probability.
        util[a] = if acting == 0 {
            -walk(table, deal, next, p0 * strategy[a], p1)
        } else {
            -walk(table, deal, next, p0, p1 * strategy[a])
        };
        node_value += strategy[a] * util[a];
    }

    // Children borrow the table mutably, so look the node up again.
    table
        .get_or_create(key)
        .accumulate_regret(&util, node_value, opponent_reach);

    node_value
}
