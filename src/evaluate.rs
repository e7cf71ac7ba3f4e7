//! Exact evaluation of Kuhn poker strategy profiles.
//!
//! The game is small enough to evaluate by brute force: every deal is
//! enumerated, and best responses are found by trying each of the 2^6 pure
//! strategies a player has.

use std::collections::HashMap;

use crate::cards::{Deal, ALL_RANKS};
use crate::cfr::Strategy;
use crate::error::{KuhnError, KuhnResult};
use crate::game::{parse_history, History, InfoSetKey, ALL_ACTIONS};

/// Histories at which each player decides.
const DECISION_HISTORIES: [[&str; 2]; 2] = [["", "PB"], ["P", "B"]];

/// A strategy for every information set. Keys that are missing play uniformly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategyProfile {
    strategies: HashMap<InfoSetKey, Strategy>,
}

impl StrategyProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a profile from labels such as `("3PB", [0.0, 1.0])`.
    pub fn from_labels(entries: &[(&str, Strategy)]) -> KuhnResult<Self> {
        let mut profile = StrategyProfile::new();
        for (label, strategy) in entries {
            profile.set(label.parse()?, *strategy);
        }
        Ok(profile)
    }

    pub fn get(&self, key: &InfoSetKey) -> Strategy {
        self.strategies.get(key).copied().unwrap_or([0.5, 0.5])
    }

    pub fn set(&mut self, key: InfoSetKey, strategy: Strategy) {
        self.strategies.insert(key, strategy);
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl FromIterator<(InfoSetKey, Strategy)> for StrategyProfile {
    fn from_iter<I: IntoIterator<Item = (InfoSetKey, Strategy)>>(iter: I) -> Self {
        StrategyProfile {
            strategies: iter.into_iter().collect(),
        }
    }
}

/// The six information sets at which `player` acts.
pub fn decision_keys(player: usize) -> Vec<InfoSetKey> {
    let mut keys = Vec::with_capacity(6);
    for &rank in &ALL_RANKS {
        for label in DECISION_HISTORIES[player] {
            let history = parse_history(label).unwrap_or_default();
            keys.push(InfoSetKey::new(rank, history));
        }
    }
    keys
}

/// Every information set of the game, in key order.
pub fn all_info_set_keys() -> Vec<InfoSetKey> {
    let mut keys: Vec<InfoSetKey> = decision_keys(0).into_iter().chain(decision_keys(1)).collect();
    keys.sort();
    keys
}

/// Value of `history` for the player acting there, with both players
/// following `profile`.
fn history_value(profile: &StrategyProfile, deal: &Deal, history: History) -> f64 {
    if let Some(payoff) = history.terminal_payoff(deal) {
        return payoff;
    }
    let strategy = profile.get(&InfoSetKey::for_deal(deal, history));
    ALL_ACTIONS
        .iter()
        .map(|&action| strategy[action.index()] * -history_value(profile, deal, history.with(action)))
        .sum()
}

/// Expected value for player 0 over all six equally likely deals.
pub fn expected_value(profile: &StrategyProfile) -> f64 {
    let deals = Deal::all();
    let total: f64 = deals
        .iter()
        .map(|deal| history_value(profile, deal, History::new()))
        .sum();
    total / deals.len() as f64
}

/// The most `player` can win against the other player's part of `profile`.
pub fn best_response_value(profile: &StrategyProfile, player: usize) -> f64 {
    let keys = decision_keys(player);
    let mut best = f64::NEG_INFINITY;
    let mut candidate = profile.clone();

    for mask in 0u32..(1 << keys.len()) {
        for (bit, key) in keys.iter().enumerate() {
            let pure = if mask & (1 << bit) == 0 { [1.0, 0.0] } else { [0.0, 1.0] };
            candidate.set(*key, pure);
        }
        let ev = expected_value(&candidate);
        let value = if player == 0 { ev } else { -ev };
        best = best.max(value);
    }
    best
}

/// Average amount a best-responding opponent gains over the game value.
/// Zero exactly at a Nash equilibrium.
pub fn exploitability(profile: &StrategyProfile) -> f64 {
    (best_response_value(profile, 0) + best_response_value(profile, 1)) / 2.0
}

/// Value of Kuhn poker for player 0 under optimal play.
pub const GAME_VALUE: f64 = -1.0 / 18.0;

/// The analytic equilibrium family, parameterized by how often player 0
/// bets the lowest card (`alpha` in `[0, 1/3]`).
pub fn equilibrium_profile(alpha: f64) -> KuhnResult<StrategyProfile> {
    if !(0.0..=1.0 / 3.0).contains(&alpha) {
        return Err(KuhnError::AlphaOutOfRange(alpha));
    }
    let third = 1.0 / 3.0;
    StrategyProfile::from_labels(&[
        // Player 0
        ("1", [1.0 - alpha, alpha]),
        ("1PB", [1.0, 0.0]),
        ("2", [1.0, 0.0]),
        ("2PB", [1.0 - (alpha + third), alpha + third]),
        ("3", [1.0 - 3.0 * alpha, 3.0 * alpha]),
        ("3PB", [0.0, 1.0]),
        // Player 1
        ("1P", [1.0 - third, third]),
        ("1B", [1.0, 0.0]),
        ("2P", [1.0, 0.0]),
        ("2B", [1.0 - third, third]),
        ("3P", [0.0, 1.0]),
        ("3B", [0.0, 1.0]),
    ])
}
