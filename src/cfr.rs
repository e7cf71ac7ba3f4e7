//! Core CFR bookkeeping: per-information-set regret and strategy sums.
//!
//! Each information set tracks cumulative regret per action and cumulative
//! strategy weights. Regret matching turns the regret into the strategy
//! played on the next visit; the average of those strategies converges to a
//! Nash equilibrium.

use std::collections::HashMap;

use itertools::Itertools;

use crate::evaluate::StrategyProfile;
use crate::game::{InfoSetKey, NUM_ACTIONS};

/// A probability vector over `[Pass, Bet]`.
pub type Strategy = [f64; NUM_ACTIONS];

/// Number of distinct information sets in Kuhn poker: 3 cards times the
/// four decision histories ("" and "PB" for player 0, "P" and "B" for
/// player 1).
pub const KUHN_INFO_SETS: usize = 12;

const UNIFORM: Strategy = [1.0 / NUM_ACTIONS as f64; NUM_ACTIONS];

/// One information set's accumulated data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoSetData {
    /// Cumulative counterfactual regret for each action.
    pub regret_sum: [f64; NUM_ACTIONS],
    /// Cumulative reach-weighted strategy for each action.
    pub strategy_sum: [f64; NUM_ACTIONS],
}

impl InfoSetData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current strategy via regret matching: proportional to positive regrets,
    /// uniform if no action has positive regret yet.
    ///
    /// Every call also adds `realization_weight * strategy` into
    /// `strategy_sum`; nothing else writes to it.
    pub fn current_strategy(&mut self, realization_weight: f64) -> Strategy {
        let positive = self.regret_sum.map(|r| r.max(0.0));
        let norm: f64 = positive.iter().sum();

        let strategy = if norm > 0.0 {
            positive.map(|r| r / norm)
        } else {
            UNIFORM
        };

        for (sum, &p) in self.strategy_sum.iter_mut().zip(&strategy) {
            *sum += realization_weight * p;
        }
        strategy
    }

    /// Average strategy over all visits. This is the equilibrium
    /// approximation reported after training.
    pub fn average_strategy(&self) -> Strategy {
        let total: f64 = self.strategy_sum.iter().sum();
        if total > 0.0 {
            self.strategy_sum.map(|s| s / total)
        } else {
            UNIFORM
        }
    }

    /// Add `weight * (utils[a] - node_value)` to each action's regret.
    pub fn accumulate_regret(&mut self, utils: &Strategy, node_value: f64, weight: f64) {
        for (regret, &util) in self.regret_sum.iter_mut().zip(utils) {
            *regret += weight * (util - node_value);
        }
    }
}

/// All information sets seen so far. Entries are created on first visit
/// and live for the whole training run.
#[derive(Debug, Clone, Default)]
pub struct InfoSetTable {
    info_sets: HashMap<InfoSetKey, InfoSetData>,
}

impl InfoSetTable {
    pub fn new() -> Self {
        InfoSetTable {
            info_sets: HashMap::with_capacity(KUHN_INFO_SETS),
        }
    }

    /// Get or create an information set entry.
    pub fn get_or_create(&mut self, key: InfoSetKey) -> &mut InfoSetData {
        self.info_sets.entry(key).or_default()
    }

    pub fn get(&self, key: &InfoSetKey) -> Option<&InfoSetData> {
        self.info_sets.get(key)
    }

    pub fn len(&self) -> usize {
        self.info_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.info_sets.is_empty()
    }

    /// Entries in key order, independent of the order they were created in.
    pub fn sorted(&self) -> impl Iterator<Item = (&InfoSetKey, &InfoSetData)> {
        self.info_sets.iter().sorted_by_key(|(key, _)| **key)
    }

    /// The average strategy at every information set.
    pub fn average_profile(&self) -> StrategyProfile {
        self.info_sets
            .iter()
            .map(|(key, data)| (*key, data.average_strategy()))
            .collect()
    }
}
