//! Kuhn poker betting rules: actions, histories and information-set keys.
//!
//! Each player antes 1. Player 0 passes or bets 1; player 1 answers. A pass
//! after a bet is a fold, a bet after a bet is a call. The longest hand is
//! pass, bet, pass/bet (three plies).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::cards::{Deal, Rank};
use crate::error::KuhnError;

/// Actions available at every decision point.
pub const NUM_ACTIONS: usize = 2;

/// Longest possible betting sequence.
pub const MAX_PLIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Pass = 0,
    Bet = 1,
}

pub const ALL_ACTIONS: [Action; NUM_ACTIONS] = [Action::Pass, Action::Bet];

impl Action {
    /// Position of this action in a strategy vector.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        match self {
            Action::Pass => 'P',
            Action::Bet => 'B',
        }
    }

    pub fn from_symbol(c: char) -> Option<Action> {
        match c {
            'P' => Some(Action::Pass),
            'B' => Some(Action::Bet),
            _ => None,
        }
    }
}

/// The public betting sequence so far, stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct History {
    actions: [Action; MAX_PLIES],
    len: u8,
}

impl Default for History {
    fn default() -> Self {
        History::new()
    }
}

impl History {
    pub const fn new() -> History {
        History {
            actions: [Action::Pass; MAX_PLIES],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions[..self.len()]
    }

    /// The history extended by one action.
    pub fn with(&self, action: Action) -> History {
        debug_assert!(self.len() < MAX_PLIES, "history {} is already complete", self);
        let mut next = *self;
        next.actions[self.len()] = action;
        next.len += 1;
        next
    }

    /// Player to act: even plies belong to player 0, odd plies to player 1.
    pub fn acting_player(&self) -> usize {
        self.len() % 2
    }

    /// Payoff for the player who would act at this history, or `None` while
    /// the hand is still running.
    pub fn terminal_payoff(&self, deal: &Deal) -> Option<f64> {
        let plies = self.len();
        if plies <= 1 {
            return None;
        }

        let acting = plies % 2;
        let other = 1 - acting;
        let acting_wins = deal.card(acting) > deal.card(other);
        let actions = self.actions();

        match (actions[plies - 2], actions[plies - 1]) {
            (_, Action::Pass) if plies == 2 && actions[0] == Action::Pass => {
                Some(if acting_wins { 1.0 } else { -1.0 })
            }
            // The opponent folded to a bet.
            (_, Action::Pass) => Some(1.0),
            (Action::Bet, Action::Bet) => Some(if acting_wins { 2.0 } else { -2.0 }),
            _ => None,
        }
    }

    /// Rendered action symbols; ordering on these matches the string labels.
    fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.actions().iter().map(|a| a.symbol())
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.symbols() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl PartialOrd for History {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for History {
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbols().cmp(other.symbols())
    }
}

/// What the acting player knows: their own card and the public history.
///
/// The opponent's card is hidden and never part of the key, so every deal
/// that agrees on (own card, history) lands on the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InfoSetKey {
    pub card: Rank,
    pub history: History,
}

impl InfoSetKey {
    pub fn new(card: Rank, history: History) -> InfoSetKey {
        InfoSetKey { card, history }
    }

    /// Key of the player to act at `history` under `deal`.
    pub fn for_deal(deal: &Deal, history: History) -> InfoSetKey {
        InfoSetKey::new(deal.card(history.acting_player()), history)
    }

    pub fn acting_player(&self) -> usize {
        self.history.acting_player()
    }
}

impl fmt::Display for InfoSetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.card, self.history)
    }
}

impl FromStr for InfoSetKey {
    type Err = KuhnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || KuhnError::InvalidInfoSet(s.to_string());
        let mut chars = s.trim().chars();
        let card = chars.next().ok_or_else(invalid)?;
        let card = Rank::from_char(card).map_err(|_| invalid())?;
        let history = parse_history(chars.as_str()).ok_or_else(invalid)?;
        Ok(InfoSetKey::new(card, history))
    }
}

impl Serialize for InfoSetKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a history such as `"PB"`.
pub fn parse_history(s: &str) -> Option<History> {
    let mut history = History::new();
    for c in s.chars() {
        if history.len() == MAX_PLIES {
            return None;
        }
        history = history.with(Action::from_symbol(c)?);
    }
    Some(history)
}
