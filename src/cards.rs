use std::fmt;

use crate::error::{KuhnError, KuhnResult};

/// A Kuhn poker card. Only the rank matters; the deck holds one card of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Rank {
    pub fn from_value(v: u8) -> KuhnResult<Rank> {
        match v {
            1 => Ok(Rank::One),
            2 => Ok(Rank::Two),
            3 => Ok(Rank::Three),
            _ => Err(KuhnError::InvalidRank(v)),
        }
    }

    pub fn from_char(c: char) -> KuhnResult<Rank> {
        match c {
            '1' => Ok(Rank::One),
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            _ => Err(KuhnError::InvalidRankChar(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::One => '1',
            Rank::Two => '2',
            Rank::Three => '3',
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

pub const ALL_RANKS: [Rank; 3] = [Rank::One, Rank::Two, Rank::Three];

/// One hand's private cards: `cards[p]` belongs to player `p`.
///
/// The third card of the deck is dealt face down and never looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deal {
    cards: [Rank; 2],
}

impl Deal {
    pub fn new(p0: Rank, p1: Rank) -> KuhnResult<Deal> {
        if p0 == p1 {
            return Err(KuhnError::DuplicateRank(p0.value()));
        }
        Ok(Deal { cards: [p0, p1] })
    }

    /// Build a deal from raw rank values, rejecting anything outside the deck.
    pub fn from_values(p0: u8, p1: u8) -> KuhnResult<Deal> {
        Deal::new(Rank::from_value(p0)?, Rank::from_value(p1)?)
    }

    /// Take the first two cards of a shuffled deck.
    pub fn from_shuffle(deck: &[Rank; 3]) -> KuhnResult<Deal> {
        Deal::new(deck[0], deck[1])
    }

    pub fn card(&self, player: usize) -> Rank {
        self.cards[player]
    }

    pub fn cards(&self) -> [Rank; 2] {
        self.cards
    }

    /// All six equally likely deals, in player-0-major order.
    pub fn all() -> Vec<Deal> {
        let mut deals = Vec::with_capacity(6);
        for &p0 in &ALL_RANKS {
            for &p1 in &ALL_RANKS {
                if p0 != p1 {
                    deals.push(Deal { cards: [p0, p1] });
                }
            }
        }
        deals
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.cards[0], self.cards[1])
    }
}
