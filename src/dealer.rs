//! Sources of card deals for training.
//!
//! [`ShuffleDealer`] shuffles the three-card deck with a seeded RNG.
//! [`ReplayDealer`] serves a fixed sequence of deals, either built in memory
//! or read from a text file with one shuffle per line (e.g. `213`).

use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::cards::{Deal, Rank, ALL_RANKS};
use crate::error::{KuhnError, KuhnResult};

pub trait Dealer {
    /// The next hand's cards. Running out of deals or reading a bad one is
    /// an error; training must stop rather than continue without a deal.
    fn next_deal(&mut self) -> KuhnResult<Deal>;
}

impl<D: Dealer + ?Sized> Dealer for Box<D> {
    fn next_deal(&mut self) -> KuhnResult<Deal> {
        (**self).next_deal()
    }
}

/// Fisher-Yates shuffle of the deck before every hand.
pub struct ShuffleDealer {
    rng: StdRng,
    deck: [Rank; 3],
}

impl ShuffleDealer {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        ShuffleDealer {
            rng,
            deck: ALL_RANKS,
        }
    }

    /// Shuffle and return the whole deck, including the unused third card.
    pub fn shuffle(&mut self) -> [Rank; 3] {
        self.deck.shuffle(&mut self.rng);
        self.deck
    }
}

impl Dealer for ShuffleDealer {
    fn next_deal(&mut self) -> KuhnResult<Deal> {
        let deck = self.shuffle();
        Deal::from_shuffle(&deck)
    }
}

/// Serves a fixed list of deals in order, then reports exhaustion.
#[derive(Debug, Clone)]
pub struct ReplayDealer {
    deals: Vec<Deal>,
    cursor: usize,
}

impl ReplayDealer {
    pub fn new(deals: Vec<Deal>) -> Self {
        ReplayDealer { deals, cursor: 0 }
    }

    /// Parse one shuffle per line. Each line holds the three ranks as
    /// distinct digits; blank lines are skipped.
    pub fn parse(text: &str) -> KuhnResult<Self> {
        let mut deals = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            deals.push(parse_shuffle(line, idx + 1)?);
        }
        Ok(Self::new(deals))
    }

    pub fn from_file(path: impl AsRef<Path>) -> KuhnResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn remaining(&self) -> usize {
        self.deals.len() - self.cursor
    }
}

impl Dealer for ReplayDealer {
    fn next_deal(&mut self) -> KuhnResult<Deal> {
        let deal = self
            .deals
            .get(self.cursor)
            .copied()
            .ok_or(KuhnError::DealerExhausted {
                served: self.cursor,
            })?;
        self.cursor += 1;
        Ok(deal)
    }
}

fn parse_shuffle(line: &str, line_no: usize) -> KuhnResult<Deal> {
    let malformed = |reason: String| KuhnError::MalformedDeal {
        line: line_no,
        reason,
    };

    let chars: Vec<char> = line.chars().collect();
    if chars.len() != 3 {
        return Err(malformed(format!("expected 3 ranks, got {:?}", line)));
    }

    let mut deck = [Rank::One; 3];
    for (slot, &c) in deck.iter_mut().zip(&chars) {
        *slot = Rank::from_char(c).map_err(|e| malformed(e.to_string()))?;
    }
    if deck[0] == deck[2] || deck[1] == deck[2] {
        return Err(malformed(format!("{:?} is not a permutation of 123", line)));
    }
    Deal::from_shuffle(&deck).map_err(|e| malformed(e.to_string()))
}

/// Render shuffles in the format [`ReplayDealer::parse`] reads.
pub fn format_shuffles(dealer: &mut ShuffleDealer, count: usize) -> String {
    let mut out = String::with_capacity(count * 4);
    for _ in 0..count {
        for rank in dealer.shuffle() {
            out.push(rank.to_char());
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_dealer_deals_distinct_cards() {
        let mut dealer = ShuffleDealer::new(7);
        for _ in 0..200 {
            let deal = dealer.next_deal().unwrap();
            assert_ne!(deal.card(0), deal.card(1));
        }
    }

    #[test]
    fn shuffle_dealer_is_reproducible() {
        let mut a = ShuffleDealer::new(42);
        let mut b = ShuffleDealer::new(42);
        for _ in 0..50 {
            assert_eq!(a.next_deal().unwrap(), b.next_deal().unwrap());
        }
    }

    #[test]
    fn shuffle_dealer_covers_all_deals() {
        let mut dealer = ShuffleDealer::new(1);
        let seen: std::collections::HashSet<Deal> =
            (0..300).map(|_| dealer.next_deal().unwrap()).collect();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn replay_serves_in_order_then_exhausts() {
        let deals = vec![
            Deal::from_values(1, 2).unwrap(),
            Deal::from_values(3, 1).unwrap(),
        ];
        let mut dealer = ReplayDealer::new(deals.clone());
        assert_eq!(dealer.remaining(), 2);
        assert_eq!(dealer.next_deal().unwrap(), deals[0]);
        assert_eq!(dealer.next_deal().unwrap(), deals[1]);
        assert!(matches!(
            dealer.next_deal(),
            Err(KuhnError::DealerExhausted { served: 2 })
        ));
    }

    #[test]
    fn parse_reads_first_two_ranks() {
        let mut dealer = ReplayDealer::parse("213\n\n321\n").unwrap();
        assert_eq!(dealer.remaining(), 2);
        assert_eq!(dealer.next_deal().unwrap(), Deal::from_values(2, 1).unwrap());
        assert_eq!(dealer.next_deal().unwrap(), Deal::from_values(3, 2).unwrap());
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        for (text, line) in [("123\n12\n", 2), ("1a3", 1), ("113", 1), ("121", 1), ("124", 1)] {
            match ReplayDealer::parse(text) {
                Err(KuhnError::MalformedDeal { line: l, .. }) => assert_eq!(l, line, "{text:?}"),
                other => panic!("expected malformed deal for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn formatted_shuffles_parse_back() {
        let text = format_shuffles(&mut ShuffleDealer::new(9), 25);
        let mut replay = ReplayDealer::parse(&text).unwrap();
        let mut fresh = ShuffleDealer::new(9);
        for _ in 0..25 {
            assert_eq!(replay.next_deal().unwrap(), fresh.next_deal().unwrap());
        }
    }
}
