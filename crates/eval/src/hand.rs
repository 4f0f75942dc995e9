// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands and the hands comparator.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::{Card, Rank};

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns all hand ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{rank}")
    }
}

/// The outcome of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// This hand beats the other.
    Higher,
    /// This hand loses against the other.
    Lower,
    /// The hands split the pot.
    Identical,
}

impl Comparison {
    /// The comparison seen from the other hand.
    pub fn reverse(self) -> Comparison {
        match self {
            Comparison::Higher => Comparison::Lower,
            Comparison::Lower => Comparison::Higher,
            Comparison::Identical => Comparison::Identical,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Comparison::Higher,
            Ordering::Less => Comparison::Lower,
            Ordering::Equal => Comparison::Identical,
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(cmp: Comparison) -> Self {
        match cmp {
            Comparison::Higher => Ordering::Greater,
            Comparison::Lower => Ordering::Less,
            Comparison::Identical => Ordering::Equal,
        }
    }
}

/// The best hand found in a set of cards.
///
/// The cards are the hand representative cards, their number and order depend
/// on the hand rank:
///
/// ```text
///   HighCard, Flush          up to 5 cards from the highest rank
///   OnePair                  pair, pair, kickers
///   TwoPair                  high pair, low pair, kicker
///   ThreeOfAKind             set, set, set, kickers
///   Straight, *Flush         top card of the run down to the bottom card
///   FullHouse                set, set, set, pair, pair
///   FourOfAKind              quad, quad, quad, quad, kicker
/// ```
///
/// An ace that completes a wheel straight (5-4-3-2-A) is the last card and has
/// rank [Rank::Ace].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokerHand {
    rank: HandRank,
    cards: Vec<Card>,
}

impl PokerHand {
    /// Creates a hand with the given rank and representative cards.
    pub fn new(rank: HandRank, cards: Vec<Card>) -> Self {
        Self { rank, cards }
    }

    /// A high card hand without cards, the best hand of no cards.
    pub fn empty() -> Self {
        Self::new(HandRank::HighCard, Vec::new())
    }

    /// The hand rank.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand representative cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Compares this hand against another hand.
    ///
    /// Hands with different ranks compare by rank, hands with the same rank
    /// compare the cards ranks at the positions that break ties for that rank.
    pub fn compare(&self, other: &PokerHand) -> Comparison {
        if self.rank != other.rank {
            return self.rank.cmp(&other.rank).into();
        }

        match self.rank {
            HandRank::HighCard | HandRank::Flush => {
                let len = self.cards.len().max(other.cards.len());
                self.compare_at(other, 0..len)
            }
            HandRank::OnePair => self.compare_at(other, [0, 2, 3, 4]),
            HandRank::TwoPair | HandRank::FourOfAKind => self.compare_at(other, [0, 2, 4]),
            HandRank::ThreeOfAKind => self.compare_at(other, [0, 3, 4]),
            HandRank::FullHouse => self.compare_at(other, [0, 3]),
            HandRank::Straight | HandRank::StraightFlush | HandRank::RoyalFlush => {
                self.compare_at(other, [0])
            }
        }
    }

    /// Compares the cards ranks at the given positions, the first difference
    /// decides. A missing card is lower than any card.
    fn compare_at<I>(&self, other: &PokerHand, positions: I) -> Comparison
    where
        I: IntoIterator<Item = usize>,
    {
        let rank_at = |hand: &PokerHand, pos: usize| -> Option<Rank> {
            hand.cards.get(pos).map(Card::rank)
        };

        positions
            .into_iter()
            .map(|pos| rank_at(self, pos).cmp(&rank_at(other, pos)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
            .into()
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.rank)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}
