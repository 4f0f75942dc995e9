// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands made of cards with the same rank.
use showdown_cards::{Card, Rank};

use super::sorted_by_rank;
use crate::hand::{HandRank, PokerHand};

/// The number of cards in a complete hand.
const HAND_SIZE: usize = 5;

/// Cards grouped by rank from the highest rank to the lowest.
struct RankGroups(Vec<Vec<Card>>);

impl RankGroups {
    fn new(cards: &[Card]) -> Self {
        let sorted = sorted_by_rank(cards);
        let groups = sorted
            .chunk_by(|a, b| a.rank() == b.rank())
            .map(<[Card]>::to_vec)
            .collect();
        Self(groups)
    }

    /// The groups with at least `size` cards, highest rank first.
    fn with_size(&self, size: usize) -> impl Iterator<Item = &[Card]> {
        self.0
            .iter()
            .filter(move |g| g.len() >= size)
            .map(Vec::as_slice)
    }

    /// The highest card of each rank not in `skip`, highest rank first.
    fn kickers<'a>(&'a self, skip: &'a [Rank]) -> impl Iterator<Item = Card> + 'a {
        self.0
            .iter()
            .map(|g| g[0])
            .filter(|c| !skip.contains(&c.rank()))
    }
}

pub(super) fn four_of_a_kind(cards: &[Card]) -> Option<PokerHand> {
    if cards.len() < 4 {
        return None;
    }

    let groups = RankGroups::new(cards);
    let quad = groups.with_size(4).next()?;

    let mut hand = quad[..4].to_vec();
    hand.extend(groups.kickers(&[quad[0].rank()]).take(1));
    Some(PokerHand::new(HandRank::FourOfAKind, hand))
}

pub(super) fn full_house(cards: &[Card]) -> Option<PokerHand> {
    if cards.len() < 5 {
        return None;
    }

    // The highest set, and the highest pair among the other groups that may
    // include a lower set.
    let groups = RankGroups::new(cards);
    let set = groups.with_size(3).next()?;
    let pair = groups
        .with_size(2)
        .find(|g| g[0].rank() != set[0].rank())?;

    let mut hand = set[..3].to_vec();
    hand.extend_from_slice(&pair[..2]);
    Some(PokerHand::new(HandRank::FullHouse, hand))
}

pub(super) fn three_of_a_kind(cards: &[Card]) -> Option<PokerHand> {
    if cards.len() < 3 {
        return None;
    }

    let groups = RankGroups::new(cards);
    let set = groups.with_size(3).next()?;

    let mut hand = set[..3].to_vec();
    hand.extend(groups.kickers(&[set[0].rank()]).take(HAND_SIZE - 3));
    Some(PokerHand::new(HandRank::ThreeOfAKind, hand))
}

/// Finds the `count` best pairs, used for one pair and two pair hands.
pub(super) fn pairs(cards: &[Card], count: usize, rank: HandRank) -> Option<PokerHand> {
    if cards.len() < 2 * count {
        return None;
    }

    let groups = RankGroups::new(cards);
    let pairs = groups.with_size(2).take(count).collect::<Vec<_>>();
    if pairs.len() < count {
        return None;
    }

    let paired = pairs.iter().map(|g| g[0].rank()).collect::<Vec<_>>();
    let mut hand = pairs
        .iter()
        .flat_map(|g| g[..2].iter().copied())
        .collect::<Vec<_>>();

    let kickers = HAND_SIZE.saturating_sub(hand.len());
    hand.extend(groups.kickers(&paired).take(kickers));
    Some(PokerHand::new(rank, hand))
}

pub(super) fn high_card(cards: &[Card]) -> PokerHand {
    let mut hand = sorted_by_rank(cards);
    hand.truncate(HAND_SIZE);
    PokerHand::new(HandRank::HighCard, hand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::parse_cards;

    #[test]
    fn rank_groups() {
        let cards = parse_cards("7h 9d 7c Ks 9h 7s 2c").unwrap();
        let groups = RankGroups::new(&cards);
        assert_eq!(groups.0.len(), 4);
        assert_eq!(groups.0[0], parse_cards("Ks").unwrap());
        assert_eq!(groups.0[1], parse_cards("9d 9h").unwrap());
        assert_eq!(groups.0[2], parse_cards("7h 7c 7s").unwrap());

        let sizes = groups.with_size(2).map(<[Card]>::len).collect::<Vec<_>>();
        assert_eq!(sizes, vec![2, 3]);

        let kickers = groups.kickers(&[Rank::Nine]).collect::<Vec<_>>();
        assert_eq!(kickers, parse_cards("Ks 7h 2c").unwrap());
    }

    #[test]
    fn short_hands() {
        let cards = parse_cards("Kc Kd").unwrap();
        let hand = pairs(&cards, 1, HandRank::OnePair).unwrap();
        assert_eq!(hand.cards().len(), 2);
        assert_eq!(pairs(&cards, 2, HandRank::TwoPair), None);

        let cards = parse_cards("Kc Kd Ks").unwrap();
        let hand = three_of_a_kind(&cards).unwrap();
        assert_eq!(hand.cards().len(), 3);
        assert_eq!(full_house(&cards), None);
        assert_eq!(four_of_a_kind(&cards), None);

        assert_eq!(high_card(&[]), PokerHand::empty());
    }
}
