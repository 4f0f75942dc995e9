// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands pattern evaluators.
//!
//! There is an [Evaluator] for each hand rank, each evaluator checks if a set of
//! cards contains its pattern and returns the representative cards for the
//! pattern as a [PokerHand]. Evaluators don't look for better hands, a set of
//! cards with a full house also matches the three of a kind and pair patterns,
//! use a [Registry](crate::Registry) to get the best hand.
use showdown_cards::{Card, Rank};

use crate::hand::{HandRank, PokerHand};

mod groups;
mod straight;

/// A hand pattern evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evaluator {
    /// Five suited cards in sequence, if `royal` only matches an ace high
    /// sequence and the hand rank is [HandRank::RoyalFlush].
    StraightFlush {
        /// Match royal flushes only.
        royal: bool,
    },
    /// Four cards with the same rank and a kicker.
    FourOfAKind,
    /// A set and a pair.
    FullHouse,
    /// Five suited cards.
    Flush,
    /// Five cards in sequence.
    Straight,
    /// Three cards with the same rank and two kickers.
    ThreeOfAKind,
    /// Two pairs and a kicker.
    TwoPair,
    /// A pair and three kickers.
    OnePair,
    /// The five highest cards.
    HighCard,
}

impl Evaluator {
    /// Returns the standard evaluators from the strongest to the weakest.
    pub fn standard() -> impl DoubleEndedIterator<Item = Evaluator> {
        HandRank::ranks().rev().map(Evaluator::from)
    }

    /// The smallest number of cards that could match this pattern.
    pub fn minimal_card_count(&self) -> usize {
        match self {
            Evaluator::StraightFlush { .. }
            | Evaluator::FullHouse
            | Evaluator::Flush
            | Evaluator::Straight => 5,
            Evaluator::FourOfAKind | Evaluator::TwoPair => 4,
            Evaluator::ThreeOfAKind => 3,
            Evaluator::OnePair => 2,
            Evaluator::HighCard => 1,
        }
    }

    /// The rank of the hands matched by this evaluator.
    pub fn category(&self) -> HandRank {
        match self {
            Evaluator::StraightFlush { royal: true } => HandRank::RoyalFlush,
            Evaluator::StraightFlush { royal: false } => HandRank::StraightFlush,
            Evaluator::FourOfAKind => HandRank::FourOfAKind,
            Evaluator::FullHouse => HandRank::FullHouse,
            Evaluator::Flush => HandRank::Flush,
            Evaluator::Straight => HandRank::Straight,
            Evaluator::ThreeOfAKind => HandRank::ThreeOfAKind,
            Evaluator::TwoPair => HandRank::TwoPair,
            Evaluator::OnePair => HandRank::OnePair,
            Evaluator::HighCard => HandRank::HighCard,
        }
    }

    /// Returns the best hand matching this pattern or `None` if the cards don't
    /// match the pattern.
    ///
    /// The high card evaluator always matches, with no cards it returns a hand
    /// without cards.
    pub fn evaluate(&self, cards: &[Card]) -> Option<PokerHand> {
        match *self {
            Evaluator::StraightFlush { royal } => straight::straight_flush(cards, royal),
            Evaluator::FourOfAKind => groups::four_of_a_kind(cards),
            Evaluator::FullHouse => groups::full_house(cards),
            Evaluator::Flush => straight::flush(cards),
            Evaluator::Straight => straight::straight(cards),
            Evaluator::ThreeOfAKind => groups::three_of_a_kind(cards),
            Evaluator::TwoPair => groups::pairs(cards, 2, HandRank::TwoPair),
            Evaluator::OnePair => groups::pairs(cards, 1, HandRank::OnePair),
            Evaluator::HighCard => Some(groups::high_card(cards)),
        }
    }
}

impl From<HandRank> for Evaluator {
    fn from(rank: HandRank) -> Self {
        match rank {
            HandRank::RoyalFlush => Evaluator::StraightFlush { royal: true },
            HandRank::StraightFlush => Evaluator::StraightFlush { royal: false },
            HandRank::FourOfAKind => Evaluator::FourOfAKind,
            HandRank::FullHouse => Evaluator::FullHouse,
            HandRank::Flush => Evaluator::Flush,
            HandRank::Straight => Evaluator::Straight,
            HandRank::ThreeOfAKind => Evaluator::ThreeOfAKind,
            HandRank::TwoPair => Evaluator::TwoPair,
            HandRank::OnePair => Evaluator::OnePair,
            HandRank::HighCard => Evaluator::HighCard,
        }
    }
}

/// Returns a copy of the cards sorted by rank from the highest, cards with the
/// same rank keep their relative order. Jokers are dropped.
fn sorted_by_rank(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards
        .iter()
        .filter(|c| c.rank() != Rank::Joker)
        .copied()
        .collect::<Vec<_>>();
    sorted.sort_by(|a, b| b.rank().cmp(&a.rank()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::{Suit, parse_cards};

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn ranks(hand: &PokerHand) -> Vec<Rank> {
        hand.cards().iter().map(Card::rank).collect()
    }

    #[test]
    fn straight_flush() {
        let eval = Evaluator::StraightFlush { royal: false };
        assert_eq!(eval.category(), HandRank::StraightFlush);

        let hand = eval.evaluate(&cards("Ts 9s 7s 6s 8s As")).unwrap();
        assert_eq!(hand.rank(), HandRank::StraightFlush);
        assert_eq!(hand.cards(), cards("Ts 9s 8s 7s 6s"));

        // Wheel with the ace back to high.
        let hand = eval.evaluate(&cards("As 2s 5s 3s 7s 4s")).unwrap();
        assert_eq!(hand.cards(), cards("5s 4s 3s 2s As"));
        assert_eq!(hand.cards()[4].rank(), Rank::Ace);

        assert_eq!(eval.evaluate(&cards("As 2s 5s 3c 7s 4s")), None);
        assert_eq!(eval.evaluate(&cards("Ks Qs Js Ts")), None);
    }

    #[test]
    fn royal_flush() {
        let eval = Evaluator::StraightFlush { royal: true };
        assert_eq!(eval.category(), HandRank::RoyalFlush);

        assert_eq!(eval.evaluate(&cards("Ts 9s 7s 6s 8s As")), None);
        assert_eq!(eval.evaluate(&cards("As 2s 5s 3s 7s 4s")), None);
        assert_eq!(eval.evaluate(&cards("9h Th Jh Qh Kh")), None);

        let hand = eval.evaluate(&cards("Ts Js Ks 9s Qs As")).unwrap();
        assert_eq!(hand.rank(), HandRank::RoyalFlush);
        assert_eq!(hand.cards(), cards("As Ks Qs Js Ts"));

        // A king high straight flush is not royal.
        let hand = Evaluator::StraightFlush { royal: false }
            .evaluate(&cards("9h Th Jh Qh Kh"))
            .unwrap();
        assert_eq!(hand.rank(), HandRank::StraightFlush);
    }

    #[test]
    fn four_of_a_kind() {
        let eval = Evaluator::FourOfAKind;
        assert_eq!(eval.evaluate(&cards("Ts Tc Td 9s Qs As 3s")), None);

        let hand = eval.evaluate(&cards("Ts Tc Td Th Qs As 3s")).unwrap();
        assert_eq!(hand.rank(), HandRank::FourOfAKind);
        assert_eq!(hand.cards().len(), 5);
        assert!(hand.cards()[..4].iter().all(|c| c.rank() == Rank::Ten));
        assert_eq!(hand.cards()[4], "As".parse::<Card>().unwrap());

        // No kicker with only four cards.
        let hand = eval.evaluate(&cards("Ts Tc Td Th")).unwrap();
        assert_eq!(hand.rank(), HandRank::FourOfAKind);
        assert_eq!(ranks(&hand), vec![Rank::Ten; 4]);

        // The kicker may be lower than the quad.
        let hand = eval.evaluate(&cards("2c Ks Kc Kd Kh 3d")).unwrap();
        assert_eq!(ranks(&hand), [vec![Rank::King; 4], vec![Rank::Trey]].concat());

        assert_eq!(eval.evaluate(&cards("Ts Tc Td")), None);
    }

    #[test]
    fn full_house() {
        let eval = Evaluator::FullHouse;

        let hand = eval.evaluate(&cards("Ts Tc Td 7h 7d 7c Ac")).unwrap();
        assert_eq!(hand.rank(), HandRank::FullHouse);
        assert_eq!(hand.cards()[0].rank(), Rank::Ten);
        assert_eq!(hand.cards()[4].rank(), Rank::Seven);

        let hand = eval.evaluate(&cards("7h 7d 7c Ts Tc Td Ac")).unwrap();
        assert_eq!(hand.cards()[0].rank(), Rank::Ten);
        assert_eq!(hand.cards()[4].rank(), Rank::Seven);

        assert_eq!(eval.evaluate(&cards("7h 2d 9c Ts Tc Td Ac")), None);

        let hand = eval.evaluate(&cards("7h 9d 9c Ts Tc Td Ac")).unwrap();
        assert_eq!(hand.cards()[0].rank(), Rank::Ten);
        assert_eq!(hand.cards()[4].rank(), Rank::Nine);

        let hand = eval.evaluate(&cards("7h 9d 9c Ts Tc Td 7c")).unwrap();
        assert_eq!(ranks(&hand), [vec![Rank::Ten; 3], vec![Rank::Nine; 2]].concat());

        // A lower set and a higher pair.
        let hand = eval.evaluate(&cards("3h 3d 3c Ks Kc Qd Qc")).unwrap();
        assert_eq!(ranks(&hand), [vec![Rank::Trey; 3], vec![Rank::King; 2]].concat());
    }

    #[test]
    fn flush() {
        let eval = Evaluator::Flush;
        let hand = eval.evaluate(&cards("7h 9h Kh Th Tc Qh 7c")).unwrap();
        assert_eq!(hand.rank(), HandRank::Flush);
        assert_eq!(hand.cards(), cards("Kh Qh Th 9h 7h"));

        let hand = eval.evaluate(&cards("2h 7h 9h Kh Th 4h Qh 7c")).unwrap();
        assert_eq!(hand.cards(), cards("Kh Qh Th 9h 7h"));

        assert_eq!(eval.evaluate(&cards("7h 9h Kh Tc Ts Qh 7c")), None);
    }

    #[test]
    fn straight() {
        let eval = Evaluator::Straight;
        let hand = eval.evaluate(&cards("7h 9h 8h Tc Jd Qh 7c")).unwrap();
        assert_eq!(hand.rank(), HandRank::Straight);
        assert_eq!(hand.cards(), cards("Qh Jd Tc 9h 8h"));

        assert_eq!(eval.evaluate(&cards("7h 9h 8h 2c Jd Qh 7c")), None);

        let hand = eval.evaluate(&cards("3h Ah 4h 2c Jd Qh 5c")).unwrap();
        assert_eq!(hand.cards(), cards("5c 4h 3h 2c Ah"));

        let hand = eval.evaluate(&cards("Jh 9h 7h Tc 8d Th 5c")).unwrap();
        assert_eq!(
            ranks(&hand),
            vec![Rank::Jack, Rank::Ten, Rank::Nine, Rank::Eight, Rank::Seven]
        );
    }

    #[test]
    fn three_of_a_kind() {
        let eval = Evaluator::ThreeOfAKind;
        assert_eq!(eval.evaluate(&cards("Jh 9h 7h Tc 8d Th 5c")), None);

        let hand = eval.evaluate(&cards("Jh 7d 7h Tc 8d Th 7c")).unwrap();
        assert_eq!(hand.rank(), HandRank::ThreeOfAKind);
        assert_eq!(
            ranks(&hand),
            vec![Rank::Seven, Rank::Seven, Rank::Seven, Rank::Jack, Rank::Ten]
        );

        // The highest of two sets.
        let hand = eval.evaluate(&cards("Jh 7d 7h Jc 8d Js 7c")).unwrap();
        assert_eq!(
            ranks(&hand),
            vec![Rank::Jack, Rank::Jack, Rank::Jack, Rank::Eight, Rank::Seven]
        );
    }

    #[test]
    fn two_pair() {
        let eval = Evaluator::TwoPair;
        let hand = eval.evaluate(&cards("Jh 9d 7h Jc 8d Ah 7c")).unwrap();
        assert_eq!(hand.rank(), HandRank::TwoPair);
        assert_eq!(hand.cards()[0].rank(), Rank::Jack);
        assert_eq!(hand.cards()[2].rank(), Rank::Seven);
        assert_eq!(hand.cards()[4].rank(), Rank::Ace);

        assert_eq!(eval.evaluate(&cards("Th 9d 7h Jc 8d Ah 7c")), None);

        // Three pairs, the lowest pair card can't beat a higher kicker.
        let hand = eval.evaluate(&cards("Jh 7d 7h Jc 8d 8h Kc")).unwrap();
        assert_eq!(hand.cards()[0].rank(), Rank::Jack);
        assert_eq!(hand.cards()[2].rank(), Rank::Eight);
        assert_eq!(hand.cards()[4].rank(), Rank::King);

        let hand = eval.evaluate(&cards("Jh 7d 7h Jc 8d 8h 2c")).unwrap();
        assert_eq!(hand.cards()[4].rank(), Rank::Seven);
    }

    #[test]
    fn one_pair() {
        let eval = Evaluator::OnePair;
        let hand = eval.evaluate(&cards("Jh 9d 7h Jc 8d Ah Tc")).unwrap();
        assert_eq!(hand.rank(), HandRank::OnePair);
        assert_eq!(
            ranks(&hand),
            vec![Rank::Jack, Rank::Jack, Rank::Ace, Rank::Ten, Rank::Nine]
        );

        assert_eq!(eval.evaluate(&cards("Jh 9d 7h Qc 8d Ah Tc")), None);
        assert_eq!(eval.evaluate(&cards("Jh")), None);
    }

    #[test]
    fn high_card() {
        let eval = Evaluator::HighCard;
        let hand = eval.evaluate(&cards("Jh 9d 7h Jc 8d Ah Tc")).unwrap();
        assert_eq!(hand.rank(), HandRank::HighCard);
        assert_eq!(hand.cards(), cards("Ah Jh Jc Tc 9d"));

        let hand = eval.evaluate(&cards("4c 9d")).unwrap();
        assert_eq!(hand.cards(), cards("9d 4c"));

        let hand = eval.evaluate(&[]).unwrap();
        assert_eq!(hand, PokerHand::empty());
    }

    #[test]
    fn evaluators_metadata() {
        let evals = Evaluator::standard().collect::<Vec<_>>();
        assert_eq!(evals.len(), 10);
        assert!(evals.windows(2).all(|w| w[0].category() > w[1].category()));
        assert_eq!(evals[0], Evaluator::StraightFlush { royal: true });
        assert_eq!(evals[9], Evaluator::HighCard);

        let all = cards("As Ac Ad Ah Ks");
        for eval in evals {
            assert_eq!(Evaluator::from(eval.category()), eval);

            // No match and no panic with fewer cards than needed.
            let few = &all[..eval.minimal_card_count() - 1];
            if eval != Evaluator::HighCard {
                assert_eq!(eval.evaluate(few), None);
            }
        }
    }

    #[test]
    fn jokers_are_ignored() {
        let joker = Card::new(Rank::Joker, Suit::Spades);
        let with_joker = |s: &str| [vec![joker], cards(s)].concat();

        // A joker is not a rank above the ace.
        let input = with_joker("As Ks Qs Js");
        for eval in Evaluator::standard().filter(|e| *e != Evaluator::HighCard) {
            assert_eq!(eval.evaluate(&input), None, "{eval:?}");
        }

        let hand = Evaluator::HighCard.evaluate(&input).unwrap();
        assert_eq!(hand.cards(), cards("As Ks Qs Js"));

        // The joker doesn't hide the ace of a wheel.
        let hand = Evaluator::Straight
            .evaluate(&with_joker("As 2d 3h 4s 5c"))
            .unwrap();
        assert_eq!(hand.cards(), cards("5c 4s 3h 2d As"));

        // Nor does it count as a flush card.
        assert_eq!(Evaluator::Flush.evaluate(&with_joker("2s 5s 9s Js")), None);
        let hand = Evaluator::Flush
            .evaluate(&with_joker("2s 5s 9s Js Ks"))
            .unwrap();
        assert_eq!(hand.cards(), cards("Ks Js 9s 5s 2s"));

        let jokers = [joker; 4];
        assert_eq!(Evaluator::FourOfAKind.evaluate(&jokers), None);
        assert_eq!(Evaluator::HighCard.evaluate(&jokers), Some(PokerHand::empty()));
    }

    #[test]
    fn input_is_not_reordered() {
        let input = cards("2c As 5d 3h 4s");
        let copy = input.clone();
        for eval in Evaluator::standard() {
            let _ = eval.evaluate(&input);
        }
        assert_eq!(input, copy);
    }
}
