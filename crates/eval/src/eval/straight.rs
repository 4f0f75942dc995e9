// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Straights and flushes.
use showdown_cards::{Card, Rank};

use super::sorted_by_rank;
use crate::hand::{HandRank, PokerHand};

/// Finds the highest straight, returns the run from the top card down.
///
/// An ace counts both as the highest card and as a one to complete a wheel
/// (5-4-3-2-A), in a wheel the ace is the last card with its rank back to ace.
fn find_straight(cards: &[Card]) -> Option<[Card; 5]> {
    let mut sorted = sorted_by_rank(cards);
    if let Some(&ace) = sorted.first().filter(|c| c.rank() == Rank::Ace) {
        sorted.push(ace.with_rank(Rank::AceLow));
    }

    // Cards with a repeated rank never break a run.
    sorted.dedup_by_key(|c| c.rank());

    sorted
        .windows(5)
        .find(|w| w[0].rank().value() - w[4].rank().value() == 4)
        .map(|w| {
            let mut run = [w[0], w[1], w[2], w[3], w[4]];
            if run[4].rank() == Rank::AceLow {
                run[4] = run[4].with_rank(Rank::Ace);
            }
            run
        })
}

/// Returns the cards of each suit with at least five cards sorted by rank.
fn flushes(cards: &[Card]) -> impl Iterator<Item = Vec<Card>> {
    let mut suits: [Vec<Card>; 4] = Default::default();
    for card in cards.iter().filter(|c| c.rank() != Rank::Joker) {
        suits[card.suit() as usize].push(*card);
    }

    suits
        .into_iter()
        .filter(|suited| suited.len() >= 5)
        .map(|suited| sorted_by_rank(&suited))
}

pub(super) fn straight_flush(cards: &[Card], royal: bool) -> Option<PokerHand> {
    if cards.len() < 5 {
        return None;
    }

    let run = flushes(cards)
        .filter_map(|suited| find_straight(&suited))
        .max_by_key(|run| run[0].rank())?;

    if !royal {
        Some(PokerHand::new(HandRank::StraightFlush, run.to_vec()))
    } else if run[0].rank() == Rank::Ace {
        Some(PokerHand::new(HandRank::RoyalFlush, run.to_vec()))
    } else {
        None
    }
}

pub(super) fn flush(cards: &[Card]) -> Option<PokerHand> {
    if cards.len() < 5 {
        return None;
    }

    // Only with more than one deck two suits can flush, take the best one.
    let suited = flushes(cards)
        .max_by_key(|suited| suited[..5].iter().map(Card::rank).collect::<Vec<_>>())?;

    Some(PokerHand::new(HandRank::Flush, suited[..5].to_vec()))
}

pub(super) fn straight(cards: &[Card]) -> Option<PokerHand> {
    if cards.len() < 5 {
        return None;
    }

    find_straight(cards).map(|run| PokerHand::new(HandRank::Straight, run.to_vec()))
}
