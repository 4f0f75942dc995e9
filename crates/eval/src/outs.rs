// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Outs calculator.
use ahash::AHashSet;
use log::{debug, trace};

use showdown_cards::{Card, CardSource};

use crate::{hand::Comparison, registry::Registry};

/// The number of community cards on a complete board.
const BOARD_SIZE: usize = 5;

/// The cards that let a trailing hand tie or overtake the leading hand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outs {
    /// The out cards in the order they have been found.
    pub cards: Vec<Card>,
    /// Approximate probability of hitting an out on the coming community
    /// cards, this is the single card odds times the cards still to come and
    /// it is not an exact equity.
    pub probability: f64,
}

/// Calculates a player outs against another player.
#[derive(Debug, Clone)]
pub struct OutsCalculator {
    registry: Registry,
}

impl Default for OutsCalculator {
    fn default() -> Self {
        Self::new(Registry::standard())
    }
}

impl OutsCalculator {
    /// Creates a calculator that evaluates hands with the given registry.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// The registry used to evaluate hands.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Calculates the outs of the `a` hole cards against the `b` hole cards.
    ///
    /// If `a` ties or beats `b` with the current community cards there are no
    /// outs and the probability is 1. Otherwise each undealt card from the
    /// source is added to both hands and it is an out if `a` ties or beats
    /// `b`. The source cards are not consumed.
    pub fn calculate<S>(&self, a: &[Card], b: &[Card], community: &[Card], source: &S) -> Outs
    where
        S: CardSource + ?Sized,
    {
        let mut cards_a = [a, community].concat();
        let mut cards_b = [b, community].concat();

        let hand_a = self.registry.evaluate(&cards_a);
        let hand_b = self.registry.evaluate(&cards_b);
        if hand_a.compare(&hand_b) != Comparison::Lower {
            debug!("{hand_a} ahead of {hand_b}");
            return Outs {
                cards: Vec::new(),
                probability: 1.0,
            };
        }

        let mut seen = AHashSet::default();
        let mut outs = Vec::new();
        for card in source.undealt() {
            cards_a.push(card);
            cards_b.push(card);

            let next_a = self.registry.evaluate(&cards_a);
            let next_b = self.registry.evaluate(&cards_b);
            if next_a.compare(&next_b) != Comparison::Lower && seen.insert(card) {
                trace!("Out {card}: {next_a} against {next_b}");
                outs.push(card);
            }

            cards_a.pop();
            cards_b.pop();
        }

        let remaining = source.remaining();
        let rounds = BOARD_SIZE.saturating_sub(community.len());
        let probability = if remaining == 0 {
            0.0
        } else {
            outs.len() as f64 / remaining as f64 * rounds as f64
        };

        debug!(
            "{hand_a} behind {hand_b}, {} outs of {remaining} cards, probability {probability:.3}",
            outs.len()
        );

        Outs {
            cards: outs,
            probability,
        }
    }
}
