// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck and undealt cards sources.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A source of cards that have not been dealt yet.
///
/// Iterating a source must not consume its cards, a new call to
/// [CardSource::undealt] restarts the traversal from the first undealt card.
pub trait CardSource {
    /// Number of cards that have not been dealt.
    fn remaining(&self) -> usize;

    /// Lazily iterates the undealt cards.
    fn undealt(&self) -> impl Iterator<Item = Card> + '_;
}

impl CardSource for [Card] {
    fn remaining(&self) -> usize {
        self.len()
    }

    fn undealt(&self) -> impl Iterator<Item = Card> + '_ {
        self.iter().copied()
    }
}

/// A cards Deck.
///
/// Cards are dealt from the top of the deck, dealt cards are never returned to
/// the deck so dealing, burning, and cutting only ever move forward. A deck is
/// shuffled at most once and cut at most once. The deck
/// takes `&mut self` for any operation that changes it, share it behind a lock
/// to deal from multiple threads.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
    shuffled: bool,
    cut: bool,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// The minimum number of cards in each pile when cutting the deck.
    pub const MIN_CUT_PILE: usize = 10;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the undealt cards, returns false and leaves the deck untouched
    /// if the deck has already been shuffled.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.shuffled {
            return false;
        }

        self.cards[self.next..].shuffle(rng);
        self.shuffled = true;
        true
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.get(self.next).copied()?;
        self.next += 1;
        Some(card)
    }

    /// Discards the top card, returns false if the deck is empty.
    pub fn burn(&mut self) -> bool {
        self.deal().is_some()
    }

    /// Cuts the undealt cards at a random position.
    ///
    /// Each pile must have at least [Deck::MIN_CUT_PILE] cards, returns false
    /// and leaves the deck untouched if the deck has already been cut or if
    /// there are not enough cards to cut.
    pub fn cut<R: Rng>(&mut self, rng: &mut R) -> bool {
        let undealt = &mut self.cards[self.next..];
        if self.cut || undealt.len() < 2 * Self::MIN_CUT_PILE {
            return false;
        }

        let at = rng.random_range(Self::MIN_CUT_PILE..=undealt.len() - Self::MIN_CUT_PILE);
        undealt.rotate_left(at);
        self.cut = true;
        true
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len() - self.next
    }

    /// The undealt cards from the top of the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.next..]
    }

    /// Removes a card from the deck if it has not been dealt.
    pub fn remove(&mut self, card: Card) {
        if let Some(pos) = self.cards().iter().position(|c| c == &card) {
            self.cards.remove(self.next + pos);
        }
    }

    /// Calls the `f` closure for each k-cards hand of the undealt cards.
    ///
    /// Hands are visited in lexicographic order of the cards positions.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        let cards = self.cards();
        let n = cards.len();
        if k > n {
            return;
        }

        let mut pos = [0usize; 7];
        for (idx, p) in pos.iter_mut().enumerate().take(k) {
            *p = idx;
        }

        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 7];
        loop {
            for (c, &p) in h.iter_mut().zip(&pos[..k]) {
                *c = cards[p];
            }

            f(&h[..k]);

            // Find the rightmost position that can still move forward.
            let Some(idx) = (0..k).rev().find(|&idx| pos[idx] < n - k + idx) else {
                break;
            };

            pos[idx] += 1;
            for next in idx + 1..k {
                pos[next] = pos[next - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self {
            cards,
            next: 0,
            shuffled: false,
            cut: false,
        }
    }
}

impl CardSource for Deck {
    fn remaining(&self) -> usize {
        self.count()
    }

    fn undealt(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards().iter().copied()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.cards.drain(..self.next);
        self.cards.into_iter()
    }
}
