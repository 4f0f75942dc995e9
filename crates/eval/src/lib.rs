// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker hand evaluator.
//!
//! Finds the best hand in any set of cards, compares hands with the poker tie
//! breaking rules, and calculates the outs of a trailing hand. There is an
//! [Evaluator] for each hand rank, a [Registry] tries them from the strongest
//! rank and returns the first match:
//!
//! ```
//! # use showdown_eval::*;
//! let registry = Registry::standard();
//! let h1 = registry.evaluate(&parse_cards("Ts Tc Td 7h 7d 7c Ac").unwrap());
//! let h2 = registry.evaluate(&parse_cards("As Ks Qs Js 9s 2d 3c").unwrap());
//! assert_eq!(h1.rank(), HandRank::FullHouse);
//! assert_eq!(h2.rank(), HandRank::Flush);
//! assert_eq!(h1.compare(&h2), Comparison::Higher);
//! ```
//!
//! The [OutsCalculator] walks the undealt cards of a [Deck], or of any
//! [CardSource], to find the cards that let a trailing hand catch up:
//!
//! ```
//! # use showdown_eval::*;
//! let a = parse_cards("9h 8h").unwrap();
//! let b = parse_cards("As Ad").unwrap();
//! let board = parse_cards("2h 3h Kc").unwrap();
//!
//! let mut deck = Deck::default();
//! for card in a.iter().chain(&b).chain(&board) {
//!     deck.remove(*card);
//! }
//!
//! let outs = OutsCalculator::default().calculate(&a, &b, &board, &deck);
//! assert_eq!(outs.cards.len(), 9);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::Evaluator;

pub mod hand;
pub use hand::{Comparison, HandRank, PokerHand};

pub mod outs;
pub use outs::{Outs, OutsCalculator};

pub mod registry;
pub use registry::{Registry, RegistryError, SharedRegistry};

// Reexport cards types.
pub use showdown_cards::{Card, CardSource, Deck, ParseCardError, Rank, Suit, parse_cards};
