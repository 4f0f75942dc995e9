// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "Td".parse::<Card>().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert!(ah.rank() > td.rank());
//! ```
//!
//! and a [Deck] type for shuffling, dealing, burning, and cutting cards:
//!
//! ```
//! # use showdown_cards::{CardSource, Deck};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! assert!(deck.cut(&mut rand::rng()));
//! assert!(deck.burn());
//!
//! let card = deck.deal().unwrap();
//! assert_eq!(deck.remaining(), Deck::SIZE - 2);
//! assert!(deck.undealt().all(|c| c != card));
//! ```
//!
//! The [CardSource] trait exposes the undealt cards of a deck, or of any
//! slice of cards, without consuming them.
//!
//! To iterate through all k-cards hands of the undealt cards:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseCardError, Rank, Suit, parse_cards};

mod deck;
pub use deck::{CardSource, Deck};
