// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluators registry.
use log::debug;
use parking_lot::RwLock;
use std::{cmp::Reverse, mem, sync::Arc};
use thiserror::Error;

use showdown_cards::Card;

use crate::{
    eval::Evaluator,
    hand::{HandRank, PokerHand},
};

/// A set of evaluators, one for each hand rank, that finds the best hand.
///
/// Evaluators are tried from the strongest hand rank to the weakest and the
/// first match is the best hand. Use [Registry::standard] for the standard
/// poker rules, the default registry has no evaluators.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    evaluators: Vec<Evaluator>,
}

impl Registry {
    /// Creates a registry with the standard evaluators.
    pub fn standard() -> Self {
        let mut registry = Self::default();
        for evaluator in Evaluator::standard() {
            registry.register(evaluator);
        }

        registry
    }

    /// Registers an evaluator, replacing and returning the evaluator previously
    /// registered for the same hand rank.
    pub fn register(&mut self, evaluator: Evaluator) -> Option<Evaluator> {
        let category = evaluator.category();
        let replaced = match self.evaluators.iter_mut().find(|e| e.category() == category) {
            Some(registered) => Some(mem::replace(registered, evaluator)),
            None => {
                self.evaluators.push(evaluator);
                None
            }
        };

        self.evaluators.sort_by_key(|e| Reverse(e.category()));

        debug!(
            "Registered {category} evaluator ({} evaluators)",
            self.evaluators.len()
        );

        replaced
    }

    /// Returns the best hand of the given cards.
    ///
    /// If no evaluator matches, returns a high card hand without cards, this
    /// happens only with no cards or without a [Evaluator::HighCard] evaluator.
    pub fn evaluate(&self, cards: &[Card]) -> PokerHand {
        self.evaluators
            .iter()
            .find_map(|e| e.evaluate(cards))
            .unwrap_or_else(PokerHand::empty)
    }

    /// Returns the evaluator registered for a hand rank.
    pub fn find(&self, category: HandRank) -> Option<Evaluator> {
        self.evaluators
            .iter()
            .find(|e| e.category() == category)
            .copied()
    }

    /// Iterates the registered evaluators from the strongest hand rank.
    pub fn evaluators(&self) -> impl Iterator<Item = Evaluator> + '_ {
        self.evaluators.iter().copied()
    }
}

/// A registry error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry has been sealed and doesn't accept new evaluators.
    #[error("registry is sealed, cannot register the {0} evaluator")]
    Sealed(HandRank),
}

/// A registry that can be shared by threads that evaluate hands while other
/// threads register evaluators.
///
/// Once sealed the registry rejects new evaluators.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry(Arc<RwLock<Shared>>);

#[derive(Debug, Default)]
struct Shared {
    registry: Registry,
    sealed: bool,
}

impl SharedRegistry {
    /// Creates a shared registry with the given evaluators.
    pub fn new(registry: Registry) -> Self {
        Self(Arc::new(RwLock::new(Shared {
            registry,
            sealed: false,
        })))
    }

    /// Registers an evaluator, fails if the registry has been sealed.
    pub fn register(&self, evaluator: Evaluator) -> Result<Option<Evaluator>, RegistryError> {
        let mut shared = self.0.write();
        if shared.sealed {
            return Err(RegistryError::Sealed(evaluator.category()));
        }

        Ok(shared.registry.register(evaluator))
    }

    /// Rejects any further registration.
    pub fn seal(&self) {
        self.0.write().sealed = true;
    }

    /// Checks if the registry has been sealed.
    pub fn is_sealed(&self) -> bool {
        self.0.read().sealed
    }

    /// Returns the best hand of the given cards.
    pub fn evaluate(&self, cards: &[Card]) -> PokerHand {
        self.0.read().registry.evaluate(cards)
    }

    /// Returns the evaluator registered for a hand rank.
    pub fn find(&self, category: HandRank) -> Option<Evaluator> {
        self.0.read().registry.find(category)
    }

    /// A copy of the current registry.
    pub fn snapshot(&self) -> Registry {
        self.0.read().registry.clone()
    }
}
