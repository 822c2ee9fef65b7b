//! The shared 52-card deck.
//!
//! The deck is consumed from the end (pop semantics) and never replenished.
//! One deck instance serves the whole match: lineups and substitutes are
//! dealt from it first, and the penalty shootout plays with whatever is left.

use serde::Serialize;
use tracing::trace;

use super::card::{Card, Rank, Suit};
use crate::core::{GameRng, MatchError};

/// Number of cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// An ordered pile of cards. The last card is the next one dealt.
///
/// Serialize only: decks are built by `standard`, `shuffled` or `from_cards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// One of each rank/suit combination, suit-major, unshuffled.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// A standard deck permuted uniformly at random.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// A stacked deck. The last element is dealt first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Cards still in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove the top card.
    pub fn pop(&mut self) -> Result<Card, MatchError> {
        let card = self.cards.pop().ok_or(MatchError::DeckExhausted {
            requested: 1,
            remaining: 0,
        })?;
        trace!(card = %card, remaining = self.cards.len(), "card popped");
        Ok(card)
    }

    /// Remove `count` cards, returned in the order they were popped.
    ///
    /// Fails without consuming anything if the deck holds fewer than `count`.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, MatchError> {
        if count > self.cards.len() {
            return Err(MatchError::DeckExhausted {
                requested: count,
                remaining: self.cards.len(),
            });
        }

        let split = self.cards.len() - count;
        let mut dealt = self.cards.split_off(split);
        dealt.reverse();
        trace!(count, remaining = self.cards.len(), "cards dealt");
        Ok(dealt)
    }
}
